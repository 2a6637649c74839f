mod shared;

use shared::{setup::pool, student};
use student_data_access::{Gender, StudentRepository};

#[tokio::test]
async fn empty_store_matches_nothing() {
    let repo = StudentRepository::new(pool().await);

    assert_eq!(
        repo.exists_by_email("anything@example.com").await.unwrap(),
        false
    );
}

#[tokio::test]
async fn present_and_absent_emails() {
    let repo = StudentRepository::new(pool().await);

    repo.add(&student("Jane", "Doe", "jane@example.com", Gender::Female))
        .await
        .unwrap();

    assert_eq!(repo.exists_by_email("jane@example.com").await.unwrap(), true);
    assert_eq!(
        repo.exists_by_email("john@example.com").await.unwrap(),
        false
    );
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let repo = StudentRepository::new(pool().await);

    repo.add(&student("Ada", "Xu", "A@x.com", Gender::Female))
        .await
        .unwrap();

    assert_eq!(repo.exists_by_email("A@x.com").await.unwrap(), true);
    assert_eq!(repo.exists_by_email("a@x.com").await.unwrap(), false);
}

#[tokio::test]
async fn lookup_does_not_trim_whitespace() {
    let repo = StudentRepository::new(pool().await);

    repo.add(&student("Jane", "Doe", "jane@example.com", Gender::Female))
        .await
        .unwrap();

    assert_eq!(
        repo.exists_by_email(" jane@example.com").await.unwrap(),
        false
    );
    assert_eq!(
        repo.exists_by_email("jane@example.com ").await.unwrap(),
        false
    );
}

#[tokio::test]
async fn empty_string_only_matches_an_empty_email() {
    let repo = StudentRepository::new(pool().await);

    repo.add(&student("Jane", "Doe", "jane@example.com", Gender::Female))
        .await
        .unwrap();

    assert_eq!(repo.exists_by_email("").await.unwrap(), false);

    repo.add(&student("No", "Email", "", Gender::Other))
        .await
        .unwrap();

    assert_eq!(repo.exists_by_email("").await.unwrap(), true);
}
