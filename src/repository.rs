use sqlx::SqlitePool;

use crate::{Error, NewStudent, Student, StudentId};

/// Read/write access to persisted students, bound to a connection pool.
///
/// Connection handling is owned by the pool: every call checks a connection
/// out for the duration of one query and returns it on completion or failure.
/// Errors are propagated to the caller as-is.
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether at least one stored student has exactly this email.
    ///
    /// Exact equality, no normalization: case and whitespace are significant,
    /// and the input is passed through to the query unchanged.
    #[tracing::instrument(fields(%email), skip_all, ret)]
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, Error> {
        let row = sqlx::query_scalar::<_, i64>("SELECT id FROM students WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn find_all(&self) -> Result<Vec<Student>, Error> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, gender FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    #[tracing::instrument(fields(%id), skip_all)]
    pub async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, Error> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, gender FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Inserts a student and returns the store-assigned id.
    #[tracing::instrument(fields(email = %student.email), skip_all, ret)]
    pub async fn add(&self, student: &NewStudent) -> Result<StudentId, Error> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO students (first_name, last_name, email, gender) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.gender)
        .fetch_one(&self.pool)
        .await?;

        Ok(StudentId::from(id))
    }

    /// Overwrites the student with this id. Returns `false` when no row matched.
    #[tracing::instrument(fields(%id), skip_all, ret)]
    pub async fn update(&self, id: StudentId, student: &NewStudent) -> Result<bool, Error> {
        let result = sqlx::query(
            "UPDATE students SET first_name = ?, last_name = ?, email = ?, gender = ? WHERE id = ?",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.gender)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no row matched.
    #[tracing::instrument(fields(%id), skip_all, ret)]
    pub async fn delete(&self, id: StudentId) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, ret)]
    pub async fn count(&self) -> Result<i64, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
