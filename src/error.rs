#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("data access failure :: {0}")]
    Database(#[from] sqlx::Error),
}
