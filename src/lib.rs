mod error;
mod repository;
mod student;

pub use error::Error;
pub use repository::StudentRepository;
pub use student::{Gender, NewStudent, Student, StudentId};
