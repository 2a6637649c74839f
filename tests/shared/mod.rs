pub mod setup;

use student_data_access::{Gender, NewStudent};

pub fn student(first_name: &str, last_name: &str, email: &str, gender: Gender) -> NewStudent {
    NewStudent {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        gender,
    }
}
