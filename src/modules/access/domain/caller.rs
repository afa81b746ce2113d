use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Instructor,
    HomeworkTeacher,
}

/// The user behind an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    /// A homework teacher profile exists for this user, whatever the role says
    pub has_teacher_profile: bool,
}

impl Caller {
    pub fn is_instructor(&self) -> bool {
        self.role == UserRole::Instructor
    }

    pub fn is_homework_teacher(&self) -> bool {
        self.role == UserRole::HomeworkTeacher || self.has_teacher_profile
    }

    /// Only students without a teacher profile may browse teachers
    pub fn is_homework_student(&self) -> bool {
        !self.is_instructor() && !self.is_homework_teacher()
    }
}
