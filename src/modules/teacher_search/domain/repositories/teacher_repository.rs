use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::teacher_search::domain::entities::Teacher;
use crate::shared::errors::AppResult;

/// Port (interface) for reading teachers. Infrastructure provides the
/// implementation; this core only reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// All teachers who teach `subject_id` for `grade_id`, fully loaded
    /// (subjects, languages, feedback). Order is unspecified.
    async fn find_by_subject_and_grade(
        &self,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Vec<Teacher>>;

    /// The teacher with `teacher_id`, only if they teach `subject_id` for
    /// `grade_id`.
    async fn find_in_scope(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Option<Teacher>>;
}
