use std::sync::Arc;

use crate::log_debug;
use crate::modules::teacher_search::domain::{
    entities::Teacher, repositories::TeacherRepository, value_objects::SearchCriteria,
};
use crate::shared::errors::{AppError, AppResult};

/// Outcome of candidate resolution
#[derive(Debug, Clone)]
pub enum CandidateSet {
    /// A specific teacher was requested and found in scope.
    /// Refinement and pagination are skipped for this path.
    Single(Teacher),
    /// Every teacher in the subject/grade scope, unordered
    Many(Vec<Teacher>),
}

/// Looks up the subject/grade scoped candidates, or the single requested teacher
pub struct CandidateResolver {
    teacher_repository: Arc<dyn TeacherRepository>,
}

impl CandidateResolver {
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repository }
    }

    pub async fn resolve(&self, criteria: &SearchCriteria) -> AppResult<CandidateSet> {
        let (subject_id, grade_id) = (criteria.subject_id, criteria.grade_id);

        if let Some(teacher_id) = criteria.teacher_id {
            let teacher = self
                .teacher_repository
                .find_in_scope(teacher_id, subject_id, grade_id)
                .await?
                .filter(|t| t.id == teacher_id && t.teaches(subject_id, grade_id))
                .ok_or_else(|| AppError::NotFound("Teacher not found".to_string()))?;

            return Ok(CandidateSet::Single(teacher));
        }

        let mut candidates = self
            .teacher_repository
            .find_by_subject_and_grade(subject_id, grade_id)
            .await?;

        // The scope is the floor for every later stage
        let loaded = candidates.len();
        candidates.retain(|t| t.teaches(subject_id, grade_id));
        if candidates.len() != loaded {
            log_debug!(
                "Dropped {} out-of-scope candidates for subject {} grade {}",
                loaded - candidates.len(),
                subject_id,
                grade_id
            );
        }

        Ok(CandidateSet::Many(candidates))
    }
}
