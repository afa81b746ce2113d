/// In-memory implementations of the repository ports
use async_trait::async_trait;
use homework_teachers_lib::modules::access::{Caller, SessionRepository};
use homework_teachers_lib::modules::teacher_search::domain::{Teacher, TeacherRepository};
use homework_teachers_lib::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: Vec<Teacher>,
    fail_with: Option<String>,
}

impl InMemoryTeacherRepository {
    pub fn new(teachers: Vec<Teacher>) -> Self {
        Self {
            teachers,
            fail_with: None,
        }
    }

    /// Every read fails with a database error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            teachers: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }

    fn check(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn find_by_subject_and_grade(
        &self,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Vec<Teacher>> {
        self.check()?;
        Ok(self
            .teachers
            .iter()
            .filter(|t| t.teaches(subject_id, grade_id))
            .cloned()
            .collect())
    }

    async fn find_in_scope(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Option<Teacher>> {
        self.check()?;
        Ok(self
            .teachers
            .iter()
            .find(|t| t.id == teacher_id && t.teaches(subject_id, grade_id))
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    callers: HashMap<String, Caller>,
}

impl InMemorySessionRepository {
    pub fn with_token(mut self, token: &str, caller: Caller) -> Self {
        self.callers.insert(token.to_string(), caller);
        self
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_caller_by_token(&self, token: &str) -> AppResult<Option<Caller>> {
        Ok(self.callers.get(token).cloned())
    }
}
