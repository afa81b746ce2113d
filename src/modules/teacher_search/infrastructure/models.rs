use crate::schema::{grades, homework_teachers, languages, subjects, teacher_feedback};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::teacher_search::domain::{Feedback, Grade, Language, Subject};

// ============= TEACHER MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = homework_teachers)]
pub struct HomeworkTeacherModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = teacher_feedback)]
pub struct FeedbackModel {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============= CATALOG MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct SubjectModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = grades)]
pub struct GradeModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = languages)]
pub struct LanguageModel {
    pub id: Uuid,
    pub name: String,
}

impl From<FeedbackModel> for Feedback {
    fn from(model: FeedbackModel) -> Self {
        Feedback {
            id: model.id,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}

impl From<SubjectModel> for Subject {
    fn from(model: SubjectModel) -> Self {
        Subject::new(model.id, model.name)
    }
}

impl From<GradeModel> for Grade {
    fn from(model: GradeModel) -> Self {
        Grade::new(model.id, model.name)
    }
}

impl From<LanguageModel> for Language {
    fn from(model: LanguageModel) -> Self {
        Language::new(model.id, model.name)
    }
}
