use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::teacher_search::domain::{
    Feedback, Language, TaughtSubject, Teacher, TeacherRepository,
};
use crate::modules::teacher_search::infrastructure::models::{
    FeedbackModel, GradeModel, HomeworkTeacherModel, LanguageModel, SubjectModel,
};
use crate::schema::{
    grades, homework_teacher_languages, homework_teacher_subjects, homework_teachers, languages,
    subjects, teacher_feedback, users,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::{Database, SharedDatabaseState};

pub struct TeacherRepositoryImpl {
    db_state: SharedDatabaseState,
}

impl TeacherRepositoryImpl {
    pub fn new(db_state: SharedDatabaseState) -> Self {
        Self { db_state }
    }

    async fn database(&self) -> AppResult<Arc<Database>> {
        self.db_state.read().await.get_database()
    }

    /// Load teachers with their subjects, languages and feedback in four
    /// batched queries.
    fn load_teachers(conn: &mut PgConnection, ids: &[Uuid]) -> AppResult<Vec<Teacher>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(HomeworkTeacherModel, (String, String))> = homework_teachers::table
            .inner_join(users::table)
            .filter(homework_teachers::id.eq_any(ids.to_vec()))
            .select((
                HomeworkTeacherModel::as_select(),
                (users::first_name, users::last_name),
            ))
            .load(conn)?;

        let taught_rows: Vec<(Uuid, SubjectModel, GradeModel)> = homework_teacher_subjects::table
            .inner_join(subjects::table)
            .inner_join(grades::table)
            .filter(homework_teacher_subjects::teacher_id.eq_any(ids.to_vec()))
            .order((subjects::name.asc(), subjects::id.asc(), grades::name.asc()))
            .select((
                homework_teacher_subjects::teacher_id,
                SubjectModel::as_select(),
                GradeModel::as_select(),
            ))
            .load(conn)?;

        let language_rows: Vec<(Uuid, LanguageModel)> = homework_teacher_languages::table
            .inner_join(languages::table)
            .filter(homework_teacher_languages::teacher_id.eq_any(ids.to_vec()))
            .order(languages::name.asc())
            .select((
                homework_teacher_languages::teacher_id,
                LanguageModel::as_select(),
            ))
            .load(conn)?;

        let feedback_rows: Vec<FeedbackModel> = teacher_feedback::table
            .filter(teacher_feedback::teacher_id.eq_any(ids.to_vec()))
            .order(teacher_feedback::created_at.desc())
            .select(FeedbackModel::as_select())
            .load(conn)?;

        let mut subjects_by_teacher: HashMap<Uuid, Vec<TaughtSubject>> = HashMap::new();
        for (teacher_id, subject, grade) in taught_rows {
            let taught = subjects_by_teacher.entry(teacher_id).or_default();
            match taught.iter_mut().find(|t| t.subject.id == subject.id) {
                Some(existing) => existing.grades.push(grade.into()),
                None => taught.push(TaughtSubject {
                    subject: subject.into(),
                    grades: vec![grade.into()],
                }),
            }
        }

        let mut languages_by_teacher: HashMap<Uuid, Vec<Language>> = HashMap::new();
        for (teacher_id, language) in language_rows {
            languages_by_teacher
                .entry(teacher_id)
                .or_default()
                .push(language.into());
        }

        let mut feedback_by_teacher: HashMap<Uuid, Vec<Feedback>> = HashMap::new();
        for feedback in feedback_rows {
            feedback_by_teacher
                .entry(feedback.teacher_id)
                .or_default()
                .push(feedback.into());
        }

        Ok(rows
            .into_iter()
            .map(|(model, (first_name, last_name))| Teacher {
                id: model.id,
                user_id: model.user_id,
                first_name,
                last_name,
                bio: model.bio,
                profile_image: model.profile_image,
                experience_years: model.experience_years,
                subjects: subjects_by_teacher.remove(&model.id).unwrap_or_default(),
                languages: languages_by_teacher.remove(&model.id).unwrap_or_default(),
                feedback: feedback_by_teacher.remove(&model.id).unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl TeacherRepository for TeacherRepositoryImpl {
    async fn find_by_subject_and_grade(
        &self,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Vec<Teacher>> {
        let db = self.database().await?;
        let start = std::time::Instant::now();

        let teachers = task::spawn_blocking(move || -> AppResult<Vec<Teacher>> {
            let mut conn = db.get_connection()?;

            let ids: Vec<Uuid> = homework_teacher_subjects::table
                .filter(homework_teacher_subjects::subject_id.eq(subject_id))
                .filter(homework_teacher_subjects::grade_id.eq(grade_id))
                .select(homework_teacher_subjects::teacher_id)
                .distinct()
                .load(&mut conn)?;

            Self::load_teachers(&mut conn, &ids)
        })
        .await??;

        LogContext::db_operation("find_by_subject_and_grade", "homework_teachers", start.elapsed());

        Ok(teachers)
    }

    async fn find_in_scope(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
        grade_id: Uuid,
    ) -> AppResult<Option<Teacher>> {
        let db = self.database().await?;

        task::spawn_blocking(move || -> AppResult<Option<Teacher>> {
            let mut conn = db.get_connection()?;

            let in_scope: bool = diesel::select(diesel::dsl::exists(
                homework_teacher_subjects::table
                    .filter(homework_teacher_subjects::teacher_id.eq(teacher_id))
                    .filter(homework_teacher_subjects::subject_id.eq(subject_id))
                    .filter(homework_teacher_subjects::grade_id.eq(grade_id)),
            ))
            .get_result(&mut conn)?;

            if !in_scope {
                return Ok(None);
            }

            Ok(Self::load_teachers(&mut conn, &[teacher_id])?
                .into_iter()
                .next())
        })
        .await?
    }
}
