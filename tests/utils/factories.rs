/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::Utc;
use homework_teachers_lib::modules::access::{Caller, UserRole};
use homework_teachers_lib::modules::teacher_search::domain::{
    Feedback, Grade, Language, Subject, TaughtSubject, Teacher,
};
use uuid::Uuid;

pub struct TeacherFactory {
    id: Uuid,
    first_name: String,
    last_name: String,
    bio: Option<String>,
    experience_years: Option<i32>,
    subjects: Vec<TaughtSubject>,
    languages: Vec<Language>,
    ratings: Vec<i32>,
}

impl TeacherFactory {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            bio: None,
            experience_years: None,
            subjects: Vec::new(),
            languages: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }

    pub fn with_experience(mut self, years: i32) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Teach `subject` for `grade`; repeated calls for the same subject add grades
    pub fn teaching(mut self, subject: &Subject, grade: &Grade) -> Self {
        match self.subjects.iter_mut().find(|t| t.subject.id == subject.id) {
            Some(taught) => taught.grades.push(grade.clone()),
            None => self.subjects.push(TaughtSubject {
                subject: subject.clone(),
                grades: vec![grade.clone()],
            }),
        }
        self
    }

    pub fn speaking(mut self, language: &Language) -> Self {
        self.languages.push(language.clone());
        self
    }

    pub fn rated(mut self, ratings: &[i32]) -> Self {
        self.ratings.extend_from_slice(ratings);
        self
    }

    pub fn build(self) -> Teacher {
        Teacher {
            id: self.id,
            user_id: Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_image: None,
            experience_years: self.experience_years,
            subjects: self.subjects,
            languages: self.languages,
            feedback: self
                .ratings
                .into_iter()
                .map(|rating| Feedback {
                    id: Uuid::new_v4(),
                    rating,
                    comment: None,
                    created_at: Utc::now(),
                })
                .collect(),
        }
    }
}

pub fn subject(name: &str) -> Subject {
    Subject::new(Uuid::new_v4(), name)
}

pub fn grade(name: &str) -> Grade {
    Grade::new(Uuid::new_v4(), name)
}

pub fn language(name: &str) -> Language {
    Language::new(Uuid::new_v4(), name)
}

pub fn caller(role: UserRole) -> Caller {
    Caller {
        user_id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role,
        is_active: true,
        has_teacher_profile: false,
    }
}
