use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{Grade, Language, Subject};

/// A homework teacher as read from persistence. This core never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub experience_years: Option<i32>,
    pub subjects: Vec<TaughtSubject>,
    pub languages: Vec<Language>,
    pub feedback: Vec<Feedback>,
}

/// A subject a teacher teaches, scoped to the grades they teach it for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaughtSubject {
    pub subject: Subject,
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Teacher {
    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn teaches(&self, subject_id: Uuid, grade_id: Uuid) -> bool {
        self.subjects.iter().any(|taught| {
            taught.subject.id == subject_id && taught.grades.iter().any(|g| g.id == grade_id)
        })
    }

    pub fn speaks(&self, language_id: Uuid) -> bool {
        self.languages.iter().any(|l| l.id == language_id)
    }

    /// Case-insensitive substring match against the full, first or last name
    pub fn matches_name(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.full_name().to_lowercase().contains(&needle)
            || self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
    }

    /// Mean of all feedback ratings; `None` when nobody has rated the teacher
    pub fn average_rating(&self) -> Option<f64> {
        if self.feedback.is_empty() {
            return None;
        }
        let sum: i64 = self.feedback.iter().map(|f| f.rating as i64).sum();
        Some(sum as f64 / self.feedback.len() as f64)
    }

    pub fn rating_count(&self) -> usize {
        self.feedback.len()
    }
}
