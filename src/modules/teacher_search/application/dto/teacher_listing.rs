use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::teacher_search::domain::{Grade, Language, Teacher};

/// Public shape of a teacher in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherListing {
    pub id: Uuid,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub experience_years: Option<i32>,
    pub subjects: Vec<SubjectListing>,
    pub languages: Vec<Language>,
    pub average_rating: Option<f64>,
    pub rating_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectListing {
    pub id: Uuid,
    pub name: String,
    pub grades: Vec<Grade>,
}

impl From<&Teacher> for TeacherListing {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.full_name(),
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            bio: teacher.bio.clone(),
            profile_image: teacher.profile_image.clone(),
            experience_years: teacher.experience_years,
            subjects: teacher
                .subjects
                .iter()
                .map(|taught| SubjectListing {
                    id: taught.subject.id,
                    name: taught.subject.name.clone(),
                    grades: taught.grades.clone(),
                })
                .collect(),
            languages: teacher.languages.clone(),
            average_rating: teacher
                .average_rating()
                .map(|avg| (avg * 100.0).round() / 100.0),
            rating_count: teacher.rating_count(),
        }
    }
}

impl From<Teacher> for TeacherListing {
    fn from(teacher: Teacher) -> Self {
        Self::from(&teacher)
    }
}
