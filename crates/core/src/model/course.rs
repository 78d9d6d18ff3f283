use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, LessonId};
use crate::model::listing::Searchable;

/// A lesson as returned by the backend. Order inside the course is the play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// The lesson played after `current`, if any. Unknown lessons have no successor.
    #[must_use]
    pub fn next_lesson(&self, current: LessonId) -> Option<&Lesson> {
        let position = self
            .lessons
            .iter()
            .position(|lesson| lesson.id == current)?;
        self.lessons.get(position + 1)
    }

    /// Total runtime across lessons, in whole minutes (rounded up).
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        let secs: u32 = self
            .lessons
            .iter()
            .map(|lesson| lesson.duration_secs)
            .sum();
        secs.div_ceil(60)
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.summary.as_str()];
        if let Some(category) = self.category.as_deref() {
            fields.push(category);
        }
        fields
    }
}
