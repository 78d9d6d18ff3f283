use campus_core::model::{Course, CourseId, Lesson, LessonId};

use crate::vm::markdown_vm::markdown_excerpt;
use crate::vm::time_fmt::format_minutes;

const SUMMARY_EXCERPT_CHARS: usize = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub category: Option<String>,
    pub excerpt: String,
    pub lessons_label: String,
    pub duration_label: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        let lessons = course.lessons.len();
        Self {
            id: course.id,
            title: course.title.clone(),
            category: course.category.clone(),
            excerpt: markdown_excerpt(&course.summary, SUMMARY_EXCERPT_CHARS),
            lessons_label: if lessons == 1 {
                "1 lesson".to_string()
            } else {
                format!("{lessons} lessons")
            },
            duration_label: format_minutes(course.total_minutes() * 60),
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub course_id: CourseId,
    pub id: LessonId,
    pub position: usize,
    pub title: String,
    pub duration_label: String,
}

#[must_use]
pub fn map_lesson_rows(course: &Course) -> Vec<LessonRowVm> {
    course
        .lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| lesson_row(course.id, index + 1, lesson))
        .collect()
}

fn lesson_row(course_id: CourseId, position: usize, lesson: &Lesson) -> LessonRowVm {
    LessonRowVm {
        course_id,
        id: lesson.id,
        position,
        title: lesson.title.clone(),
        duration_label: format_minutes(lesson.duration_secs),
    }
}
