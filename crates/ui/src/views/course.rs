use campus_core::model::CourseId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::ErrorState;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonRowVm, map_lesson_rows, markdown_to_html};

#[derive(Clone, Debug, PartialEq)]
struct CourseData {
    title: String,
    category: Option<String>,
    summary_html: String,
    lessons: Vec<LessonRowVm>,
}

#[component]
pub fn CourseView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(use_reactive!(|course_id| {
        let catalog = catalog.clone();
        async move {
            let course = catalog
                .course(CourseId::new(course_id))
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(CourseData {
                title: course.title.clone(),
                category: course.category.clone(),
                summary_html: markdown_to_html(&course.summary),
                lessons: map_lesson_rows(&course),
            })
        }
    }));
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            Link { class: "back-link", to: Route::Courses {}, "All courses" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(error) => rsx! {
                    ErrorState {
                        error,
                        on_retry: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                    }
                },
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    if let Some(category) = data.category {
                        span { class: "badge", "{category}" }
                    }
                    // Sanitized in markdown_to_html.
                    div { class: "course-summary", dangerous_inner_html: "{data.summary_html}" }
                    h3 { "Lessons" }
                    if data.lessons.is_empty() {
                        p { "This course has no lessons yet." }
                    } else {
                        ol { class: "lesson-list",
                            for row in data.lessons {
                                LessonRow { key: "{row.id}", row }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn LessonRow(row: LessonRowVm) -> Element {
    rsx! {
        li {
            Link {
                to: Route::Lesson {
                    course_id: row.course_id.value(),
                    lesson_id: row.id.value(),
                },
                "{row.position}. {row.title}"
            }
            span { class: "muted", " {row.duration_label}" }
        }
    }
}
