use campus_core::model::{CourseId, LessonId, MiniPlayer};
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::debug;

use super::{CountdownOverlay, FloatingPlayer};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::ErrorState;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
struct NextLesson {
    id: u64,
    title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LessonData {
    course_title: String,
    title: String,
    duration_label: String,
    video_url: Option<String>,
    next: Option<NextLesson>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Completion {
    Watching,
    CountingDown,
    Dismissed,
    CourseComplete,
}

#[component]
pub fn LessonView(course_id: u64, lesson_id: u64) -> Element {
    // Keyed so moving to the next lesson starts from a fresh page: new
    // countdown, mini-player hidden.
    rsx! {
        LessonPage { key: "{course_id}-{lesson_id}", course_id, lesson_id }
    }
}

#[component]
fn LessonPage(course_id: u64, lesson_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let auto_advance_secs = ctx.auto_advance_secs();
    let mut mini_player = use_signal(MiniPlayer::hidden);
    let mut completion = use_signal(|| Completion::Watching);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let context = catalog
                .lesson(CourseId::new(course_id), LessonId::new(lesson_id))
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(LessonData {
                course_title: context.course.title.clone(),
                title: context.lesson.title.clone(),
                duration_label: format_minutes(context.lesson.duration_secs),
                video_url: context.lesson.video_url.clone(),
                next: context.next.map(|lesson| NextLesson {
                    id: lesson.id.value(),
                    title: lesson.title,
                }),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page lesson-page",
            Link { class: "back-link", to: Route::Course { course_id }, "Back to course" }

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
                ViewState::Ready(data) => {
                    let next = data.next.clone();
                    let finish_next = next.is_some();
                    let player_visible = mini_player.read().is_visible();
                    rsx! {
                        header { class: "page-header",
                            p { class: "muted", "{data.course_title}" }
                            h2 { "{data.title}" }
                            span { class: "muted", "{data.duration_label}" }
                        }

                        if player_visible {
                            div { class: "player player--docked",
                                p { "Playing in the mini player." }
                            }
                        } else {
                            div { class: "player", id: "lesson-player",
                                if let Some(src) = data.video_url.clone() {
                                    video { src: "{src}", controls: true }
                                } else {
                                    div { class: "video-placeholder", "Video" }
                                }
                            }
                        }

                        div { class: "lesson-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: player_visible,
                                onclick: move |_| mini_player.write().open(),
                                "Pop out"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: completion() != Completion::Watching,
                                onclick: move |_| {
                                    completion.set(if finish_next {
                                        Completion::CountingDown
                                    } else {
                                        Completion::CourseComplete
                                    });
                                },
                                "Finish lesson"
                            }
                        }

                        match (completion(), next) {
                            (Completion::CountingDown, Some(next)) => {
                                let next_id = next.id;
                                rsx! {
                                    CountdownOverlay {
                                        next_title: next.title,
                                        duration_secs: auto_advance_secs,
                                        on_navigate: move |_| {
                                            navigator.push(Route::Lesson {
                                                course_id,
                                                lesson_id: next_id,
                                            });
                                        },
                                        on_cancel: move |_| completion.set(Completion::Dismissed),
                                    }
                                }
                            }
                            (Completion::Dismissed, Some(next)) => rsx! {
                                Link {
                                    class: "btn btn-secondary",
                                    to: Route::Lesson { course_id, lesson_id: next.id },
                                    "Up next: {next.title}"
                                }
                            },
                            (Completion::CourseComplete, _) => rsx! {
                                p { class: "course-complete", "Course complete" }
                            },
                            _ => rsx! {},
                        }

                        FloatingPlayer {
                            visible: player_visible,
                            title: data.title.clone(),
                            video_url: data.video_url.clone(),
                            on_expand: move |_| {
                                let exit = mini_player.write().expand();
                                debug!(?exit, "mini player dismissed");
                            },
                            on_close: move |_| {
                                let exit = mini_player.write().close();
                                debug!(?exit, "mini player dismissed");
                            },
                        }
                    }
                }
            }
        }
    }
}
