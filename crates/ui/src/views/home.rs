use campus_core::model::{LandingView, ListQuery, landing_view};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, ProfileState};
use crate::routes::Route;
use crate::views::components::ErrorState;
use crate::views::profile::{ProfileChoice, ProfilePrompt, use_profile_choice};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

const FEATURED_COURSES: u32 = 3;

#[component]
pub fn HomeView() -> Element {
    let choice = use_profile_choice();
    rsx! { HomeLanding { choice } }
}

/// Landing for the current persona, with the prompt layered on top while
/// no persona exists or while it is fading out.
#[component]
pub(crate) fn HomeLanding(choice: ProfileChoice) -> Element {
    let profile = use_context::<ProfileState>();
    let selection = profile.current();
    let leaving = (choice.leaving)();
    let show_prompt = selection.is_unset() || leaving;

    rsx! {
        div { class: "page home-page",
            match landing_view(selection) {
                LandingView::ProfilePrompt => rsx! {
                    p { class: "muted", "Choose a profile to get started." }
                },
                LandingView::CoursePlatform => rsx! {
                    CoursePlatformHome {}
                },
                LandingView::PatientPortal => rsx! {
                    PatientPortalHome {}
                },
            }
            if show_prompt {
                ProfilePrompt {
                    leaving,
                    on_select: move |persona| choice.choose.call(persona),
                }
            }
        }
    }
}

#[component]
fn CoursePlatformHome() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let page = catalog
                .courses(&ListQuery::new(FEATURED_COURSES))
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(map_course_cards(&page.items))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        section { class: "landing landing-courses",
            h2 { "Continue learning" }
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
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses are published yet." }
                    } else {
                        ul { class: "course-grid",
                            for card in cards {
                                FeaturedCourse { key: "{card.id}", card }
                            }
                        }
                    }
                    Link { class: "btn btn-secondary", to: Route::Courses {}, "Browse all courses" }
                },
            }
        }
    }
}

#[component]
fn FeaturedCourse(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            Link { to: Route::Course { course_id: card.id.value() },
                h3 { "{card.title}" }
            }
            p { "{card.excerpt}" }
            span { class: "muted", "{card.lessons_label} · {card.duration_label}" }
        }
    }
}

#[component]
fn PatientPortalHome() -> Element {
    rsx! {
        section { class: "landing landing-patient",
            h2 { "Patient area" }
            p { "Guidance from your care team, in short videos you can watch at your own pace." }
            ul { class: "patient-links",
                li {
                    Link { to: Route::Courses {}, "Browse guided programmes" }
                }
                li {
                    Link { to: Route::Forum {}, "Ask the community" }
                }
                li {
                    Link { to: Route::Downloads {}, "Get the mobile app" }
                }
            }
        }
    }
}
