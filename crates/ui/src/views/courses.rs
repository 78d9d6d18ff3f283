use campus_core::model::{DEFAULT_PAGE_SIZE, ListQuery};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{ErrorState, Pager, SearchBox};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, PagerVm, map_course_cards};

#[derive(Clone, Debug, PartialEq)]
struct CoursesData {
    cards: Vec<CourseCardVm>,
    pager: PagerVm,
}

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1_u32);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let query = ListQuery::new(DEFAULT_PAGE_SIZE)
            .with_search(search())
            .with_page(page());
        async move {
            let page = catalog
                .courses(&query)
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(CoursesData {
                cards: map_course_cards(&page.items),
                pager: PagerVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Courses" }
                SearchBox {
                    value: search(),
                    placeholder: "Search courses",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
            }

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
                    if data.cards.is_empty() {
                        p { "No courses match your search." }
                    } else {
                        table { class: "list-table",
                            thead {
                                tr {
                                    th { "Course" }
                                    th { "Category" }
                                    th { "Lessons" }
                                    th { "Length" }
                                }
                            }
                            tbody {
                                for card in data.cards {
                                    CourseRow { key: "{card.id}", card }
                                }
                            }
                        }
                    }
                    Pager { pager: data.pager, on_page: move |next| page.set(next) }
                },
            }
        }
    }
}

#[component]
fn CourseRow(card: CourseCardVm) -> Element {
    let category = card.category.clone().unwrap_or_default();
    rsx! {
        tr {
            td {
                Link { to: Route::Course { course_id: card.id.value() }, "{card.title}" }
                p { class: "muted", "{card.excerpt}" }
            }
            td { "{category}" }
            td { "{card.lessons_label}" }
            td { "{card.duration_label}" }
        }
    }
}
