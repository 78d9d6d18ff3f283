use campus_core::model::{DEFAULT_PAGE_SIZE, ListQuery};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{ErrorState, Pager, SearchBox};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ForumTopicVm, PagerVm, map_forum_topics};

#[derive(Clone, Debug, PartialEq)]
struct ForumData {
    topics: Vec<ForumTopicVm>,
    pager: PagerVm,
}

#[component]
pub fn ForumView() -> Element {
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
                .forum_topics(&query)
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(ForumData {
                topics: map_forum_topics(&page.items),
                pager: PagerVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Forum" }
                SearchBox {
                    value: search(),
                    placeholder: "Search topics",
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
                    if data.topics.is_empty() {
                        p { "No topics yet." }
                    } else {
                        ul { class: "topic-list",
                            for topic in data.topics {
                                li { key: "{topic.id}",
                                    h3 { "{topic.title}" }
                                    p { class: "muted", "{topic.byline}" }
                                    span { class: "badge", "{topic.replies_label}" }
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
