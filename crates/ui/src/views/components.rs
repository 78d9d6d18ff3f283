use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::PagerVm;

#[component]
pub fn SearchBox(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

#[component]
pub fn Pager(pager: PagerVm, on_page: EventHandler<u32>) -> Element {
    let page = pager.page;
    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !pager.has_previous,
                onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "pager-label", "{pager.label()}" }
            span { class: "pager-count", "{pager.results_label()}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !pager.has_next,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}

#[component]
pub fn ErrorState(error: ViewError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-state",
            p { "{error.message()}" }
            if error == ViewError::Unknown {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
