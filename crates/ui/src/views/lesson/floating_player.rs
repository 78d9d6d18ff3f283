use dioxus::prelude::*;

/// Small always-on-top player. Renders nothing while hidden.
#[component]
pub fn FloatingPlayer(
    visible: bool,
    title: String,
    video_url: Option<String>,
    on_expand: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        aside { class: "mini-player", aria_label: "Mini player",
            div { class: "mini-player__surface",
                if let Some(src) = video_url {
                    video { src: "{src}", autoplay: true, muted: true }
                } else {
                    div { class: "video-placeholder", "Video" }
                }
            }
            div { class: "mini-player__bar",
                span { class: "mini-player__title", "{title}" }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    aria_label: "Expand player",
                    onclick: move |_| on_expand.call(()),
                    "Expand"
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    aria_label: "Close mini player",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
