use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{DownloadCardVm, map_download_cards};

#[component]
pub fn DownloadsView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_download_cards(ctx.downloads().links());

    rsx! {
        div { class: "page",
            h2 { "Downloads" }
            p { "Take your courses with you." }
            ul { class: "download-grid",
                for card in cards {
                    DownloadCard { key: "{card.platform_label}", card }
                }
            }
        }
    }
}

#[component]
fn DownloadCard(card: DownloadCardVm) -> Element {
    rsx! {
        li { class: "download-card",
            h3 { "{card.platform_label}" }
            if let Some(href) = card.href {
                a { class: "btn btn-primary", href: "{href}", "Download" }
            } else {
                span { class: "badge badge-soon", "Coming soon" }
            }
        }
    }
}
