use std::time::Duration;

use campus_core::model::Persona;
use dioxus::prelude::*;

use crate::context::ProfileState;

const CHOICES: [Persona; 2] = [Persona::Student, Persona::Patient];

/// Length of the prompt's exit transition.
pub const PROMPT_EXIT: Duration = Duration::from_millis(200);

/// Persona choice made from the prompt.
///
/// `leaving` stays set for `PROMPT_EXIT` after a choice so the prompt can
/// fade out over the newly selected landing page.
#[derive(Clone, Copy, PartialEq)]
pub struct ProfileChoice {
    pub leaving: Signal<bool>,
    pub choose: Callback<Persona>,
}

pub fn use_profile_choice() -> ProfileChoice {
    let mut profile = use_context::<ProfileState>();
    let mut leaving = use_signal(|| false);
    let choose = use_callback(move |persona: Persona| {
        profile.select(persona);
        leaving.set(true);
        spawn(async move {
            tokio::time::sleep(PROMPT_EXIT).await;
            leaving.set(false);
        });
    });
    ProfileChoice { leaving, choose }
}

/// Switch to the other persona.
pub fn use_profile_swap() -> Callback<()> {
    let mut profile = use_context::<ProfileState>();
    use_callback(move |()| profile.swap())
}

/// Forget the stored persona so the prompt returns.
pub fn use_profile_forget() -> Callback<()> {
    let mut profile = use_context::<ProfileState>();
    use_callback(move |()| profile.clear())
}

/// Blocking persona choice shown until a profile exists.
#[component]
pub fn ProfilePrompt(leaving: bool, on_select: EventHandler<Persona>) -> Element {
    let class = if leaving {
        "profile-prompt is-leaving"
    } else {
        "profile-prompt"
    };

    rsx! {
        div {
            class,
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "profile-prompt-title",
            div { class: "profile-prompt__card",
                h2 { id: "profile-prompt-title", "Who is using Campus?" }
                p { "Pick the experience that fits you. You can switch later from the home page." }
                div { class: "profile-prompt__choices",
                    for persona in CHOICES {
                        button {
                            key: "{persona}",
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: leaving,
                            onclick: move |_| on_select.call(persona),
                            "{persona.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Swaps the active persona. Only mounted on the root route.
#[component]
pub fn ProfileSwitcher() -> Element {
    let profile = use_context::<ProfileState>();
    let swap = use_profile_swap();
    let forget = use_profile_forget();
    let Some(current) = profile.current().persona() else {
        return rsx! {};
    };
    let target = current.other();

    rsx! {
        div { class: "profile-switcher",
            span { class: "muted", "Viewing as {current.label()}" }
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| swap.call(()),
                "Switch to {target.label()}"
            }
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| forget.call(()),
                "Forget my choice"
            }
        }
    }
}
