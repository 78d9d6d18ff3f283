use std::cell::RefCell;
use std::rc::Rc;

use campus_core::model::CancelTrigger;
use dioxus::document::eval;
use dioxus::prelude::*;
use services::{AutoAdvanceHooks, AutoAdvanceTimer};
use tokio::sync::mpsc;
use tracing::debug;

use super::scripts::{ESCAPE_MESSAGE, OVERLAY_ROOT_ID, escape_listener_script};
use crate::vm::{CountdownVm, RING_CIRCUMFERENCE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Settled {
    Navigate,
    Cancel,
}

type SharedTimer = Rc<RefCell<AutoAdvanceTimer>>;

/// Handle on a running auto-advance countdown.
#[derive(Clone, Copy, PartialEq)]
pub struct CountdownControls {
    pub vm: Signal<CountdownVm>,
    pub cancel: Callback<CancelTrigger, bool>,
    pub watch_now: Callback<(), bool>,
}

/// Start a countdown owned by the calling component.
///
/// Unmounting the component stops the countdown without firing either
/// callback. `on_navigate` and `on_cancel` are mutually exclusive and fire
/// at most once.
pub fn use_countdown(
    duration_secs: i64,
    on_navigate: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> CountdownControls {
    let timer: SharedTimer = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel();
        let navigate_tx = tx.clone();
        let hooks = AutoAdvanceHooks::new(
            move || {
                let _ = navigate_tx.send(Settled::Navigate);
            },
            move || {
                let _ = tx.send(Settled::Cancel);
            },
        );
        // Started before the forwarder so a zero-length countdown is still delivered.
        let timer = AutoAdvanceTimer::start(duration_secs, hooks);
        spawn(forward_settled(rx, on_navigate, on_cancel));
        Rc::new(RefCell::new(timer))
    });

    let vm = use_signal(|| CountdownVm::from(timer.borrow().snapshot()));
    use_hook(|| {
        let mut snapshots = timer.borrow().subscribe();
        let mut vm = vm;
        spawn(async move {
            while snapshots.changed().await.is_ok() {
                let snapshot = *snapshots.borrow_and_update();
                vm.set(CountdownVm::from(snapshot));
            }
        });
    });

    let cancel = use_callback({
        let timer = Rc::clone(&timer);
        move |trigger: CancelTrigger| {
            let cancelled = timer.borrow_mut().cancel(trigger);
            if cancelled {
                debug!(?trigger, "auto-advance cancelled");
            }
            cancelled
        }
    });
    let watch_now = use_callback({
        let timer = Rc::clone(&timer);
        move |()| timer.borrow_mut().watch_now()
    });

    use_effect(move || {
        spawn(async move {
            let mut listener = eval(&escape_listener_script(OVERLAY_ROOT_ID));
            while let Ok(message) = listener.recv::<String>().await {
                if message == ESCAPE_MESSAGE {
                    cancel.call(CancelTrigger::EscapeKey);
                }
            }
        });
    });

    use_drop({
        let timer = Rc::clone(&timer);
        move || timer.borrow_mut().shutdown()
    });

    CountdownControls {
        vm,
        cancel,
        watch_now,
    }
}

/// Full-screen prompt counting down to the next lesson.
#[component]
pub fn CountdownOverlay(
    next_title: String,
    duration_secs: i64,
    on_navigate: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let controls = use_countdown(duration_secs, on_navigate, on_cancel);
    rsx! { CountdownPanel { next_title, controls } }
}

#[component]
pub(crate) fn CountdownPanel(next_title: String, controls: CountdownControls) -> Element {
    let cancel_with = move |trigger: CancelTrigger| {
        move |evt: MouseEvent| {
            evt.stop_propagation();
            controls.cancel.call(trigger);
        }
    };
    let on_escape = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            evt.prevent_default();
            controls.cancel.call(CancelTrigger::EscapeKey);
        }
    };
    let on_watch_now = move |evt: MouseEvent| {
        evt.stop_propagation();
        controls.watch_now.call(());
    };

    let current = (controls.vm)();
    let circumference = format!("{RING_CIRCUMFERENCE:.2}");

    rsx! {
        div {
            id: OVERLAY_ROOT_ID,
            class: "countdown-overlay",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "countdown-title",
            tabindex: "-1",
            onclick: cancel_with(CancelTrigger::OverlayClick),
            onkeydown: on_escape,
            div {
                class: "countdown-card",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                p { class: "countdown-eyebrow", "Up next" }
                h2 { id: "countdown-title", "{next_title}" }
                svg {
                    class: "countdown-ring",
                    width: "64",
                    height: "64",
                    view_box: "0 0 64 64",
                    circle {
                        class: "countdown-ring__track",
                        cx: "32",
                        cy: "32",
                        r: "28",
                    }
                    circle {
                        class: "countdown-ring__progress",
                        cx: "32",
                        cy: "32",
                        r: "28",
                        stroke_dasharray: "{circumference}",
                        stroke_dashoffset: "{current.ring_offset}",
                    }
                    text {
                        x: "32",
                        y: "38",
                        text_anchor: "middle",
                        "{current.remaining_secs}"
                    }
                }
                p { class: "countdown-label", aria_live: "polite", "{current.remaining_label}" }
                div { class: "countdown-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: on_watch_now,
                        "Watch now"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: cancel_with(CancelTrigger::CancelButton),
                        "Cancel"
                    }
                }
            }
        }
    }
}

async fn forward_settled(
    mut rx: mpsc::UnboundedReceiver<Settled>,
    on_navigate: EventHandler<()>,
    on_cancel: EventHandler<()>,
) {
    if let Some(settled) = rx.recv().await {
        match settled {
            Settled::Navigate => on_navigate.call(()),
            Settled::Cancel => on_cancel.call(()),
        }
    }
}
