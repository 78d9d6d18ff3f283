use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use campus_core::model::{CancelTrigger, Persona, ProfileSelection};
use campus_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    CatalogApi, CatalogService, Clock, DownloadCatalog, ProfileService, StaticCatalogApi,
};
use storage::repository::Storage;

use super::home::HomeLanding;
use super::lesson::{CountdownControls, CountdownPanel, use_countdown};
use super::profile::{use_profile_choice, use_profile_forget, use_profile_swap};
use crate::context::{UiApp, build_app_context, use_profile_state_provider};
use crate::views::{
    AdminView, CountdownOverlay, CourseView, CoursesView, DownloadsView, ForumView, HomeView,
    LessonView, ProfileSwitcher,
};

pub const RELEASED_ANDROID_URL: &str = "https://example.org/campus.apk";

#[derive(Clone)]
struct TestApp {
    initial_profile: ProfileSelection,
    auto_advance_secs: i64,
    profile_service: Arc<ProfileService>,
    catalog: Arc<CatalogService>,
    downloads: Arc<DownloadCatalog>,
}

impl UiApp for TestApp {
    fn initial_profile(&self) -> ProfileSelection {
        self.initial_profile
    }

    fn auto_advance_secs(&self) -> i64 {
        self.auto_advance_secs
    }

    fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile_service)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn downloads(&self) -> Arc<DownloadCatalog> {
        Arc::clone(&self.downloads)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Switcher,
    Courses,
    Course(u64),
    Lesson(u64, u64),
    Forum,
    Admin,
    Downloads,
    Countdown(i64),
    /// Home landing driven through `ProfileHandles`.
    ProfileFlow,
    /// Countdown panel driven through `CountdownHandles`.
    ControlledCountdown(i64),
}

/// Counts the callbacks fired by a harnessed countdown overlay.
#[derive(Clone, Default)]
pub struct CountdownProbe {
    pub navigated: Arc<AtomicUsize>,
    pub cancelled: Arc<AtomicUsize>,
}

impl CountdownProbe {
    pub fn navigated(&self) -> usize {
        self.navigated.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Persona actions captured from a mounted `ViewKind::ProfileFlow`.
#[derive(Clone, Default)]
pub struct ProfileHandles {
    choose: Rc<RefCell<Option<Callback<Persona>>>>,
    swap: Rc<RefCell<Option<Callback<()>>>>,
    forget: Rc<RefCell<Option<Callback<()>>>>,
}

impl ProfileHandles {
    pub fn choose(&self, persona: Persona) {
        let choose = (*self.choose.borrow()).expect("choose registered");
        choose.call(persona);
    }

    pub fn swap(&self) {
        let swap = (*self.swap.borrow()).expect("swap registered");
        swap.call(());
    }

    pub fn forget(&self) {
        let forget = (*self.forget.borrow()).expect("forget registered");
        forget.call(());
    }
}

/// Countdown controls captured from a mounted `ViewKind::ControlledCountdown`.
#[derive(Clone, Default)]
pub struct CountdownHandles {
    controls: Rc<RefCell<Option<CountdownControls>>>,
}

impl CountdownHandles {
    pub fn cancel(&self, trigger: CancelTrigger) -> bool {
        let controls = (*self.controls.borrow()).expect("countdown registered");
        controls.cancel.call(trigger)
    }

    pub fn watch_now(&self) -> bool {
        let controls = (*self.controls.borrow()).expect("countdown registered");
        controls.watch_now.call(())
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    probe: CountdownProbe,
    profile: ProfileHandles,
    countdown: CountdownHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_profile_state_provider(&ctx);
    use_context_provider(|| props.view);
    use_context_provider(|| props.probe.clone());
    use_context_provider(|| props.profile.clone());
    use_context_provider(|| props.countdown.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let probe = use_context::<CountdownProbe>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Switcher => rsx! { ProfileSwitcher {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
        ViewKind::Lesson(course_id, lesson_id) => rsx! { LessonView { course_id, lesson_id } },
        ViewKind::Forum => rsx! { ForumView {} },
        ViewKind::Admin => rsx! { AdminView {} },
        ViewKind::Downloads => rsx! { DownloadsView {} },
        ViewKind::Countdown(duration_secs) => {
            let navigated = Arc::clone(&probe.navigated);
            let cancelled = Arc::clone(&probe.cancelled);
            rsx! {
                CountdownOverlay {
                    next_title: "Energy balance",
                    duration_secs,
                    on_navigate: move |_| {
                        navigated.fetch_add(1, Ordering::SeqCst);
                    },
                    on_cancel: move |_| {
                        cancelled.fetch_add(1, Ordering::SeqCst);
                    },
                }
            }
        }
        ViewKind::ProfileFlow => rsx! { ProfileFlow {} },
        ViewKind::ControlledCountdown(duration_secs) => rsx! {
            ControlledCountdown { duration_secs }
        },
    }
}

#[component]
fn ProfileFlow() -> Element {
    let handles = use_context::<ProfileHandles>();
    let choice = use_profile_choice();
    let swap = use_profile_swap();
    let forget = use_profile_forget();
    use_hook(|| {
        *handles.choose.borrow_mut() = Some(choice.choose);
        *handles.swap.borrow_mut() = Some(swap);
        *handles.forget.borrow_mut() = Some(forget);
    });
    rsx! { HomeLanding { choice } }
}

#[component]
fn ControlledCountdown(duration_secs: i64) -> Element {
    let handles = use_context::<CountdownHandles>();
    let probe = use_context::<CountdownProbe>();
    let controls = use_countdown(
        duration_secs,
        EventHandler::new({
            let navigated = Arc::clone(&probe.navigated);
            move |()| {
                navigated.fetch_add(1, Ordering::SeqCst);
            }
        }),
        EventHandler::new({
            let cancelled = Arc::clone(&probe.cancelled);
            move |()| {
                cancelled.fetch_add(1, Ordering::SeqCst);
            }
        }),
    );
    use_hook(|| {
        *handles.controls.borrow_mut() = Some(controls);
    });
    rsx! {
        CountdownPanel { next_title: "Energy balance", controls }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub probe: CountdownProbe,
    pub profile: ProfileHandles,
    pub countdown: CountdownHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Move virtual time forward one second at a time, rendering after each step.
    pub async fn advance_secs(&mut self, secs: u64) {
        for _ in 0..secs {
            // Let freshly spawned timer tasks register their sleep before time moves.
            tokio::task::yield_now().await;
            tokio::time::advance(Duration::from_secs(1)).await;
            self.drive_async().await;
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_downloads() -> DownloadCatalog {
    DownloadCatalog::from_lookup(|name| match name {
        "CAMPUS_DOWNLOAD_ANDROID_URL" => Some(RELEASED_ANDROID_URL.to_string()),
        "CAMPUS_DOWNLOAD_ANDROID_COMING_SOON" => Some("false".to_string()),
        // A URL without the explicit flag stays "coming soon".
        "CAMPUS_DOWNLOAD_IOS_URL" => Some("https://example.org/campus.ipa".to_string()),
        _ => None,
    })
}

pub fn setup_view_harness(view: ViewKind, initial_profile: ProfileSelection) -> ViewHarness {
    setup_view_harness_with_api(
        view,
        initial_profile,
        Storage::in_memory(),
        Arc::new(StaticCatalogApi::demo(fixed_now())),
    )
}

pub fn setup_view_harness_with_api(
    view: ViewKind,
    initial_profile: ProfileSelection,
    storage: Storage,
    api: Arc<dyn CatalogApi>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let app = Arc::new(TestApp {
        initial_profile,
        auto_advance_secs: 5,
        profile_service: Arc::new(ProfileService::new(
            clock,
            Arc::clone(&storage.preferences),
        )),
        catalog: Arc::new(CatalogService::new(clock, api)),
        downloads: Arc::new(test_downloads()),
    });
    let probe = CountdownProbe::default();
    let profile = ProfileHandles::default();
    let countdown = CountdownHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            probe: probe.clone(),
            profile: profile.clone(),
            countdown: countdown.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        probe,
        profile,
        countdown,
    }
}
