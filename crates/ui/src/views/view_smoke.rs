use std::sync::Arc;
use std::time::Duration;

use campus_core::model::{
    AccessLog, CancelTrigger, Course, CourseId, ForumTopic, PROFILE_STORAGE_KEY, Persona,
    ProfileSelection, SerialKey,
};
use services::{CatalogApi, CatalogApiError};
use storage::repository::{PreferenceRepository, Storage};

use super::profile::PROMPT_EXIT;
use super::test_harness::{
    RELEASED_ANDROID_URL, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_api,
};

const STUDENT: ProfileSelection = ProfileSelection::Selected(Persona::Student);
const PATIENT: ProfileSelection = ProfileSelection::Selected(Persona::Patient);

async fn stored_profile(harness: &ViewHarness) -> Option<String> {
    harness
        .storage
        .preferences
        .get_preference(PROFILE_STORAGE_KEY)
        .await
        .expect("read preference")
        .map(|record| record.value)
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_prompts_when_no_profile_is_stored() {
    let mut harness = setup_view_harness(ViewKind::Home, ProfileSelection::Unset);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Who is using Campus?"), "missing prompt in {html}");
    assert!(html.contains("Student / Professional"), "missing choice in {html}");
    assert!(html.contains("Patient"), "missing choice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_course_platform_for_students() {
    let mut harness = setup_view_harness(ViewKind::Home, STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Who is using Campus?"), "unexpected prompt in {html}");
    assert!(html.contains("Continue learning"), "missing heading in {html}");
    assert!(
        html.contains("Foundations of Clinical Nutrition"),
        "missing course in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_patient_portal_for_patients() {
    let mut harness = setup_view_harness(ViewKind::Home, PATIENT);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Patient area"), "missing portal in {html}");
    assert!(!html.contains("Continue learning"), "unexpected course list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn switcher_offers_the_other_persona() {
    let mut harness = setup_view_harness(ViewKind::Switcher, STUDENT);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Switch to Patient"), "missing switch in {html}");
    assert!(html.contains("Forget my choice"), "missing reset in {html}");

    let mut unset = setup_view_harness(ViewKind::Switcher, ProfileSelection::Unset);
    unset.rebuild();
    let html = unset.render();
    assert!(!html.contains("Switch to"), "switcher shown while unset: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn choosing_a_persona_fades_the_prompt_and_persists_it() {
    let mut harness = setup_view_harness(ViewKind::ProfileFlow, ProfileSelection::Unset);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Who is using Campus?"), "missing prompt in {html}");

    harness.profile.choose(Persona::Student);
    harness.drive();
    let html = harness.render();
    assert!(
        html.contains("profile-prompt is-leaving"),
        "prompt not leaving in {html}"
    );
    assert!(html.contains("Continue learning"), "missing landing in {html}");

    harness.drive_async().await;
    assert_eq!(stored_profile(&harness).await.as_deref(), Some("student"));

    tokio::task::yield_now().await;
    tokio::time::advance(PROMPT_EXIT).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Who is using Campus?"), "prompt still shown: {html}");
    assert!(html.contains("Continue learning"), "missing landing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn switching_and_forgetting_update_landing_and_storage() {
    let mut harness = setup_view_harness(ViewKind::ProfileFlow, STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Continue learning"));

    harness.profile.swap();
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Patient area"), "swap did not re-render: {html}");
    assert!(!html.contains("Who is using Campus?"), "unexpected prompt in {html}");
    harness.drive_async().await;
    assert_eq!(stored_profile(&harness).await.as_deref(), Some("patient"));

    harness.profile.forget();
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Who is using Campus?"), "prompt not restored: {html}");
    assert!(
        !html.contains("is-leaving"),
        "restored prompt should not be leaving: {html}"
    );
    harness.drive_async().await;
    assert_eq!(stored_profile(&harness).await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn rapid_persona_changes_store_the_last_choice() {
    let mut harness = setup_view_harness(ViewKind::ProfileFlow, ProfileSelection::Unset);
    harness.rebuild();

    harness.profile.choose(Persona::Student);
    harness.profile.swap();
    harness.drive();
    harness.drive_async().await;
    harness.drive_async().await;

    assert!(harness.render().contains("Patient area"));
    assert_eq!(stored_profile(&harness).await.as_deref(), Some("patient"));
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_lists_and_pages_the_catalog() {
    let mut harness = setup_view_harness(ViewKind::Courses, STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Sleep Hygiene for Patients"), "missing course in {html}");
    assert!(html.contains("Page 1 of 1"), "missing pager in {html}");
    assert!(html.contains("3 results"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_renders_summary_and_lessons() {
    let mut harness = setup_view_harness(ViewKind::Course(1), STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Energy balance"), "missing lesson in {html}");
    assert!(html.contains("Dietary assessment tools"), "missing lesson in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_reports_unknown_courses() {
    let mut harness = setup_view_harness(ViewKind::Course(99), STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("We could not find that page."), "missing error in {html}");
    assert!(!html.contains("Retry"), "not-found should not offer retry: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_player_controls() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1, 102), STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Energy balance"), "missing title in {html}");
    assert!(html.contains("Pop out"), "missing mini player control in {html}");
    assert!(html.contains("Finish lesson"), "missing finish control in {html}");
    assert!(!html.contains("mini-player"), "mini player visible on load: {html}");
    assert!(!html.contains("Up next"), "countdown visible on load: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn forum_view_lists_newest_topics_first() {
    let mut harness = setup_view_harness(ViewKind::Forum, STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    let newest = html
        .find("Certificate request timeline")
        .expect("newest topic rendered");
    let older = html
        .find("Tips for the dietary assessment assignment")
        .expect("older topic rendered");
    assert!(newest < older, "topics out of order in {html}");
    assert!(html.contains("7 replies"), "missing reply count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_renders_overview_keys_and_logs() {
    let mut harness = setup_view_harness(ViewKind::Admin, STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Accesses (7d)"), "missing overview in {html}");
    assert!(html.contains("NUTRI-7Q3B-0XZP"), "missing serial key in {html}");
    assert!(html.contains("marina@example.org"), "missing access log in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn downloads_view_gates_links_on_explicit_release() {
    let mut harness = setup_view_harness(ViewKind::Downloads, STUDENT);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(RELEASED_ANDROID_URL), "missing android link in {html}");
    assert!(
        !html.contains("https://example.org/campus.ipa"),
        "ios link offered without release flag: {html}"
    );
    assert_eq!(html.matches("Coming soon").count(), 3, "unexpected badges in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_overlay_counts_down_then_navigates_once() {
    let mut harness = setup_view_harness(ViewKind::Countdown(5), STUDENT);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Up next"), "missing overlay in {html}");
    assert!(html.contains("Next lesson in 5 seconds"), "missing countdown in {html}");

    harness.advance_secs(2).await;
    let html = harness.render();
    assert!(html.contains("Next lesson in 3 seconds"), "countdown stalled: {html}");
    assert_eq!(harness.probe.navigated(), 0);

    harness.advance_secs(3).await;
    assert_eq!(harness.probe.navigated(), 1);
    assert_eq!(harness.probe.cancelled(), 0);

    harness.advance_secs(3).await;
    assert_eq!(harness.probe.navigated(), 1, "navigate fired twice");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_overlay_with_zero_duration_navigates_immediately() {
    let mut harness = setup_view_harness(ViewKind::Countdown(0), STUDENT);
    harness.rebuild();
    harness.drive_async().await;
    assert_eq!(harness.probe.navigated(), 1);
    assert_eq!(harness.probe.cancelled(), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn cancelling_midway_freezes_the_countdown() {
    let mut harness = setup_view_harness(ViewKind::ControlledCountdown(5), STUDENT);
    harness.rebuild();
    harness.advance_secs(2).await;
    let html = harness.render();
    assert!(html.contains("Next lesson in 3 seconds"), "countdown stalled: {html}");

    assert!(harness.countdown.cancel(CancelTrigger::CancelButton));
    harness.drive_async().await;
    assert_eq!(harness.probe.cancelled(), 1);

    assert!(!harness.countdown.cancel(CancelTrigger::OverlayClick));
    assert!(!harness.countdown.watch_now());
    harness.advance_secs(5).await;
    assert_eq!(harness.probe.navigated(), 0, "navigated after cancel");
    assert_eq!(harness.probe.cancelled(), 1, "cancel fired twice");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn watch_now_navigates_before_the_countdown_ends() {
    let mut harness = setup_view_harness(ViewKind::ControlledCountdown(5), STUDENT);
    harness.rebuild();
    harness.advance_secs(1).await;

    assert!(harness.countdown.watch_now());
    harness.drive_async().await;
    assert_eq!(harness.probe.navigated(), 1);

    assert!(!harness.countdown.cancel(CancelTrigger::EscapeKey));
    harness.advance_secs(5).await;
    assert_eq!(harness.probe.navigated(), 1, "navigate fired twice");
    assert_eq!(harness.probe.cancelled(), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unmounting_the_overlay_stops_the_countdown() {
    let mut harness = setup_view_harness(ViewKind::Countdown(2), STUDENT);
    harness.rebuild();
    let probe = harness.probe.clone();
    drop(harness);

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(probe.navigated(), 0);
    assert_eq!(probe.cancelled(), 0);
}

struct FailingCatalogApi;

#[async_trait::async_trait]
impl CatalogApi for FailingCatalogApi {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogApiError> {
        Err(CatalogApiError::InvalidBaseUrl("offline".to_string()))
    }

    async fn get_course(&self, _id: CourseId) -> Result<Course, CatalogApiError> {
        Err(CatalogApiError::InvalidBaseUrl("offline".to_string()))
    }

    async fn list_forum_topics(&self) -> Result<Vec<ForumTopic>, CatalogApiError> {
        Err(CatalogApiError::InvalidBaseUrl("offline".to_string()))
    }

    async fn list_serial_keys(&self) -> Result<Vec<SerialKey>, CatalogApiError> {
        Err(CatalogApiError::InvalidBaseUrl("offline".to_string()))
    }

    async fn list_access_logs(&self) -> Result<Vec<AccessLog>, CatalogApiError> {
        Err(CatalogApiError::InvalidBaseUrl("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_renders_error_state() {
    let mut harness = setup_view_harness_with_api(
        ViewKind::Courses,
        STUDENT,
        Storage::in_memory(),
        Arc::new(FailingCatalogApi),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unavailable_storage_still_renders_the_prompt() {
    let mut harness = setup_view_harness_with_api(
        ViewKind::Home,
        ProfileSelection::Unset,
        Storage::unavailable(),
        Arc::new(FailingCatalogApi),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Who is using Campus?"), "missing prompt in {html}");
}
