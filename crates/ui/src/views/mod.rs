mod admin;
mod components;
mod course;
mod courses;
mod downloads;
mod forum;
mod home;
mod lesson;
mod profile;
mod state;

pub use admin::AdminView;
pub use course::CourseView;
pub use courses::CoursesView;
pub use downloads::DownloadsView;
pub use forum::ForumView;
pub use home::HomeView;
pub use lesson::{CountdownOverlay, FloatingPlayer, LessonView};
pub use profile::{ProfilePrompt, ProfileSwitcher};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
