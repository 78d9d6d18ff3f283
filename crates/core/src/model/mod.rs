mod admin;
mod countdown;
mod course;
mod download;
mod forum;
mod ids;
pub mod listing;
mod mini_player;
mod profile;

pub use ids::{CourseId, LessonId, ParseIdError, TopicId};

pub use admin::{AccessLog, SerialKey, SerialKeyStatus};
pub use countdown::{
    CancelTrigger, Countdown, CountdownExit, CountdownPhase, CountdownSnapshot,
    DEFAULT_AUTO_ADVANCE_SECS,
};
pub use course::{Course, Lesson};
pub use download::{DownloadAvailability, DownloadLink, DownloadLinkError, Platform};
pub use forum::ForumTopic;
pub use listing::{DEFAULT_PAGE_SIZE, ListQuery, Page, Searchable};
pub use mini_player::{MiniPlayer, MiniPlayerExit};
pub use profile::{
    LandingView, PROFILE_STORAGE_KEY, Persona, ProfileSelection, landing_view,
};
