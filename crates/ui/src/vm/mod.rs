mod admin_vm;
mod countdown_vm;
mod course_vm;
mod download_vm;
mod forum_vm;
mod listing_vm;
mod markdown_vm;
mod time_fmt;

pub use admin_vm::{
    AccessLogRowVm, SerialKeyRowVm, map_access_log_rows, map_serial_key_rows,
    parse_status_filter, status_filter_value,
};
pub use countdown_vm::{CountdownVm, RING_CIRCUMFERENCE};
pub use course_vm::{CourseCardVm, LessonRowVm, map_course_cards, map_lesson_rows};
pub use download_vm::{DownloadCardVm, map_download_cards};
pub use forum_vm::{ForumTopicVm, map_forum_topics};
pub use listing_vm::PagerVm;
pub use markdown_vm::markdown_to_html;
pub use time_fmt::format_minutes;
