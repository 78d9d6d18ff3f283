mod countdown;
mod floating_player;
mod scripts;
mod view;

pub use countdown::CountdownOverlay;
#[cfg(test)]
pub(crate) use countdown::{CountdownControls, CountdownPanel, use_countdown};
pub use floating_player::FloatingPlayer;
pub use view::LessonView;
