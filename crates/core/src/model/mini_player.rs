/// Exit requested from the floating mini-player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiniPlayerExit {
    /// Hand control back to the full player.
    Expand,
    /// Hide the mini-player. Whether playback stops is the caller's call.
    Close,
}

/// Visibility of the floating mini-player. Only user actions change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MiniPlayer {
    visible: bool,
}

impl MiniPlayer {
    #[must_use]
    pub const fn hidden() -> Self {
        Self { visible: false }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn expand(&mut self) -> MiniPlayerExit {
        self.visible = false;
        MiniPlayerExit::Expand
    }

    pub fn close(&mut self) -> MiniPlayerExit {
        self.visible = false;
        MiniPlayerExit::Close
    }
}
