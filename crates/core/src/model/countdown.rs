//! Auto-advance countdown shown between lessons.
//!
//! `Countdown` is a pure state machine: callers feed it ticks and user
//! triggers, and it answers with at most one [`CountdownExit`] over its whole
//! lifetime. Driving it on a real clock is the job of the services layer.

/// Countdown length used when the caller does not configure one.
pub const DEFAULT_AUTO_ADVANCE_SECS: i64 = 5;

/// User actions that dismiss the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelTrigger {
    EscapeKey,
    OverlayClick,
    CancelButton,
}

/// Terminal side effect requested by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownExit {
    Navigate,
    Cancel(CancelTrigger),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownPhase {
    Counting,
    Navigated,
    Cancelled,
}

impl CountdownPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Counting)
    }
}

/// Read-only view of a countdown for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownSnapshot {
    pub phase: CountdownPhase,
    pub remaining_secs: u32,
    /// Percentage of the ring filled, in `[0, 100]`.
    pub progress_percent: f64,
    pub ticks_elapsed: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    progress_percent: f64,
    ticks_elapsed: u32,
    phase: CountdownPhase,
}

impl Countdown {
    /// Start a countdown of `duration_secs`.
    ///
    /// A non-positive duration navigates immediately: the returned exit is
    /// `Some(CountdownExit::Navigate)` and the countdown is already terminal.
    #[must_use]
    pub fn start(duration_secs: i64) -> (Self, Option<CountdownExit>) {
        if duration_secs <= 0 {
            let countdown = Self {
                duration_secs: 0,
                remaining_secs: 0,
                progress_percent: 0.0,
                ticks_elapsed: 0,
                phase: CountdownPhase::Navigated,
            };
            return (countdown, Some(CountdownExit::Navigate));
        }

        let duration_secs = u32::try_from(duration_secs).unwrap_or(u32::MAX);
        let countdown = Self {
            duration_secs,
            remaining_secs: duration_secs,
            progress_percent: 0.0,
            ticks_elapsed: 0,
            phase: CountdownPhase::Counting,
        };
        (countdown, None)
    }

    /// Advance by one second.
    ///
    /// Returns `Some(CountdownExit::Navigate)` on the tick that reaches zero.
    /// Ticks after a terminal transition are ignored.
    pub fn tick(&mut self) -> Option<CountdownExit> {
        if self.phase != CountdownPhase::Counting {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.ticks_elapsed += 1;

        if self.remaining_secs == 0 {
            self.progress_percent = 100.0;
            self.phase = CountdownPhase::Navigated;
            return Some(CountdownExit::Navigate);
        }

        // duration_secs > 0 whenever the phase is Counting.
        let step = 100.0 / f64::from(self.duration_secs);
        self.progress_percent = (f64::from(self.ticks_elapsed) * step).min(100.0);
        None
    }

    /// Dismiss the countdown. Only the first terminal transition yields an exit.
    pub fn cancel(&mut self, trigger: CancelTrigger) -> Option<CountdownExit> {
        if self.phase != CountdownPhase::Counting {
            return None;
        }
        self.phase = CountdownPhase::Cancelled;
        Some(CountdownExit::Cancel(trigger))
    }

    /// Skip the remaining seconds and navigate now.
    pub fn watch_now(&mut self) -> Option<CountdownExit> {
        if self.phase != CountdownPhase::Counting {
            return None;
        }
        self.phase = CountdownPhase::Navigated;
        Some(CountdownExit::Navigate)
    }

    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            progress_percent: self.progress_percent,
            ticks_elapsed: self.ticks_elapsed,
        }
    }
}
