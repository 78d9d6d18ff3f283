//! Drives a [`Countdown`] on a one-second cadence.
//!
//! The timer task is owned by [`AutoAdvanceTimer`] and is released on every
//! exit path: completion, cancellation, "watch now", explicit shutdown and
//! drop. Hooks are taken out of the shared state before they run, so at most
//! one of them fires per timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use campus_core::model::{CancelTrigger, Countdown, CountdownExit, CountdownSnapshot};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

type Hook = Box<dyn FnOnce() + Send + 'static>;

/// Caller-supplied side effects for the two terminal outcomes.
pub struct AutoAdvanceHooks {
    on_navigate: Hook,
    on_cancel: Hook,
}

impl AutoAdvanceHooks {
    pub fn new(
        on_navigate: impl FnOnce() + Send + 'static,
        on_cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            on_navigate: Box::new(on_navigate),
            on_cancel: Box::new(on_cancel),
        }
    }

    fn fire(self, exit: CountdownExit) {
        match exit {
            CountdownExit::Navigate => (self.on_navigate)(),
            CountdownExit::Cancel(_) => (self.on_cancel)(),
        }
    }
}

struct State {
    countdown: Countdown,
    hooks: Option<AutoAdvanceHooks>,
}

struct Shared {
    state: Mutex<State>,
    snapshots: watch::Sender<CountdownSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one transition and run the matching hook outside the lock.
    fn transition(
        &self,
        step: impl FnOnce(&mut Countdown) -> Option<CountdownExit>,
    ) -> Option<CountdownExit> {
        let (exit, hooks, snapshot) = {
            let mut state = self.lock();
            let exit = step(&mut state.countdown);
            let hooks = exit.and_then(|_| state.hooks.take());
            (exit, hooks, state.countdown.snapshot())
        };

        self.snapshots.send_replace(snapshot);

        if let Some(exit) = exit {
            debug!(?exit, ticks = snapshot.ticks_elapsed, "auto-advance settled");
            if let Some(hooks) = hooks {
                hooks.fire(exit);
            }
        }
        exit
    }

    fn is_terminal(&self) -> bool {
        self.lock().countdown.is_terminal()
    }
}

pub struct AutoAdvanceTimer {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvanceTimer {
    /// Start counting down from `duration_secs`.
    ///
    /// A non-positive duration fires `on_navigate` before this returns and
    /// never spawns a task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(duration_secs: i64, hooks: AutoAdvanceHooks) -> Self {
        let (countdown, immediate) = Countdown::start(duration_secs);
        let (snapshots, _) = watch::channel(countdown.snapshot());
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                countdown,
                hooks: Some(hooks),
            }),
            snapshots,
        });

        if let Some(exit) = immediate {
            debug!(duration_secs, "auto-advance skipped countdown");
            let hooks = shared.lock().hooks.take();
            if let Some(hooks) = hooks {
                hooks.fire(exit);
            }
            return Self { shared, task: None };
        }

        debug!(duration_secs, "auto-advance started");
        let task = tokio::spawn(run_ticks(Arc::clone(&shared)));
        Self {
            shared,
            task: Some(task),
        }
    }

    /// Dismiss the countdown. Returns true if this call fired `on_cancel`.
    pub fn cancel(&mut self, trigger: CancelTrigger) -> bool {
        let exit = self.shared.transition(|countdown| countdown.cancel(trigger));
        self.release_task();
        exit.is_some()
    }

    /// Navigate immediately. Returns true if this call fired `on_navigate`.
    pub fn watch_now(&mut self) -> bool {
        let exit = self.shared.transition(Countdown::watch_now);
        self.release_task();
        exit.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> CountdownSnapshot {
        self.shared.lock().countdown.snapshot()
    }

    /// Receive a snapshot after every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CountdownSnapshot> {
        self.shared.snapshots.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Tear down without firing either hook.
    pub fn shutdown(&mut self) {
        let dropped_hooks = self.shared.lock().hooks.take().is_some();
        if dropped_hooks {
            debug!("auto-advance torn down before settling");
        }
        self.release_task();
    }

    fn release_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_ticks(shared: Arc<Shared>) {
    loop {
        tokio::time::sleep(TICK_INTERVAL).await;
        shared.transition(Countdown::tick);
        if shared.is_terminal() {
            break;
        }
    }
}
