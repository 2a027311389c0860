use crate::{FrameSlot, RotationState, compute_frame};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Owns the auto-advance timer for a photo rotation.
///
/// The timer task is restarted whenever the item count changes and is
/// cancelled deterministically on [`shutdown`] or drop; a cancelled ticker
/// can never mutate state again. Manual navigation does not reset the
/// timer phase.
///
/// [`shutdown`]: Rotator::shutdown
pub struct Rotator {
    state: Arc<Mutex<RotationState>>,
    updates: watch::Sender<RotationState>,
    period: Duration,
    shutdown: CancellationToken,
    ticker: Mutex<CancellationToken>,
}

impl Rotator {
    /// Creates the rotator and starts its auto-advance timer.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn new(len: usize, period: Duration) -> Self {
        let initial = RotationState::new(len);
        let (updates, _) = watch::channel(initial);
        let rotator = Self {
            state: Arc::new(Mutex::new(initial)),
            updates,
            period,
            shutdown: CancellationToken::new(),
            ticker: Mutex::new(CancellationToken::new()),
        };
        rotator.spawn_ticker();
        rotator
    }

    /// Replaces the item count after a reload: the index resets and the
    /// timer restarts from a fresh phase.
    pub fn set_len(&self, len: usize) {
        let snapshot = {
            let mut state = self.lock_state();
            *state = RotationState::new(len);
            *state
        };
        let _ = self.updates.send(snapshot);
        debug!(len, "rotation list replaced, restarting ticker");
        self.spawn_ticker();
    }

    /// Manual forward navigation; the timer phase is untouched.
    pub fn next(&self) {
        self.mutate(RotationState::advance);
    }

    /// Manual backward navigation; the timer phase is untouched.
    pub fn previous(&self) {
        self.mutate(RotationState::retreat);
    }

    /// Re-centers on the item rendered at window offset `slot`.
    pub fn focus_slot(&self, slot: usize) {
        self.mutate(|state| state.focus_slot(slot));
    }

    #[must_use]
    pub fn current(&self) -> RotationState {
        *self.lock_state()
    }

    /// The rendered frame for a window of up to `k` slots.
    #[must_use]
    pub fn frame(&self, k: usize) -> Vec<FrameSlot> {
        compute_frame(&self.current(), k)
    }

    /// Watch stream of state snapshots, published on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RotationState> {
        self.updates.subscribe()
    }

    /// Cancels the timer permanently. Idempotent; also runs on drop.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn mutate(&self, f: impl FnOnce(&mut RotationState)) {
        let snapshot = {
            let mut state = self.lock_state();
            f(&mut state);
            *state
        };
        let _ = self.updates.send(snapshot);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RotationState> {
        self.state.lock().expect("rotation state lock poisoned")
    }

    fn spawn_ticker(&self) {
        let token = {
            let mut guard = self.ticker.lock().expect("ticker lock poisoned");
            guard.cancel();
            let fresh = self.shutdown.child_token();
            *guard = fresh.clone();
            fresh
        };

        let state = Arc::clone(&self.state);
        let updates = self.updates.clone();
        let period = self.period;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // the first advance happens one full period after start.
            ticker.tick().await;
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let snapshot = {
                            let mut state = state.lock().expect("rotation state lock poisoned");
                            if state.len() > 1 {
                                state.advance();
                            }
                            *state
                        };
                        let _ = updates.send(snapshot);
                    }
                }
            }
        });
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn auto_advances_once_per_period() {
        let rotator = Rotator::new(5, Duration::from_millis(5000));
        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(rotator.current().current_index(), 1);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(rotator.current().current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn single_item_never_advances() {
        let rotator = Rotator::new(1, Duration::from_millis(5000));
        tokio::time::sleep(Duration::from_millis(20_000)).await;
        assert_eq!(rotator.current().current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_keeps_timer_phase() {
        let rotator = Rotator::new(5, Duration::from_millis(5000));
        tokio::time::sleep(Duration::from_millis(2500)).await;
        rotator.next();
        assert_eq!(rotator.current().current_index(), 1);
        // The pending tick still fires at t=5000, not t=7500.
        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(rotator.current().current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn set_len_resets_index_and_restarts_timer() {
        let rotator = Rotator::new(5, Duration::from_millis(5000));
        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(rotator.current().current_index(), 1);

        rotator.set_len(3);
        assert_eq!(rotator.current().current_index(), 0);
        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(rotator.current().current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_after_teardown() {
        let rotator = Rotator::new(5, Duration::from_millis(5000));
        let receiver = rotator.subscribe();
        drop(rotator);
        tokio::time::sleep(Duration::from_millis(30_000)).await;
        assert_eq!(receiver.borrow().current_index(), 0);
    }
}
