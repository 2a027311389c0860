use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Snapshot of the guestbook card: which message shows and whether it is
/// mid-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestbookState {
    pub current_index: usize,
    pub len: usize,
    /// False only during the fade-out gap between two messages.
    pub visible: bool,
}

impl GuestbookState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
            visible: true,
        }
    }
}

/// Single-slot twin of [`Rotator`](crate::Rotator): shows one message,
/// fades it out, advances, fades back in.
pub struct GuestbookRotator {
    state: Arc<Mutex<GuestbookState>>,
    updates: watch::Sender<GuestbookState>,
    display: Duration,
    fade: Duration,
    shutdown: CancellationToken,
    ticker: Mutex<CancellationToken>,
}

impl GuestbookRotator {
    /// Creates the rotator and starts its fade/advance loop.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn new(len: usize, display: Duration, fade: Duration) -> Self {
        let initial = GuestbookState::new(len);
        let (updates, _) = watch::channel(initial);
        let rotator = Self {
            state: Arc::new(Mutex::new(initial)),
            updates,
            display,
            fade,
            shutdown: CancellationToken::new(),
            ticker: Mutex::new(CancellationToken::new()),
        };
        rotator.spawn_ticker();
        rotator
    }

    /// Replaces the message count after a reload and restarts the loop.
    pub fn set_len(&self, len: usize) {
        let snapshot = {
            let mut state = self.state.lock().expect("guestbook state lock poisoned");
            *state = GuestbookState::new(len);
            *state
        };
        let _ = self.updates.send(snapshot);
        self.spawn_ticker();
    }

    #[must_use]
    pub fn current(&self) -> GuestbookState {
        *self.state.lock().expect("guestbook state lock poisoned")
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GuestbookState> {
        self.updates.subscribe()
    }

    pub fn shutdown(&self) {
        self.shutdown.cancel();
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
        let display = self.display;
        let fade = self.fade;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    () = tokio::time::sleep(display) => {}
                }

                let rotates = {
                    let state = state.lock().expect("guestbook state lock poisoned");
                    state.len > 1
                };
                if !rotates {
                    continue;
                }

                send_update(&state, &updates, |s| s.visible = false);
                tokio::select! {
                    () = token.cancelled() => break,
                    () = tokio::time::sleep(fade) => {}
                }
                send_update(&state, &updates, |s| {
                    s.current_index = (s.current_index + 1) % s.len;
                    s.visible = true;
                });
            }
        });
    }
}

impl Drop for GuestbookRotator {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn send_update(
    state: &Arc<Mutex<GuestbookState>>,
    updates: &watch::Sender<GuestbookState>,
    f: impl FnOnce(&mut GuestbookState),
) {
    let snapshot = {
        let mut state = state.lock().expect("guestbook state lock poisoned");
        f(&mut state);
        *state
    };
    let _ = updates.send(snapshot);
}

/// Uniform Fisher–Yates shuffle, used to re-roll the guestbook and poetry
/// display order on every reload.
pub fn shuffle_in_place<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = fastrand::usize(..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fades_then_advances() {
        let rotator = GuestbookRotator::new(
            3,
            Duration::from_millis(6000),
            Duration::from_millis(500),
        );
        tokio::time::sleep(Duration::from_millis(6100)).await;
        let mid_fade = rotator.current();
        assert!(!mid_fade.visible);
        assert_eq!(mid_fade.current_index, 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        let after = rotator.current();
        assert!(after.visible);
        assert_eq!(after.current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn single_message_stays_visible() {
        let rotator = GuestbookRotator::new(
            1,
            Duration::from_millis(6000),
            Duration::from_millis(500),
        );
        tokio::time::sleep(Duration::from_millis(20_000)).await;
        let state = rotator.current();
        assert!(state.visible);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        shuffle_in_place(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_trivial_lengths() {
        let mut empty: Vec<u32> = vec![];
        shuffle_in_place(&mut empty);
        let mut one = vec![7];
        shuffle_in_place(&mut one);
        assert_eq!(one, vec![7]);
    }
}
