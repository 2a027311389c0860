/// Index state of a rotating window over a list of `len` items.
///
/// The index always stays in `[0, len)`; every mutation wraps modulo `len`.
/// With an empty list all mutations are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    current_index: usize,
    len: usize,
}

impl RotationState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
        }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the window forward by one item.
    pub const fn advance(&mut self) {
        if self.len > 0 {
            self.current_index = (self.current_index + 1) % self.len;
        }
    }

    /// Moves the window back by one item.
    pub const fn retreat(&mut self) {
        if self.len > 0 {
            self.current_index = (self.current_index + self.len - 1) % self.len;
        }
    }

    /// Absolute index of the item rendered at window offset `slot`.
    #[must_use]
    pub const fn absolute_index(&self, slot: usize) -> usize {
        (self.current_index + slot) % self.len
    }

    /// Re-centers the window on the item currently rendered at `slot`.
    pub const fn focus_slot(&mut self, slot: usize) {
        if self.len > 0 {
            self.current_index = self.absolute_index(slot);
        }
    }

    /// The absolute indices rendered by a window of up to `k` slots.
    ///
    /// Contains `min(k, len)` entries, all distinct.
    #[must_use]
    pub fn window(&self, k: usize) -> Vec<usize> {
        (0..k.min(self.len))
            .map(|slot| self.absolute_index(slot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_entries_are_distinct_for_all_supported_sizes() {
        for k in 3..=8 {
            for len in 1..=12 {
                let state = RotationState::new(len);
                let window = state.window(k);
                assert_eq!(window.len(), k.min(len));
                let mut sorted = window.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), window.len(), "k={k} len={len}");
            }
        }
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        for len in 1..=9 {
            let mut state = RotationState::new(len);
            state.advance();
            state.advance();
            let origin = state.current_index();
            for _ in 0..len {
                state.advance();
            }
            assert_eq!(state.current_index(), origin);
        }
    }

    #[test]
    fn advancing_k_times_restores_window_when_len_equals_k() {
        let k = 4;
        let mut state = RotationState::new(k);
        let original = state.window(k);
        for _ in 0..k {
            state.advance();
        }
        assert_eq!(state.window(k), original);
    }

    #[test]
    fn five_item_walkthrough_with_three_slots() {
        // List [A,B,C,D,E], K=3: window [A,B,C] with center B, then [B,C,D]
        // with center C after one advance.
        let mut state = RotationState::new(5);
        assert_eq!(state.window(3), vec![0, 1, 2]);
        assert_eq!(state.absolute_index(3 / 2), 1);

        state.advance();
        assert_eq!(state.window(3), vec![1, 2, 3]);
        assert_eq!(state.absolute_index(3 / 2), 2);
    }

    #[test]
    fn retreat_wraps_backwards() {
        let mut state = RotationState::new(5);
        state.retreat();
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn focus_slot_recenters_on_that_absolute_index() {
        let mut state = RotationState::new(5);
        state.advance(); // current = 1
        state.focus_slot(2); // slot 2 renders absolute index 3
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut state = RotationState::new(0);
        state.advance();
        state.retreat();
        state.focus_slot(2);
        assert_eq!(state.current_index(), 0);
        assert!(state.window(5).is_empty());
    }
}
