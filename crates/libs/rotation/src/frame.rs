use crate::RotationState;
use serde::Serialize;
use utoipa::ToSchema;

const SCALE_STEP: f32 = 0.08;
const SCALE_FLOOR: f32 = 0.7;
const CENTER_SCALE: f32 = 1.05;
const OPACITY_STEP: f32 = 0.15;
const OPACITY_FLOOR: f32 = 0.3;
const OFFSET_STEP_PX: f32 = 70.0;
const ROTATION_STEP_DEG: f32 = 12.0;

/// Visual parameters for one slot of the stacked-depth carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotTransform {
    pub scale: f32,
    pub opacity: f32,
    /// Signed pixel offset: negative left of center, positive right.
    pub horizontal_offset: f32,
    /// Rotation around the vertical axis in degrees, signed opposite to
    /// `horizontal_offset` for the fanned illusion.
    pub rotation: f32,
    /// Stacking order, topmost at the center slot, strictly decreasing with
    /// distance from it.
    pub stack_order: i32,
}

/// Computes the transform for window offset `slot` in a window of
/// `window_size` slots. Pure in `(slot, window_size)`.
#[must_use]
pub fn slot_transform(slot: usize, window_size: usize) -> SlotTransform {
    let center = window_size / 2;
    let distance = slot.abs_diff(center);
    let d = distance as f32;

    if distance == 0 {
        return SlotTransform {
            scale: CENTER_SCALE,
            opacity: 1.0,
            horizontal_offset: 0.0,
            rotation: 0.0,
            stack_order: window_size as i32,
        };
    }

    let side = if slot < center { -1.0 } else { 1.0 };
    SlotTransform {
        scale: (1.0 - d * SCALE_STEP).max(SCALE_FLOOR),
        opacity: (1.0 - d * OPACITY_STEP).max(OPACITY_FLOOR),
        horizontal_offset: side * d * OFFSET_STEP_PX,
        rotation: -side * d * ROTATION_STEP_DEG,
        stack_order: (window_size - distance) as i32,
    }
}

/// One rendered slot of a frame: where it sits in the window, which item it
/// shows, and how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameSlot {
    pub slot: usize,
    pub absolute_index: usize,
    pub transform: SlotTransform,
}

/// Computes the full frame for the current rotation state with up to `k`
/// visible slots. Transform math uses the effective window size
/// `min(k, len)` so short lists still center correctly.
#[must_use]
pub fn compute_frame(state: &RotationState, k: usize) -> Vec<FrameSlot> {
    let window_size = k.min(state.len());
    state
        .window(k)
        .into_iter()
        .enumerate()
        .map(|(slot, absolute_index)| FrameSlot {
            slot,
            absolute_index,
            transform: slot_transform(slot, window_size),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn center_slot_is_boosted_and_topmost() {
        for k in 3..=8 {
            let center = k / 2;
            let t = slot_transform(center, k);
            assert!(approx(t.scale, 1.05));
            assert!(approx(t.opacity, 1.0));
            assert!(approx(t.horizontal_offset, 0.0));
            assert!(approx(t.rotation, 0.0));
            for slot in (0..k).filter(|&s| s != center) {
                assert!(slot_transform(slot, k).stack_order < t.stack_order);
            }
        }
    }

    #[test]
    fn offsets_are_signed_away_from_center_and_rotation_opposes_them() {
        let k = 5;
        let left = slot_transform(0, k); // distance 2, left side
        let right = slot_transform(4, k); // distance 2, right side

        assert!(approx(left.horizontal_offset, -140.0));
        assert!(approx(left.rotation, 24.0));
        assert!(approx(right.horizontal_offset, 140.0));
        assert!(approx(right.rotation, -24.0));
    }

    #[test]
    fn scale_and_opacity_respect_their_floors() {
        // Window of 8: slot 0 sits 4 away from center.
        let t = slot_transform(0, 8);
        assert!(approx(t.scale, 0.7)); // 1 - 4*0.08 = 0.68, floored
        assert!(approx(t.opacity, 0.4)); // 1 - 4*0.15, above the 0.3 floor
    }

    #[test]
    fn stack_order_decreases_monotonically_with_distance() {
        let k = 7;
        let center = k / 2;
        let mut by_distance: Vec<(usize, i32)> = (0..k)
            .map(|slot: usize| (slot.abs_diff(center), slot_transform(slot, k).stack_order))
            .collect();
        by_distance.sort_unstable();
        for pair in by_distance.windows(2) {
            if pair[1].0 > pair[0].0 {
                assert!(pair[1].1 < pair[0].1);
            }
        }
    }

    #[test]
    fn transforms_are_deterministic() {
        for k in 3..=8 {
            for slot in 0..k {
                assert_eq!(slot_transform(slot, k), slot_transform(slot, k));
            }
        }
    }

    #[test]
    fn frame_uses_effective_window_for_short_lists() {
        let state = RotationState::new(2);
        let frame = compute_frame(&state, 5);
        assert_eq!(frame.len(), 2);
        // Effective window of 2 centers on slot 1.
        assert!(approx(frame[1].transform.scale, 1.05));
    }
}
