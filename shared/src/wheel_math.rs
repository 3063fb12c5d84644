//! Angle arithmetic for landing a chosen slice under the pointer.
//!
//! Angles are degrees measured clockwise from 3 o'clock. Slice `i` of `n`
//! occupies `[i * a, (i + 1) * a)` with `a = 360 / n`.

use serde::{Deserialize, Serialize};

use crate::constants::FULL_TURN;

/// Reduces `degrees` into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= FULL_TURN {
        0.0
    } else {
        reduced
    }
}

pub fn angle_per_segment(item_count: usize) -> f64 {
    FULL_TURN / item_count as f64
}

/// Angular center of slice `index`.
pub fn segment_center_angle(index: usize, item_count: usize) -> f64 {
    (index as f64 + 0.5) * angle_per_segment(item_count)
}

/// Orientation (mod 360) at which `center_angle` sits under `pointer_angle`.
pub fn target_resting_angle(center_angle: f64, pointer_angle: f64) -> f64 {
    normalize_degrees(pointer_angle - center_angle + FULL_TURN)
}

/// Clockwise distance from `current` to `target`, in `[0, 360)`.
pub fn forward_delta(current: f64, target: f64) -> f64 {
    normalize_degrees(normalize_degrees(target) - normalize_degrees(current) + FULL_TURN)
}

/// Which slice the pointer is over for a wheel rotated by `rotation`.
pub fn segment_under_pointer(rotation: f64, pointer_angle: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let frame_angle = normalize_degrees(pointer_angle - rotation);
    let index = (frame_angle / angle_per_segment(item_count)).floor() as usize;
    Some(index.min(item_count - 1))
}

/// The random choices behind one spin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinDraw {
    pub winner_index: usize,
    pub extra_spins: u32,
}

/// Everything computed for one spin, before any state changes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub angle_per_segment: f64,
    pub center_angle: f64,
    pub target_resting_angle: f64,
    pub forward_delta: f64,
    pub extra_spins: u32,
    pub target_rotation: f64,
}

/// Computes the rotation that lands `draw.winner_index` under the pointer
/// after `draw.extra_spins` full turns, always moving forward from
/// `current_rotation`. `item_count` must be non-zero.
pub fn plan_spin(
    current_rotation: f64,
    item_count: usize,
    draw: SpinDraw,
    pointer_angle: f64,
) -> SpinPlan {
    let angle_per_segment = angle_per_segment(item_count);
    let center_angle = segment_center_angle(draw.winner_index, item_count);
    let target_resting_angle = target_resting_angle(center_angle, pointer_angle);
    let forward_delta = forward_delta(current_rotation, target_resting_angle);
    let target_rotation =
        current_rotation + f64::from(draw.extra_spins) * FULL_TURN + forward_delta;

    SpinPlan {
        winner_index: draw.winner_index,
        angle_per_segment,
        center_angle,
        target_resting_angle,
        forward_delta,
        extra_spins: draw.extra_spins,
        target_rotation,
    }
}
