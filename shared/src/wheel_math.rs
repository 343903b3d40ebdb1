//! Angle bookkeeping shared by targeting, animation and landing.
//!
//! Wheel space measures angles on the wheel itself, with segment `i` covering
//! `[i * s, (i + 1) * s)` for slice width `s`. A wheel rotation `a` puts the
//! wheel-space point `POINTER_ANGLE - a` under the pointer.

use crate::constants::{FULL_TURN, POINTER_ANGLE};

pub fn slice_width(segment_count: usize) -> f64 {
    FULL_TURN / segment_count as f64
}

/// Maps any real angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Index of the segment under the pointer for wheel rotation `angle`.
pub fn index_at_pointer(angle: f64, segment_count: usize) -> usize {
    let wheel_point = normalize_angle(POINTER_ANGLE - angle);
    let idx = (wheel_point / slice_width(segment_count)).floor() as usize;
    idx % segment_count
}

/// Wheel rotation that brings the point at `fraction` of the way across
/// segment `index` under the pointer.
pub fn target_angle(index: usize, fraction: f64, segment_count: usize) -> f64 {
    let wheel_point = (index as f64 + fraction) * slice_width(segment_count);
    POINTER_ANGLE - wheel_point
}

/// Cubic ease-out: fast start, velocity reaches zero exactly at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_EDGE_MARGIN;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_range() {
        for angle in [-1e-18, -PI, 0.0, 2.0 * PI, 7.5 * PI, -123.456, 1e6] {
            let n = normalize_angle(angle);
            assert!((0.0..FULL_TURN).contains(&n), "{} -> {}", angle, n);
        }
        assert_eq!(normalize_angle(-1e-18), 0.0);
    }

    #[test]
    fn test_start_angle_points_at_segment_zero() {
        assert_eq!(index_at_pointer(POINTER_ANGLE, 8), 0);
        assert_eq!(index_at_pointer(POINTER_ANGLE, 7), 0);
    }

    #[test]
    fn test_round_trip_random_offsets() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [7usize, 8] {
            for idx in 0..n {
                for _ in 0..2000 {
                    let fraction = rng.gen_range(MIN_EDGE_MARGIN..=1.0 - MIN_EDGE_MARGIN);
                    let turns = rng.gen_range(6..=8) as f64;
                    let terminal = target_angle(idx, fraction, n) - turns * FULL_TURN;
                    assert_eq!(index_at_pointer(terminal, n), idx);
                    assert_eq!(index_at_pointer(normalize_angle(terminal), n), idx);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_near_boundaries() {
        for n in [7usize, 8] {
            for idx in 0..n {
                for fraction in [MIN_EDGE_MARGIN, 1e-5, 0.15, 0.5, 0.85, 1.0 - 1e-5, 1.0 - MIN_EDGE_MARGIN] {
                    for turns in 0..=8 {
                        let terminal = target_angle(idx, fraction, n) - turns as f64 * FULL_TURN;
                        assert_eq!(index_at_pointer(terminal, n), idx, "n={} idx={} f={}", n, idx, fraction);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        let mut prev = 0.0;
        let mut prev_step = f64::INFINITY;
        for i in 1..=100 {
            let eased = ease_out_cubic(i as f64 / 100.0);
            let step = eased - prev;
            assert!(step >= 0.0 && step <= prev_step + 1e-12);
            prev = eased;
            prev_step = step;
        }
    }
}
