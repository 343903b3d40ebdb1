use std::f64::consts::{FRAC_PI_2, TAU};

use crate::prize::PrizeId;

pub const QUOTA_STORAGE_KEY: &str = "wheel-prize-limits-v1";
pub const LANGUAGE_STORAGE_KEY: &str = "wheel-language";

pub const DEFAULT_PRIZE_QUOTA: u32 = 1;

/// Wheel rotation at which segment 0's leading edge sits under the pointer (12 o'clock).
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;
pub const FULL_TURN: f64 = TAU;

pub const MIN_TURNS: u32 = 6;   // Fewest full rotations a spin may add
pub const MAX_TURNS: u32 = 8;
pub const MIN_SPIN_DURATION_MS: f64 = 2800.0;
pub const MAX_SPIN_DURATION_MS: f64 = 3500.0;

/// Fraction of a slice kept clear on each edge when placing the landing point.
pub const DEFAULT_EDGE_MARGIN: f64 = 0.15;
pub const MIN_EDGE_MARGIN: f64 = 1e-6;
pub const MAX_EDGE_MARGIN: f64 = 0.45;

/// One slice per prize is the smallest wheel that can carry them all.
pub const MIN_SEGMENTS: usize = PrizeId::ALL.len();
