use std::cell::RefCell;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{SpinConfig, WheelConfig};
use crate::constants::{FULL_TURN, POINTER_ANGLE};
use crate::error::ConfigError;
use crate::frame_clock::FrameClock;
use crate::prize::{PrizeId, QuotaState};
use crate::quota_store::{KeyValueStorage, QuotaStore};
use crate::segment::SegmentLayout;
use crate::wheel_math::{self, ease_out_cubic, index_at_pointer};

/// What a finished spin (or a reset) means for the player.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(PrizeId),
    /// Landed on a prize with no quota left; counts as no win.
    PrizeExhausted(PrizeId),
    NoPrize,
    QuotaReset,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Won(_))
    }
}

/// Everything decided at the moment a spin is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub drawn_index: usize,
    /// Rotation that puts the landing point under the pointer, before extra turns.
    pub target_angle: f64,
    pub turns: u32,
    pub start_angle: f64,
    pub terminal_angle: f64,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    pub drawn_index: usize,
    pub landed_index: usize,
    pub terminal_angle: f64,
    pub outcome: Outcome,
    pub quotas: QuotaState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinFrame {
    Idle,
    Animating(f64),
    Landed(SpinResult),
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Spinning { plan: SpinPlan, started_at: f64 },
}

/// The draw-and-quota engine. Owns the layout, the wheel angle, the spin phase
/// and the prize counters; its methods are the only way to change them.
pub struct WheelGame<S: KeyValueStorage> {
    layout: SegmentLayout,
    spin_config: SpinConfig,
    store: QuotaStore<S>,
    quotas: QuotaState,
    angle: f64,
    phase: Phase,
    last_result: Option<SpinResult>,
}

impl<S: KeyValueStorage> WheelGame<S> {
    pub fn new(layout: SegmentLayout, spin_config: SpinConfig, store: QuotaStore<S>) -> Self {
        let quotas = store.load();
        log::info!("Wheel ready with {} segments, quotas {:?}", layout.len(), quotas);
        Self {
            layout,
            spin_config,
            store,
            quotas,
            angle: POINTER_ANGLE,
            phase: Phase::Idle,
            last_result: None,
        }
    }

    pub fn from_config(config: &WheelConfig, storage: S) -> Result<Self, ConfigError> {
        let spin_config = config.spin_config()?;
        let store = QuotaStore::with_defaults(storage, &config.storage_key, config.default_quotas);
        Ok(Self::new(config.layout.build(), spin_config, store))
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    pub fn quotas(&self) -> QuotaState {
        self.quotas
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Spinning { .. })
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn store(&self) -> &QuotaStore<S> {
        &self.store
    }

    /// The backing storage, for settings that live beside the quotas.
    pub fn storage_mut(&mut self) -> &mut S {
        self.store.storage_mut()
    }

    /// Draws a segment and the path to it from the current angle. Does not
    /// change any state; quotas play no part in the draw.
    pub fn plan_spin<R: Rng + ?Sized>(&self, rng: &mut R) -> SpinPlan {
        let count = self.layout.len();
        let config = &self.spin_config;

        let drawn_index = rng.gen_range(0..count);
        let fraction = rng.gen_range(config.edge_margin()..=1.0 - config.edge_margin());
        let turns = rng.gen_range(config.min_turns()..=config.max_turns());
        let duration_ms = rng.gen_range(config.min_duration_ms()..=config.max_duration_ms());

        let mut target_angle = wheel_math::target_angle(drawn_index, fraction, count);
        let mut terminal_angle = target_angle - turns as f64 * FULL_TURN;
        if index_at_pointer(terminal_angle, count) != drawn_index {
            log::error!(
                "Landing point {} of segment {} does not map back, using slice center",
                fraction,
                drawn_index
            );
            target_angle = wheel_math::target_angle(drawn_index, 0.5, count);
            terminal_angle = target_angle - turns as f64 * FULL_TURN;
        }

        SpinPlan {
            drawn_index,
            target_angle,
            turns,
            start_angle: self.angle,
            terminal_angle,
            duration_ms,
        }
    }

    /// Accepts a spin only while idle; a request during a spin is a no-op.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> Option<SpinPlan> {
        if self.is_spinning() {
            log::debug!("Spin requested while spinning, ignoring");
            return None;
        }

        let plan = self.plan_spin(rng);
        log::info!(
            "Spin started: segment {} after {} turns over {:.0} ms",
            plan.drawn_index,
            plan.turns,
            plan.duration_ms
        );
        self.phase = Phase::Spinning { plan, started_at: now };
        Some(plan)
    }

    /// Moves the animation to `now`. The frame at or past the end of the spin
    /// lands exactly on the terminal angle and resolves the outcome once.
    pub fn advance(&mut self, now: f64) -> SpinFrame {
        let (plan, started_at) = match self.phase {
            Phase::Idle => return SpinFrame::Idle,
            Phase::Spinning { plan, started_at } => (plan, started_at),
        };

        let progress = ((now - started_at) / plan.duration_ms).clamp(0.0, 1.0);
        if progress < 1.0 {
            let delta = plan.terminal_angle - plan.start_angle;
            self.angle = plan.start_angle + delta * ease_out_cubic(progress);
            return SpinFrame::Animating(self.angle);
        }

        SpinFrame::Landed(self.complete_spin(plan))
    }

    fn complete_spin(&mut self, plan: SpinPlan) -> SpinResult {
        let landed_index = index_at_pointer(plan.terminal_angle, self.layout.len());
        if landed_index != plan.drawn_index {
            log::error!("Drew segment {} but landed on {}", plan.drawn_index, landed_index);
        }

        let outcome = self.resolve(landed_index);
        self.angle = wheel_math::normalize_angle(plan.terminal_angle);
        self.phase = Phase::Idle;

        let result = SpinResult {
            drawn_index: plan.drawn_index,
            landed_index,
            terminal_angle: plan.terminal_angle,
            outcome,
            quotas: self.quotas,
        };
        log::info!("Spin landed on segment {}: {:?}", landed_index, outcome);
        self.last_result = Some(result);
        result
    }

    fn resolve(&mut self, landed_index: usize) -> Outcome {
        let prize = match self.layout.segment(landed_index).and_then(|s| s.prize) {
            Some(prize) => prize,
            None => return Outcome::NoPrize,
        };

        let (next, granted) = self.store.award(self.quotas, prize);
        if !granted {
            return Outcome::PrizeExhausted(prize);
        }
        self.quotas = next;
        self.store.save(&self.quotas);
        Outcome::Won(prize)
    }

    /// Restores and persists the default quotas. Leaves the angle and any
    /// spin in flight alone.
    pub fn reset(&mut self) -> Outcome {
        self.quotas = self.store.reset();
        self.store.save(&self.quotas);
        log::info!("Quotas reset to {:?}", self.quotas);
        Outcome::QuotaReset
    }
}

/// Runs one spin to completion: starts it, awaits a frame per step, reports
/// every angle to `on_frame` and resolves with the result. Returns `None` when
/// the wheel is already spinning. The game is only borrowed between awaits, so
/// other handlers may touch it while the animation runs.
pub async fn spin_to_outcome<S, R, C, F>(
    game: &RefCell<WheelGame<S>>,
    rng: &mut R,
    clock: &mut C,
    mut on_frame: F,
) -> Option<SpinResult>
where
    S: KeyValueStorage,
    R: Rng + ?Sized,
    C: FrameClock + ?Sized,
    F: FnMut(f64),
{
    let started_at = clock.now();
    game.borrow_mut().start_spin(rng, started_at)?;

    loop {
        let now = clock.next_frame().await;
        let frame = game.borrow_mut().advance(now);
        match frame {
            SpinFrame::Animating(angle) => on_frame(angle),
            SpinFrame::Landed(result) => {
                on_frame(result.terminal_angle);
                return Some(result);
            }
            SpinFrame::Idle => {
                log::warn!("Spin ended without landing");
                return None;
            }
        }
    }
}
