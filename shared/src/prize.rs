use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRIZE_QUOTA;

/// The scarce prizes a wheel can award. Identity never depends on a display label.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrizeId {
    First,
    Second,
    Third,
}

impl PrizeId {
    pub const ALL: [PrizeId; 3] = [PrizeId::First, PrizeId::Second, PrizeId::Third];

    /// Key used for this prize in the persisted quota object.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::First => "p1",
            Self::Second => "p2",
            Self::Third => "p3",
        }
    }
}

/// Remaining award count per prize.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct QuotaState {
    #[serde(rename = "p1", default = "default_quota")]
    pub first: u32,
    #[serde(rename = "p2", default = "default_quota")]
    pub second: u32,
    #[serde(rename = "p3", default = "default_quota")]
    pub third: u32,
}

fn default_quota() -> u32 {
    DEFAULT_PRIZE_QUOTA
}

impl Default for QuotaState {
    fn default() -> Self {
        Self::uniform(DEFAULT_PRIZE_QUOTA)
    }
}

impl QuotaState {
    pub fn uniform(count: u32) -> Self {
        Self {
            first: count,
            second: count,
            third: count,
        }
    }

    pub fn remaining(&self, prize: PrizeId) -> u32 {
        match prize {
            PrizeId::First => self.first,
            PrizeId::Second => self.second,
            PrizeId::Third => self.third,
        }
    }

    fn slot_mut(&mut self, prize: PrizeId) -> &mut u32 {
        match prize {
            PrizeId::First => &mut self.first,
            PrizeId::Second => &mut self.second,
            PrizeId::Third => &mut self.third,
        }
    }

    pub fn is_exhausted(&self, prize: PrizeId) -> bool {
        self.remaining(prize) == 0
    }

    /// Takes one unit of `prize` if any is left.
    /// Returns the resulting state and whether the award was granted; an exhausted
    /// prize leaves the state untouched.
    pub fn award(self, prize: PrizeId) -> (Self, bool) {
        let mut next = self;
        let slot = next.slot_mut(prize);
        if *slot == 0 {
            return (self, false);
        }
        *slot -= 1;
        (next, true)
    }

    /// Caps every count at the matching entry of `limits`.
    pub fn clamped_to(self, limits: &QuotaState) -> Self {
        Self {
            first: self.first.min(limits.first),
            second: self.second.min(limits.second),
            third: self.third.min(limits.third),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_decrements_once() {
        let (next, granted) = QuotaState::uniform(2).award(PrizeId::Second);
        assert!(granted);
        assert_eq!(next.remaining(PrizeId::Second), 1);
        assert_eq!(next.remaining(PrizeId::First), 2);
        assert_eq!(next.remaining(PrizeId::Third), 2);
    }

    #[test]
    fn test_award_exhausted_is_rejected() {
        let state = QuotaState { first: 0, second: 1, third: 1 };
        let (next, granted) = state.award(PrizeId::First);
        assert!(!granted);
        assert_eq!(next, state);
    }

    #[test]
    fn test_award_never_goes_below_zero() {
        let mut state = QuotaState::default();
        for _ in 0..5 {
            state = state.award(PrizeId::Third).0;
        }
        assert_eq!(state.remaining(PrizeId::Third), 0);
        assert!(state.is_exhausted(PrizeId::Third));
    }

    #[test]
    fn test_serializes_with_storage_keys() {
        let json = serde_json::to_string(&QuotaState { first: 0, second: 1, third: 1 }).unwrap();
        assert_eq!(json, r#"{"p1":0,"p2":1,"p3":1}"#);
        for prize in PrizeId::ALL {
            assert!(json.contains(prize.storage_key()));
        }
    }

    #[test]
    fn test_clamped_to_limits() {
        let state = QuotaState { first: 5, second: 0, third: 1 };
        assert_eq!(state.clamped_to(&QuotaState::default()), QuotaState { first: 1, second: 0, third: 1 });
    }
}
