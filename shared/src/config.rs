use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::prize::QuotaState;
use crate::segment::SegmentLayout;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Classic,
    #[default]
    Octagon,
}

impl LayoutKind {
    pub fn build(&self) -> SegmentLayout {
        match self {
            Self::Classic => SegmentLayout::classic(),
            Self::Octagon => SegmentLayout::octagon(),
        }
    }
}

/// Spin timing and placement as written in a config block. Nothing here is
/// checked; convert into [`SpinConfig`] before use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpinSettings {
    pub min_turns: u32,
    pub max_turns: u32,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    /// Share of a slice left clear on each side of the landing point.
    pub edge_margin: f64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            min_duration_ms: MIN_SPIN_DURATION_MS,
            max_duration_ms: MAX_SPIN_DURATION_MS,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl SpinSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_turns < MIN_TURNS || self.min_turns > self.max_turns {
            return Err(ConfigError::Turns {
                min_allowed: MIN_TURNS,
                min: self.min_turns,
                max: self.max_turns,
            });
        }
        // written so that NaN fails too
        if !(self.min_duration_ms > 0.0 && self.min_duration_ms <= self.max_duration_ms && self.max_duration_ms.is_finite()) {
            return Err(ConfigError::Duration {
                min: self.min_duration_ms,
                max: self.max_duration_ms,
            });
        }
        if !(MIN_EDGE_MARGIN..=MAX_EDGE_MARGIN).contains(&self.edge_margin) {
            return Err(ConfigError::Margin {
                low: MIN_EDGE_MARGIN,
                high: MAX_EDGE_MARGIN,
                got: self.edge_margin,
            });
        }
        Ok(())
    }
}

/// Checked spin timing. Only obtainable through `TryFrom<SpinSettings>` or
/// `Default`, so every range it holds is non-empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    settings: SpinSettings,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            settings: SpinSettings::default(),
        }
    }
}

impl TryFrom<SpinSettings> for SpinConfig {
    type Error = ConfigError;

    fn try_from(settings: SpinSettings) -> Result<Self, Self::Error> {
        settings.validate()?;
        Ok(Self { settings })
    }
}

impl SpinConfig {
    pub fn min_turns(&self) -> u32 {
        self.settings.min_turns
    }

    pub fn max_turns(&self) -> u32 {
        self.settings.max_turns
    }

    pub fn min_duration_ms(&self) -> f64 {
        self.settings.min_duration_ms
    }

    pub fn max_duration_ms(&self) -> f64 {
        self.settings.max_duration_ms
    }

    pub fn edge_margin(&self) -> f64 {
        self.settings.edge_margin
    }

    pub fn settings(&self) -> SpinSettings {
        self.settings
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub layout: LayoutKind,
    pub storage_key: String,
    pub default_quotas: QuotaState,
    pub spin: SpinSettings,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            storage_key: QUOTA_STORAGE_KEY.to_string(),
            default_quotas: QuotaState::default(),
            spin: SpinSettings::default(),
        }
    }
}

impl WheelConfig {
    /// Parses a JSON config block. Absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spin.validate()
    }

    pub fn spin_config(&self) -> Result<SpinConfig, ConfigError> {
        SpinConfig::try_from(self.spin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.build().len(), 8);
        assert_eq!(config.storage_key, "wheel-prize-limits-v1");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WheelConfig::from_json(r#"{"layout":"classic","spin":{"max_turns":10}}"#).unwrap();
        assert_eq!(config.layout, LayoutKind::Classic);
        assert_eq!(config.spin.min_turns, 6);
        assert_eq!(config.spin.max_turns, 10);
        assert_eq!(config.default_quotas, QuotaState::uniform(1));

        let config = WheelConfig::from_json(r#"{"default_quotas":{"p2":3}}"#).unwrap();
        assert_eq!(config.default_quotas, QuotaState { first: 1, second: 3, third: 1 });
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let few_turns = SpinSettings { min_turns: 2, ..SpinSettings::default() };
        assert!(matches!(few_turns.validate(), Err(ConfigError::Turns { .. })));

        let inverted = SpinSettings { min_duration_ms: 4000.0, ..SpinSettings::default() };
        assert!(matches!(inverted.validate(), Err(ConfigError::Duration { .. })));

        let zero_margin = SpinSettings { edge_margin: 0.0, ..SpinSettings::default() };
        assert!(matches!(zero_margin.validate(), Err(ConfigError::Margin { .. })));

        assert!(matches!(WheelConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(WheelConfig::from_json(r#"{"layout":"hexagon"}"#), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_spin_config_rejects_inverted_ranges() {
        let inverted_turns = SpinSettings { min_turns: 9, max_turns: 6, ..SpinSettings::default() };
        assert_eq!(
            SpinConfig::try_from(inverted_turns),
            Err(ConfigError::Turns { min_allowed: 6, min: 9, max: 6 })
        );

        let config = WheelConfig { spin: inverted_turns, ..WheelConfig::default() };
        assert!(config.spin_config().is_err());
        assert!(matches!(
            WheelConfig::from_json(r#"{"spin":{"min_turns":9,"max_turns":6}}"#),
            Err(ConfigError::Turns { .. })
        ));

        let spin = SpinConfig::try_from(SpinSettings { max_turns: 10, ..SpinSettings::default() }).unwrap();
        assert_eq!((spin.min_turns(), spin.max_turns()), (6, 10));
        assert_eq!(SpinConfig::default().settings(), SpinSettings::default());
    }
}
