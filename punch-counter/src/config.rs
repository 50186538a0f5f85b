//! Engine configuration.
//!
//! Every section deserializes with defaults, so a partial JSON document such
//! as `{"arm": {"thresholds": {"extend_above": 155.0}}}` is enough to override
//! one value. Unknown keys are rejected so a typo cannot fall back to a default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default angle (degrees) at or above which an arm counts as extended
pub const DEFAULT_EXTEND_ABOVE: f32 = 160.0;

/// Default angle (degrees) at or below which an arm counts as retracted
pub const DEFAULT_RETRACT_BELOW: f32 = 70.0;

/// Default guard-drop margin in normalized frame units
pub const DEFAULT_DROP_MARGIN: f32 = 0.10;

/// Default minimum landmark visibility accepted from the pose model
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

/// Hysteresis thresholds for one arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmThresholds {
    pub extend_above: f32,
    pub retract_below: f32,
}

impl ArmThresholds {
    /// Build thresholds, rejecting an unusable band immediately.
    pub fn new(extend_above: f32, retract_below: f32) -> Result<Self> {
        let thresholds = Self {
            extend_above,
            retract_below,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        check_angle("extend_above", self.extend_above)?;
        check_angle("retract_below", self.retract_below)?;
        if self.retract_below >= self.extend_above {
            return Err(Error::InvertedThresholds {
                extend_above: self.extend_above,
                retract_below: self.retract_below,
            });
        }
        Ok(())
    }
}

impl Default for ArmThresholds {
    fn default() -> Self {
        Self {
            extend_above: DEFAULT_EXTEND_ABOVE,
            retract_below: DEFAULT_RETRACT_BELOW,
        }
    }
}

fn check_angle(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ThresholdOutOfRange { name, value })
    }
}

/// Landmark confidence thresholds live in [0, 1]
pub fn check_visibility(min_visibility: f32) -> Result<()> {
    if (0.0..=1.0).contains(&min_visibility) {
        Ok(())
    } else {
        Err(Error::InvalidVisibility(min_visibility))
    }
}

/// Per-arm state machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmConfig {
    pub thresholds: ArmThresholds,

    /// Consecutive samples at or above `extend_above` needed to register an
    /// extension. 1 reacts on the first sample.
    pub extend_dwell_frames: u32,
}

impl ArmConfig {
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.extend_dwell_frames == 0 {
            return Err(Error::ZeroFrameWindow {
                name: "extend_dwell_frames",
            });
        }
        Ok(())
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            thresholds: ArmThresholds::default(),
            extend_dwell_frames: 1,
        }
    }
}

/// Guard position check configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// How far (normalized y) a wrist may sit below its shoulder
    pub drop_margin: f32,

    /// Consecutive dropped-guard frames before the alert is reported
    pub min_alert_frames: u32,
}

impl FormConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.drop_margin.is_finite() || self.drop_margin < 0.0 {
            return Err(Error::InvalidDropMargin(self.drop_margin));
        }
        if self.min_alert_frames == 0 {
            return Err(Error::ZeroFrameWindow {
                name: "min_alert_frames",
            });
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            drop_margin: DEFAULT_DROP_MARGIN,
            min_alert_frames: 1,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Shared by both arms
    pub arm: ArmConfig,

    pub form: FormConfig,

    /// Landmarks reported below this visibility are treated as missing
    pub min_visibility: f32,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.arm.validate()?;
        self.form.validate()?;
        check_visibility(self.min_visibility)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arm: ArmConfig::default(),
            form: FormConfig::default(),
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arm.thresholds.extend_above, 160.0);
        assert_eq!(config.arm.thresholds.retract_below, 70.0);
        assert_eq!(config.form.drop_margin, 0.10);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = ArmThresholds::new(60.0, 90.0).unwrap_err();
        assert!(matches!(err, Error::InvertedThresholds { .. }));

        // Equal thresholds leave no band at all
        assert!(ArmThresholds::new(90.0, 90.0).is_err());
    }

    #[test]
    fn test_threshold_range_checked() {
        assert!(matches!(
            ArmThresholds::new(190.0, 70.0),
            Err(Error::ThresholdOutOfRange { name: "extend_above", .. })
        ));
        assert!(ArmThresholds::new(160.0, f32::NAN).is_err());
    }

    #[test]
    fn test_negative_margin_rejected() {
        let form = FormConfig {
            drop_margin: -0.05,
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(Error::InvalidDropMargin(-0.05)));
    }

    #[test]
    fn test_zero_windows_rejected() {
        let arm = ArmConfig {
            extend_dwell_frames: 0,
            ..Default::default()
        };
        assert!(arm.validate().is_err());

        let form = FormConfig {
            min_alert_frames: 0,
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json(r#"{"arm": {"thresholds": {"extend_above": 150.0}}}"#).unwrap();
        assert_eq!(config.arm.thresholds.extend_above, 150.0);
        assert_eq!(config.arm.thresholds.retract_below, 70.0);
        assert_eq!(config.arm.extend_dwell_frames, 1);
        assert_eq!(config.min_visibility, 0.5);
    }

    #[test]
    fn test_json_validation_and_parse_errors() {
        let inverted = EngineConfig::from_json(r#"{"arm": {"thresholds": {"retract_below": 170.0}}}"#);
        assert!(matches!(inverted, Err(Error::InvertedThresholds { .. })));

        let garbage = EngineConfig::from_json("{not json");
        assert!(matches!(garbage, Err(Error::ConfigParse(_))));

        let visibility = EngineConfig::from_json(r#"{"min_visibility": 1.5}"#);
        assert_eq!(visibility, Err(Error::InvalidVisibility(1.5)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let typo = EngineConfig::from_json(r#"{"arm": {"thresholds": {"extend_abve": 150.0}}}"#);
        assert!(matches!(typo, Err(Error::ConfigParse(_))));

        let misplaced = EngineConfig::from_json(r#"{"arm": {"extend_above": 150.0}}"#);
        assert!(matches!(misplaced, Err(Error::ConfigParse(_))));

        let top_level = EngineConfig::from_json(r#"{"min_visibilty": 0.3}"#);
        assert!(matches!(top_level, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_visibility_range() {
        assert!(check_visibility(0.0).is_ok());
        assert!(check_visibility(1.0).is_ok());
        assert_eq!(check_visibility(-0.1), Err(Error::InvalidVisibility(-0.1)));
        assert!(check_visibility(f32::NAN).is_err());
    }
}
