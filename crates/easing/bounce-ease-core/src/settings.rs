//! User-editable animation settings and their immutable snapshot.
//!
//! A settings panel mutates `BounceSettings` in place while the user drags sliders.
//! Starting an animation takes a `snapshot()`: an `AnimationRequest` holding copies of
//! the values, so the running animation never observes later edits.

use serde::{Deserialize, Serialize};

use crate::bounce::{BounceEase, BounceFormulation};
use crate::error::EasingError;
use crate::mode::EasingMode;
use crate::params::BounceEasingParams;
use crate::player::AnimationRequest;

/// Slider increment used by the panel for real-valued fields.
pub const VALUE_STEP: f64 = 0.01;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceSettings {
    /// Decay ratio between successive rebounds.
    pub amplitude: f64,
    /// Seconds from the drop to rest.
    pub duration: f64,
    /// Arcs including the drop; the ball rebounds `bounces - 1` times.
    #[serde(alias = "bounceCount")]
    pub bounces: u32,
    /// Displacement of the animated property in scene units.
    #[serde(alias = "dropHeight")]
    pub drop_height: f64,
    pub mode: EasingMode,
    pub formulation: BounceFormulation,
}

impl Default for BounceSettings {
    fn default() -> Self {
        Self {
            amplitude: 5.0,
            duration: 3.0,
            bounces: 3,
            drop_height: 3.0,
            mode: EasingMode::EaseOut,
            formulation: BounceFormulation::Analytic,
        }
    }
}

/// Inclusive ranges of the panel widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsRanges {
    pub amplitude: (f64, f64),
    pub duration: (f64, f64),
    pub bounces: (u32, u32),
    pub drop_height: (f64, f64),
    pub step: f64,
}

impl Default for SettingsRanges {
    fn default() -> Self {
        Self {
            amplitude: (0.1, 10.0),
            duration: (0.1, 10.0),
            bounces: (1, 10),
            drop_height: (0.1, 10.0),
            step: VALUE_STEP,
        }
    }
}

fn check(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), EasingError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(EasingError::out_of_range(field, value, min, max))
    }
}

impl BounceSettings {
    /// Check every field against the default widget ranges.
    pub fn validate(&self) -> Result<(), EasingError> {
        self.validate_with(&SettingsRanges::default())
    }

    pub fn validate_with(&self, ranges: &SettingsRanges) -> Result<(), EasingError> {
        check("amplitude", self.amplitude, ranges.amplitude)?;
        check("duration", self.duration, ranges.duration)?;
        let (min_b, max_b) = ranges.bounces;
        check(
            "bounces",
            f64::from(self.bounces),
            (f64::from(min_b), f64::from(max_b)),
        )?;
        check("drop_height", self.drop_height, ranges.drop_height)?;
        Ok(())
    }

    /// Easing parameters as the evaluator will see them (clamped).
    pub fn params(&self) -> BounceEasingParams {
        BounceEasingParams::new(self.bounces, self.amplitude)
    }

    pub fn ease(&self) -> BounceEase {
        BounceEase::new(self.params(), self.mode).with_formulation(self.formulation)
    }

    /// Freeze the current values into a request that drops the property from
    /// `drop_height` to 0 over `duration` seconds.
    pub fn snapshot(&self) -> AnimationRequest {
        AnimationRequest::drop_from(self.drop_height, self.duration, self.ease())
    }
}

impl BounceEase {
    pub fn from_settings(settings: &BounceSettings) -> Self {
        settings.ease()
    }
}

/// Parse and validate a settings document. Missing fields take their defaults.
pub fn parse_settings_json(s: &str) -> Result<BounceSettings, EasingError> {
    let settings: BounceSettings = serde_json::from_str(s)?;
    settings.validate()?;
    Ok(settings)
}
