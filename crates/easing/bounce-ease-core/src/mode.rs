use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Which end(s) of the animation the bounce shaping is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingMode {
    /// Hops grow and the curve finishes with one rising arc.
    EaseIn,
    /// Drop, touch down, decaying rebounds, settle.
    #[default]
    EaseOut,
    /// Ease-in over the first half of progress, ease-out over the second.
    EaseInOut,
}

impl EasingMode {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
        }
    }

    /// Compose the mode transform from two direct curves.
    ///
    /// `ease_in` and `ease_out` must both map 0 to 0 and 1 to 1; `ease_out(t)` is expected
    /// to equal `1 - ease_in(1 - t)` but is taken as a separate function so callers can
    /// evaluate each side without flipping twice.
    #[inline]
    pub fn apply<I, O>(&self, ease_in: I, ease_out: O, progress: f64) -> f64
    where
        I: Fn(f64) -> f64,
        O: Fn(f64) -> f64,
    {
        match self {
            Self::EaseIn => ease_in(progress),
            Self::EaseOut => ease_out(progress),
            Self::EaseInOut => {
                if progress < 0.5 {
                    0.5 * ease_in(2.0 * progress)
                } else {
                    0.5 + 0.5 * ease_out(2.0 * progress - 1.0)
                }
            }
        }
    }
}

impl FromStr for EasingMode {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ease_in" | "easein" => Ok(Self::EaseIn),
            "ease_out" | "easeout" => Ok(Self::EaseOut),
            "ease_in_out" | "easeinout" => Ok(Self::EaseInOut),
            _ => Err(EasingError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EasingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
