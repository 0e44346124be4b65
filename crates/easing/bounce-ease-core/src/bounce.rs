//! The bounce easing evaluator.
//!
//! Both formulations share one *height profile*: the normalized displacement above the
//! rest line of a ball that is dropped at progress 0, touches down, rebounds
//! `bounce_count - 1` times with decaying apexes, and is at rest at progress 1. The drop
//! counts as the first bounce, so `bounce_count = 1` is a plain settle.
//!
//! - `ease_out(p) = 1 - height(p)` (drop and settle)
//! - `ease_in(p)  = height(1 - p)` (the same motion played backwards)
//! - `EaseInOut` composes the two halves, see [`EasingMode::apply`].
//!
//! Every curve is pure: it depends only on the progress value and the immutable
//! construction parameters, so one `BounceEase` can be shared across threads and
//! evaluated from any number of running animations.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::curves::{bezier_ease, geometric_mass, locate_arc, parabola};
use crate::mode::EasingMode;
use crate::params::BounceEasingParams;

/// Control points of the amplitude envelope used by the trigonometric formulation.
pub const ENVELOPE_CONTROL_POINTS: [f64; 4] = [0.12, 0.0, 0.39, 0.0];

/// How the height profile is computed.
///
/// The two produce the same qualitative shape but different literal values; only
/// `Analytic` has pinned reference values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BounceFormulation {
    /// Closed-form geometric arcs: arc `k` has height and duration `amplitude^-k`.
    #[default]
    Analytic,
    /// `|cos|` wave over `(2n - 1)` quarter periods under a Bézier decay envelope.
    /// Ignores `amplitude`.
    Trigonometric,
}

/// A bounce easing curve: parameters, mode and formulation, plus pure evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BounceEase {
    #[serde(default)]
    params: BounceEasingParams,
    #[serde(default)]
    mode: EasingMode,
    #[serde(default)]
    formulation: BounceFormulation,
}

impl BounceEase {
    pub fn new(params: BounceEasingParams, mode: EasingMode) -> Self {
        Self {
            params,
            mode,
            formulation: BounceFormulation::Analytic,
        }
    }

    pub fn with_formulation(mut self, formulation: BounceFormulation) -> Self {
        self.formulation = formulation;
        self
    }

    pub fn with_mode(mut self, mode: EasingMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn params(&self) -> BounceEasingParams {
        self.params
    }

    #[inline]
    pub fn mode(&self) -> EasingMode {
        self.mode
    }

    #[inline]
    pub fn formulation(&self) -> BounceFormulation {
        self.formulation
    }

    /// Eased value for `progress` in [0, 1] under the configured mode.
    ///
    /// Exact at the endpoints (0 → 0, 1 → 1); progress outside [0, 1] saturates.
    #[inline]
    pub fn evaluate(&self, progress: f64) -> f64 {
        self.mode
            .apply(|t| self.ease_in(t), |t| self.ease_out(t), progress)
    }

    /// Launch curve: hops grow and the last arc rises to 1.
    #[inline]
    pub fn ease_in(&self, progress: f64) -> f64 {
        self.height(1.0 - progress)
    }

    /// Settle curve: first touch-down, then decaying rebounds below 1.
    #[inline]
    pub fn ease_out(&self, progress: f64) -> f64 {
        1.0 - self.height(progress)
    }

    /// Normalized displacement above rest: 1 at progress 0, 0 at progress 1.
    pub fn height(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 1.0;
        }
        if progress >= 1.0 {
            return 0.0;
        }
        let h = match self.formulation {
            BounceFormulation::Analytic => analytic_height(progress, &self.params),
            BounceFormulation::Trigonometric => {
                trigonometric_height(progress, self.params.bounce_count())
            }
        };
        h.clamp(0.0, 1.0)
    }

    /// Peak height of each rebound after the drop, in order. Strictly decreasing;
    /// empty when `bounce_count` is 1.
    pub fn apex_heights(&self) -> Vec<f64> {
        let n = self.params.bounce_count();
        match self.formulation {
            BounceFormulation::Analytic => {
                let decay = self.params.decay();
                (1..n).map(|k| decay.powi(k as i32)).collect()
            }
            BounceFormulation::Trigonometric => {
                (1..n).map(|j| envelope(f64::from(j), n)).collect()
            }
        }
    }
}

/// One-shot evaluation without keeping a `BounceEase` around.
pub fn bounce_ease(progress: f64, bounce_count: u32, amplitude: f64, mode: EasingMode) -> f64 {
    BounceEase::new(BounceEasingParams::new(bounce_count, amplitude), mode).evaluate(progress)
}

/// Arc 0 is the drop, written as the second half of a unit-width arc so every arc
/// (drop included) goes through the same lookup. That shifts the time mass by 1/2 and
/// gives `T = sum(r^k, k = 0..n) - 1/2`.
fn analytic_height(progress: f64, params: &BounceEasingParams) -> f64 {
    let n = params.bounce_count();
    let total = geometric_mass(params.decay(), n) - 0.5;
    let mass = progress * total + 0.5;
    let arc = locate_arc(mass, params.amplitude(), n - 1);
    arc.width * parabola(arc.local_time(mass))
}

/// Quarter period 0 is the drop; each following pair of quarter periods is one rebound.
fn trigonometric_height(progress: f64, bounce_count: u32) -> f64 {
    let quarter_periods = f64::from(2 * bounce_count - 1);
    let theta = quarter_periods * FRAC_PI_2 * progress;
    let rebound = ((theta / FRAC_PI_2).floor() / 2.0).ceil();
    envelope(rebound, bounce_count) * theta.cos().abs()
}

fn envelope(rebound: f64, bounce_count: u32) -> f64 {
    let [x1, y1, x2, y2] = ENVELOPE_CONTROL_POINTS;
    1.0 - bezier_ease(rebound / f64::from(bounce_count), x1, y1, x2, y2)
}
