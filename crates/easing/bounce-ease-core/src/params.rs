//! Construction parameters of the bounce evaluator.

use serde::{Deserialize, Serialize};

/// Replacement decay ratio for amplitudes at or below 1 (and NaN), applied before any
/// `log`/power operation runs. Ratios just above 1 are kept as given.
pub const MIN_AMPLITUDE: f64 = 1.001;

/// Upper clamp on the bounce count; keeps `decay^n` well inside f64 range.
pub const MAX_BOUNCE_COUNT: u32 = 64;

pub const DEFAULT_BOUNCE_COUNT: u32 = 3;
pub const DEFAULT_AMPLITUDE: f64 = 5.0;

/// Immutable `{bounce_count, amplitude}` pair.
///
/// `bounce_count` counts arcs with the drop as the first one, so a curve rebounds
/// `bounce_count - 1` times.
///
/// `amplitude` is the geometric decay ratio between successive rebounds: rebound `k`
/// peaks at `amplitude^-k` of the drop height and lasts `amplitude^-k` of the drop's
/// full-arc time. It is not a distance; the displacement of the animated property is
/// carried separately by the host (see `AnimationRequest`).
///
/// Deserialization goes through the same clamp as [`BounceEasingParams::new`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParams", into = "RawParams")]
pub struct BounceEasingParams {
    bounce_count: u32,
    amplitude: f64,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawParams {
    #[serde(default = "default_bounce_count", alias = "bounces", alias = "bounceCount")]
    bounce_count: u32,
    #[serde(default = "default_amplitude")]
    amplitude: f64,
}

fn default_bounce_count() -> u32 {
    DEFAULT_BOUNCE_COUNT
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

impl From<RawParams> for BounceEasingParams {
    fn from(raw: RawParams) -> Self {
        Self::new(raw.bounce_count, raw.amplitude)
    }
}

impl From<BounceEasingParams> for RawParams {
    fn from(params: BounceEasingParams) -> Self {
        Self {
            bounce_count: params.bounce_count,
            amplitude: params.amplitude,
        }
    }
}

impl BounceEasingParams {
    /// Build parameters, clamping silently into the valid domain.
    pub fn new(bounce_count: u32, amplitude: f64) -> Self {
        let clamped_count = bounce_count.clamp(1, MAX_BOUNCE_COUNT);
        if clamped_count != bounce_count {
            log::debug!("bounce_count {bounce_count} clamped to {clamped_count}");
        }
        // NaN fails the comparison and lands on the minimum as well.
        let clamped_amplitude = if amplitude > 1.0 {
            amplitude
        } else {
            MIN_AMPLITUDE
        };
        if clamped_amplitude != amplitude {
            log::debug!("amplitude {amplitude} clamped to {clamped_amplitude}");
        }
        Self {
            bounce_count: clamped_count,
            amplitude: clamped_amplitude,
        }
    }

    #[inline]
    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Height/time ratio between successive arcs, `1 / amplitude`, always in (0, 1).
    #[inline]
    pub fn decay(&self) -> f64 {
        self.amplitude.recip()
    }
}

impl Default for BounceEasingParams {
    fn default() -> Self {
        Self {
            bounce_count: DEFAULT_BOUNCE_COUNT,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}
