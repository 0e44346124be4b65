//! Helper curves shared by the bounce formulations:
//! - cubic Bézier basis and CSS-style timing lookup (used by the trigonometric envelope)
//! - closed-form geometric series ("time mass") and its logarithmic inverse
//! - the unit parabola used for a single arc

/// Cubic Bézier basis function.
#[inline]
pub fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
pub fn bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut mid = t;
    for _ in 0..48 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-12 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

/// Sum of `decay^k` for `k` in `0..arcs`, in closed form.
///
/// `decay` must lie in (0, 1); callers get that from `BounceEasingParams::decay`.
#[inline]
pub fn geometric_mass(decay: f64, arcs: u32) -> f64 {
    (1.0 - decay.powi(arcs as i32)) / (1.0 - decay)
}

/// Where a time-mass coordinate falls among a sequence of geometrically shrinking arcs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcPosition {
    /// Arc index, 0 for the first (widest) arc.
    pub index: u32,
    /// Time mass at which the arc begins.
    pub start: f64,
    /// Time mass covered by the arc, `amplitude^-index`.
    pub width: f64,
}

impl ArcPosition {
    /// Normalized time inside the arc, -1 at its start, 0 at its apex, 1 at its end.
    #[inline]
    pub fn local_time(&self, mass: f64) -> f64 {
        (2.0 * (mass - self.start) / self.width - 1.0).clamp(-1.0, 1.0)
    }
}

/// Find the arc containing `mass` without walking the arcs.
///
/// Arc `k` spans `[C(k), C(k + 1))` with `C(k) = (1 - r^k) / (1 - r)` and
/// `r = 1 / amplitude`. Solving `C(x) = mass` gives `r^x = 1 - mass (1 - r)`, so the
/// continuous arc index is `-log_amplitude(1 - mass (1 - r))`; its floor is the arc.
/// The result is clamped to `max_index`.
pub fn locate_arc(mass: f64, amplitude: f64, max_index: u32) -> ArcPosition {
    let decay = amplitude.recip();
    let remaining = 1.0 - mass * (1.0 - decay);
    let index = if remaining <= 0.0 {
        max_index
    } else {
        let continuous = -remaining.log(amplitude);
        if continuous > 0.0 {
            // Saturating cast: +inf lands on u32::MAX before the clamp.
            (continuous.floor() as u32).min(max_index)
        } else {
            0
        }
    };
    ArcPosition {
        index,
        start: geometric_mass(decay, index),
        width: decay.powi(index as i32),
    }
}

/// Unit parabola through (-1, 0), (0, 1), (1, 0).
#[inline]
pub fn parabola(u: f64) -> f64 {
    1.0 - u * u
}
