//! Frame-sampled animation player.
//!
//! Model:
//! - A request animates one scalar property from `from` to `to` over `duration_s`.
//! - The timeline is `duration_s * FRAMES_PER_SECOND` frames long; frame `f` samples
//!   progress `f / duration_frames`.
//! - Each sample is `lerp(from, to, curve.ease(progress))`.
//!
//! The easing curve is consulted once per sample and holds no state, so the player is
//! the only place where time advances. Cancelling an animation just stops sampling it.

use serde::{Deserialize, Serialize};

use crate::bounce::BounceEase;
use crate::error::EasingError;
use crate::ids::{AnimId, IdAllocator};
use crate::mode::EasingMode;
use crate::outputs::{Change, EasingEvent, Outputs};

pub const FRAMES_PER_SECOND: f64 = 30.0;

/// Longest timeline `bake` will sample: one hour at `FRAMES_PER_SECOND`.
pub const MAX_BAKED_FRAMES: u32 = 108_000;

/// Accumulated frame times land a hair short of the duration; treat that as done.
const TIME_EPSILON: f64 = 1e-9;

/// Anything the player can sample: progress in [0, 1] to eased value.
pub trait EasingCurve: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn ease(&self, progress: f64) -> f64;
}

impl EasingCurve for BounceEase {
    fn name(&self) -> &str {
        "bounce"
    }

    #[inline]
    fn ease(&self, progress: f64) -> f64 {
        self.evaluate(progress)
    }
}

/// A host-supplied ease-in function registered together with a mode.
///
/// The mode transform is applied around the raw curve: ease-out is its point
/// reflection `1 - f(1 - t)`.
pub struct FnCurve<F> {
    name: String,
    curve: F,
    mode: EasingMode,
}

impl<F> FnCurve<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, curve: F, mode: EasingMode) -> Self {
        Self {
            name: name.into(),
            curve,
            mode,
        }
    }
}

impl<F> EasingCurve for FnCurve<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn ease(&self, progress: f64) -> f64 {
        self.mode.apply(
            |t| (self.curve)(t),
            |t| 1.0 - (self.curve)(1.0 - t),
            progress,
        )
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Immutable description of one animation, captured when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    /// Property value at progress 0 (e.g. the drop height).
    pub from: f64,
    /// Property value at progress 1 (e.g. the rest position).
    pub to: f64,
    pub duration_s: f64,
    #[serde(default)]
    pub ease: BounceEase,
}

impl AnimationRequest {
    pub fn new(from: f64, to: f64, duration_s: f64, ease: BounceEase) -> Self {
        Self {
            from,
            to,
            duration_s,
            ease,
        }
    }

    /// Drop a property from `height` down to 0.
    pub fn drop_from(height: f64, duration_s: f64, ease: BounceEase) -> Self {
        Self::new(height, 0.0, duration_s, ease)
    }

    pub fn validate(&self) -> Result<(), EasingError> {
        validate_span(self.from, self.to, self.duration_s)
    }

    /// Timeline length in frames (not rounded).
    #[inline]
    pub fn duration_frames(&self) -> f64 {
        self.duration_s * FRAMES_PER_SECOND
    }

    #[inline]
    pub fn sample_progress(&self, progress: f64) -> f64 {
        lerp(self.from, self.to, self.ease.evaluate(progress))
    }

    /// Property value at a frame index; frames past the end hold the final value.
    pub fn sample_frame(&self, frame: u32) -> f64 {
        self.sample_progress(frame_progress(frame, self.duration_frames()))
    }
}

fn validate_span(from: f64, to: f64, duration_s: f64) -> Result<(), EasingError> {
    if !from.is_finite() || !to.is_finite() {
        return Err(EasingError::InvalidRequest {
            reason: format!("endpoints must be finite (from={from}, to={to})"),
        });
    }
    if !duration_s.is_finite() || duration_s < 0.0 {
        return Err(EasingError::InvalidRequest {
            reason: format!("duration must be finite and >= 0 (got {duration_s})"),
        });
    }
    Ok(())
}

#[inline]
fn frame_progress(frame: u32, duration_frames: f64) -> f64 {
    if duration_frames <= 0.0 {
        return 1.0;
    }
    (f64::from(frame) / duration_frames).clamp(0.0, 1.0)
}

/// Per-frame samples of one request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedAnimation {
    pub frame_rate: f64,
    pub duration_frames: f64,
    /// One value per frame, inclusive of both ends.
    pub values: Vec<f64>,
}

/// Sample every frame of a request.
///
/// Rejects requests that fail [`AnimationRequest::validate`] and timelines longer than
/// [`MAX_BAKED_FRAMES`].
pub fn bake(request: &AnimationRequest) -> Result<BakedAnimation, EasingError> {
    request.validate()?;
    let duration_frames = request.duration_frames();
    let last_frame = duration_frames.ceil();
    if last_frame > f64::from(MAX_BAKED_FRAMES) {
        return Err(EasingError::InvalidRequest {
            reason: format!(
                "{last_frame} frames exceeds the bake limit of {MAX_BAKED_FRAMES}"
            ),
        });
    }
    // inclusive of end
    let values = (0..=last_frame as u32)
        .map(|f| request.sample_frame(f))
        .collect();
    Ok(BakedAnimation {
        frame_rate: FRAMES_PER_SECOND,
        duration_frames,
        values,
    })
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedAnimation) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}

struct Running {
    id: AnimId,
    from: f64,
    to: f64,
    duration_s: f64,
    elapsed: f64,
    curve: Box<dyn EasingCurve>,
}

impl std::fmt::Debug for Running {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Running")
            .field("id", &self.id)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration_s", &self.duration_s)
            .field("elapsed", &self.elapsed)
            .field("curve", &self.curve.name())
            .finish()
    }
}

/// Hosts any number of independent animations and advances them together.
#[derive(Debug, Default)]
pub struct Player {
    ids: IdAllocator,
    running: Vec<Running>,
    /// Lifecycle events raised between ticks; flushed by the next `update`.
    pending: Vec<EasingEvent>,
    outputs: Outputs,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a bounce animation. The request is copied, so later edits on the caller's
    /// side never reach the running animation.
    pub fn start(&mut self, request: AnimationRequest) -> Result<AnimId, EasingError> {
        self.start_curve(
            request.from,
            request.to,
            request.duration_s,
            Box::new(request.ease),
        )
    }

    /// Start an animation driven by any easing curve.
    pub fn start_curve(
        &mut self,
        from: f64,
        to: f64,
        duration_s: f64,
        curve: Box<dyn EasingCurve>,
    ) -> Result<AnimId, EasingError> {
        if let Err(err) = validate_span(from, to, duration_s) {
            log::warn!("rejected {} animation: {err}", curve.name());
            return Err(err);
        }
        let id = self.ids.alloc_anim();
        log::debug!(
            "start {} animation {:?}: {from} -> {to} over {duration_s}s",
            curve.name(),
            id
        );
        self.running.push(Running {
            id,
            from,
            to,
            duration_s,
            elapsed: 0.0,
            curve,
        });
        self.pending.push(EasingEvent::Started { anim: id });
        Ok(id)
    }

    /// Stop sampling an animation. Returns false if it was not running.
    pub fn cancel(&mut self, id: AnimId) -> bool {
        let before = self.running.len();
        self.running.retain(|r| r.id != id);
        let removed = self.running.len() != before;
        if removed {
            log::debug!("cancel animation {id:?}");
            self.pending.push(EasingEvent::Cancelled { anim: id });
        }
        removed
    }

    pub fn is_running(&self, id: AnimId) -> bool {
        self.running.iter().any(|r| r.id == id)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Advance every running animation by `dt` seconds and sample it once.
    ///
    /// Negative or non-finite `dt` counts as 0. Animations that reach their end emit
    /// their final value, a `Finished` event, and are dropped.
    pub fn update(&mut self, dt: f64) -> &Outputs {
        self.outputs.clear();
        for event in self.pending.drain(..) {
            self.outputs.push_event(event);
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let outputs = &mut self.outputs;
        self.running.retain_mut(|r| {
            r.elapsed += dt;
            let progress = if r.duration_s <= 0.0 || r.elapsed + TIME_EPSILON >= r.duration_s {
                1.0
            } else {
                r.elapsed / r.duration_s
            };
            let value = lerp(r.from, r.to, r.curve.ease(progress));
            outputs.push_change(Change {
                anim: r.id,
                value,
                progress,
            });
            if progress >= 1.0 {
                log::debug!("animation {:?} finished at {value}", r.id);
                outputs.push_event(EasingEvent::Finished {
                    anim: r.id,
                    final_value: value,
                });
                false
            } else {
                true
            }
        });

        &self.outputs
    }
}
