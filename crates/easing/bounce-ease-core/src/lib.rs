//! Bounce easing core (engine-agnostic)
//!
//! Damped bounce easing curves for driving a scalar property (typically a vertical
//! position) from a drop height down to rest. The crate holds the pure evaluator,
//! its helper curves, an immutable UI settings snapshot, and a small frame-sampled
//! player that hosts call once per frame.

pub mod bounce;
pub mod curves;
pub mod error;
pub mod ids;
pub mod mode;
pub mod outputs;
pub mod params;
pub mod player;
pub mod settings;

// Re-exports for consumers (adapters)
pub use bounce::{bounce_ease, BounceEase, BounceFormulation};
pub use error::EasingError;
pub use ids::AnimId;
pub use mode::EasingMode;
pub use outputs::{Change, EasingEvent, Outputs};
pub use params::{BounceEasingParams, MAX_BOUNCE_COUNT, MIN_AMPLITUDE};
pub use player::{
    bake, export_baked_json, AnimationRequest, BakedAnimation, EasingCurve, FnCurve, Player,
    FRAMES_PER_SECOND, MAX_BAKED_FRAMES,
};
pub use settings::{parse_settings_json, BounceSettings, SettingsRanges};
