//! Output contracts from the player.
//!
//! Outputs carry the sampled property value of every running animation for this
//! tick and a separate list of lifecycle events. Adapters (web/engine) apply the
//! changes to the host scene and transport the events.

use serde::{Deserialize, Serialize};

use crate::ids::AnimId;

/// One sampled property value for a running animation this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub anim: AnimId,
    /// Interpolated property value (`from` → `to` weighted by the eased progress).
    pub value: f64,
    /// Linear progress in [0, 1] that was fed to the easing curve.
    pub progress: f64,
}

/// Discrete lifecycle signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingEvent {
    Started { anim: AnimId },
    Finished { anim: AnimId, final_value: f64 },
    Cancelled { anim: AnimId },
}

/// Outputs returned by `Player::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<EasingEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: EasingEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Latest change for one animation, if it produced one this tick.
    pub fn change_for(&self, anim: AnimId) -> Option<&Change> {
        self.changes.iter().find(|c| c.anim == anim)
    }
}
