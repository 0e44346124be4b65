//! Error types for settings, mode parsing and player requests.
//!
//! The evaluator itself never fails: out-of-range parameters are clamped. These
//! errors only surface at the configuration boundary (JSON documents, UI snapshots,
//! host requests).

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Easing mode name not recognised
    #[error("Unknown easing mode: {name}")]
    UnknownMode { name: String },

    /// A settings field is outside its UI range
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Settings document could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Animation request rejected by the player
    #[error("Invalid animation request: {reason}")]
    InvalidRequest { reason: String },
}

impl EasingError {
    pub(crate) fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

impl From<serde_json::Error> for EasingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
