//! Generator configuration.

use super::sequence::DEFAULT_INITIAL_EVENT_ID;
use crate::encoding::EncodeOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of a [`CueGenerator`](super::CueGenerator).
///
/// Every field has a default, so a partial JSON document is accepted:
///
/// ```json
/// { "initial_event_id": 5000, "encode": { "overflow_bit": "always_clear" } }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// First event id handed out when a command carries none
    pub initial_event_id: u32,
    /// Break length used by CUE-OUT when the command has none
    pub default_ad_duration_secs: f64,
    /// `unique_program_id` written into every splice insert
    pub unique_program_id: u16,
    /// Options forwarded to the section encoder
    pub encode: EncodeOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_event_id: DEFAULT_INITIAL_EVENT_ID,
            default_ad_duration_secs: 600.0,
            unique_program_id: 1,
            encode: EncodeOptions::default(),
        }
    }
}

#[cfg(feature = "serde")]
impl GeneratorConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> super::CueResult<Self> {
        serde_json::from_str(json).map_err(|e| super::CueError::Config(e.to_string()))
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> super::CueResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| super::CueError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}
