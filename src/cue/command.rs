//! Operator-level cue commands.

use super::error::CueError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three operational intents an operator can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum CueType {
    /// Leave network programming for an ad break.
    CueOut,
    /// Return to network programming at the current time.
    CueIn,
    /// Return to network programming immediately.
    CrashOut,
}

impl CueType {
    /// Wire name of the cue type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueType::CueOut => "CUE-OUT",
            CueType::CueIn => "CUE-IN",
            CueType::CrashOut => "CRASH-OUT",
        }
    }
}

impl fmt::Display for CueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CueType {
    type Err = CueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUE-OUT" => Ok(CueType::CueOut),
            "CUE-IN" => Ok(CueType::CueIn),
            "CRASH-OUT" => Ok(CueType::CrashOut),
            other => Err(CueError::UnsupportedCommand(other.to_string())),
        }
    }
}

impl TryFrom<String> for CueType {
    type Error = CueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CueType> for String {
    fn from(value: CueType) -> Self {
        value.as_str().to_string()
    }
}

/// A cue request as issued by an operator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CueCommand {
    /// What the operator wants to happen
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub cue_type: CueType,
    /// Explicit splice event id; drawn from the generator's sequence if absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub event_id: Option<u32>,
    /// Break length in seconds (CUE-OUT only)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ad_duration: Option<f64>,
    /// Pre-roll in seconds, expected within 0..=10; carried, not encoded
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pre_roll_duration: Option<f64>,
    /// Operator time; the wall clock is used if absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CueCommand {
    /// A command of the given type with every optional field unset.
    pub fn new(cue_type: CueType) -> Self {
        Self {
            cue_type,
            event_id: None,
            ad_duration: None,
            pre_roll_duration: None,
            timestamp: None,
        }
    }

    /// A CUE-OUT; the configured default break length applies when
    /// `ad_duration` is `None`.
    pub fn cue_out(ad_duration: Option<f64>) -> Self {
        Self {
            ad_duration,
            ..Self::new(CueType::CueOut)
        }
    }

    /// A CUE-IN at the operator time.
    pub fn cue_in() -> Self {
        Self::new(CueType::CueIn)
    }

    /// An immediate return to network programming.
    pub fn crash_out() -> Self {
        Self::new(CueType::CrashOut)
    }

    /// Uses `event_id` instead of drawing one from the sequence.
    pub fn with_event_id(mut self, event_id: u32) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Sets the pre-roll in seconds.
    pub fn with_pre_roll(mut self, seconds: f64) -> Self {
        self.pre_roll_duration = Some(seconds);
        self
    }

    /// Sets the operator time.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
