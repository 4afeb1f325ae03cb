//! Time-related structures for SCTE-35 messages.
//!
//! All timestamps and durations are expressed in ticks of the 90 kHz MPEG
//! system clock and occupy 33 bits on the wire.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ticks per second of the 90 kHz presentation clock.
pub const TICKS_PER_SECOND: u64 = 90_000;

/// Largest value representable in a 33-bit PTS field.
pub const PTS_MAX: u64 = 0x1_FFFF_FFFF;

/// Represents a splice time with an optional PTS (Presentation Time Stamp).
///
/// When `pts_time` is `None` the time is unspecified and the splice happens
/// at the next opportunity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpliceTime {
    /// Presentation timestamp in 90kHz ticks (33-bit)
    #[cfg_attr(feature = "serde", serde(default))]
    pub pts_time: Option<u64>,
}

impl SpliceTime {
    /// A splice time with no PTS.
    pub fn immediate() -> Self {
        Self { pts_time: None }
    }

    /// A splice time at the given tick count.
    pub fn from_ticks(ticks: u64) -> Self {
        Self {
            pts_time: Some(ticks),
        }
    }

    /// Whether the `time_specified_flag` is set on the wire.
    pub fn time_specified(&self) -> bool {
        self.pts_time.is_some()
    }

    /// Converts the PTS to a [`Duration`], if specified.
    pub fn to_duration(&self) -> Option<Duration> {
        self.pts_time.map(ticks_to_duration)
    }
}

/// Represents the duration of a commercial break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreakDuration {
    /// Whether the splicer returns to the network automatically when the
    /// duration elapses.
    pub auto_return: bool,
    /// Duration in 90kHz ticks (33-bit)
    pub duration: u64,
}

impl BreakDuration {
    /// Converts the break duration to a [`Duration`].
    pub fn to_duration(&self) -> Duration {
        ticks_to_duration(self.duration)
    }
}

/// Conversion of wall-clock quantities into 90 kHz ticks.
pub trait ClockTimeExt {
    /// Number of 90 kHz ticks, truncated toward zero and saturating at
    /// `u64::MAX`.
    fn as_90k(&self) -> u64;
}

impl ClockTimeExt for Duration {
    fn as_90k(&self) -> u64 {
        self.as_secs()
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(u64::from(self.subsec_nanos()) * TICKS_PER_SECOND / 1_000_000_000)
    }
}

/// Converts ticks into a [`Duration`].
pub fn ticks_to_duration(ticks: u64) -> Duration {
    let secs = ticks / TICKS_PER_SECOND;
    let nanos = (ticks % TICKS_PER_SECOND) * 1_000_000_000 / TICKS_PER_SECOND;
    Duration::new(secs, nanos as u32)
}
