//! Turns operator cue commands into encoded splice info sections.

use super::command::{CueCommand, CueType};
use super::config::GeneratorConfig;
use super::error::{CueError, CueResult};
use super::sequence::EventIdSequence;
use crate::builders::{BuilderError, SpliceInfoSectionBuilder, SpliceInsertBuilder};
use crate::encoding::encode_section_with;
use crate::time::{ClockTimeExt, PTS_MAX};
use crate::types::SpliceInfoSection;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Pre-roll range operators are expected to stay within.
const PRE_ROLL_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// The result of generating a cue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Scte35Message {
    /// Encoded section, CRC included
    pub bytes: Vec<u8>,
    /// Standard padded Base64 of `bytes`
    pub base64: String,
    /// Uppercase hex of `bytes`
    pub hex: String,
    /// The splice event id written into the section
    pub event_id: u32,
    /// The command, with its event id and timestamp resolved
    pub command: CueCommand,
    /// Operator time as RFC 3339
    pub timestamp: String,
    /// The section that was encoded
    #[cfg_attr(feature = "serde", serde(skip))]
    pub section: SpliceInfoSection,
}

/// Generates CUE-OUT, CUE-IN and CRASH-OUT sections.
///
/// Each generator owns its event id sequence; share one generator (it is
/// `Sync`) between the tasks of a session so their ids never collide.
///
/// # Examples
///
/// ```rust
/// use scte35_cue::{CueCommand, CueGenerator};
///
/// let generator = CueGenerator::default();
/// let message = generator.generate(&CueCommand::crash_out()).unwrap();
/// assert_eq!(message.event_id, 100_023);
/// assert_eq!(message.bytes.len(), 32);
/// ```
#[derive(Debug, Default)]
pub struct CueGenerator {
    config: GeneratorConfig,
    sequence: EventIdSequence,
}

/// Tick values derived from a command before an event id is allocated.
struct CueTiming {
    splice_ticks: u64,
    break_ticks: Option<u64>,
    /// Break length in seconds after the configured default is applied
    ad_duration: Option<f64>,
}

impl CueGenerator {
    /// Creates a generator whose sequence starts at `config.initial_event_id`.
    pub fn new(config: GeneratorConfig) -> Self {
        let sequence = EventIdSequence::new(config.initial_event_id);
        Self { config, sequence }
    }

    /// The configuration this generator was created with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The event id sequence, for inspection or an operator reset.
    pub fn sequence(&self) -> &EventIdSequence {
        &self.sequence
    }

    /// Generates and encodes a cue.
    ///
    /// The operator time is `command.timestamp`, or the wall clock when the
    /// command has none. An event id is drawn from the sequence only when the
    /// command carries none and the command is otherwise valid.
    pub fn generate(&self, command: &CueCommand) -> CueResult<Scte35Message> {
        let now = command.timestamp.unwrap_or_else(Utc::now);

        if let Some(pre_roll) = command.pre_roll_duration {
            if !PRE_ROLL_RANGE.contains(&pre_roll) {
                warn!(pre_roll, cue_type = %command.cue_type, "pre-roll outside 0-10 seconds");
            }
        }

        let timing = self.timing(command, now)?;
        let event_id = match command.event_id {
            Some(event_id) => event_id,
            None => {
                let event_id = self.sequence.next();
                debug!(event_id, "allocated splice event id");
                event_id
            }
        };

        let section = self.section(command.cue_type, event_id, &timing)?;
        let encoded = encode_section_with(&section, self.config.encode)?;

        info!(
            cue_type = %command.cue_type,
            event_id,
            len = encoded.bytes.len(),
            "generated cue"
        );

        Ok(Scte35Message {
            bytes: encoded.bytes,
            base64: encoded.base64,
            hex: encoded.hex,
            event_id,
            command: CueCommand {
                event_id: Some(event_id),
                ad_duration: timing.ad_duration.or(command.ad_duration),
                timestamp: Some(now),
                ..command.clone()
            },
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            section,
        })
    }

    fn timing(&self, command: &CueCommand, now: DateTime<Utc>) -> CueResult<CueTiming> {
        let splice_ticks = wall_clock_ticks(now)?;

        let (break_ticks, ad_duration) = match command.cue_type {
            CueType::CueOut => {
                let seconds = command
                    .ad_duration
                    .unwrap_or(self.config.default_ad_duration_secs);
                let duration = Duration::try_from_secs_f64(seconds).map_err(|_| {
                    CueError::InvalidDuration {
                        field: "ad_duration",
                        value: seconds,
                    }
                })?;
                let ticks = duration.as_90k();
                if ticks > PTS_MAX {
                    return Err(BuilderError::DurationTooLarge {
                        field: "ad_duration",
                        duration,
                    }
                    .into());
                }
                (Some(ticks), Some(seconds))
            }
            CueType::CueIn | CueType::CrashOut => (None, None),
        };

        Ok(CueTiming {
            splice_ticks,
            break_ticks,
            ad_duration,
        })
    }

    fn section(
        &self,
        cue_type: CueType,
        event_id: u32,
        timing: &CueTiming,
    ) -> CueResult<SpliceInfoSection> {
        let insert = SpliceInsertBuilder::new(event_id)
            .unique_program_id(self.config.unique_program_id)
            .avail(0, 0);

        let insert = match cue_type {
            CueType::CueOut => {
                let mut insert = insert.out_of_network(true).at_ticks(timing.splice_ticks);
                if let Some(ticks) = timing.break_ticks {
                    insert = insert.duration_ticks(ticks).auto_return(true);
                }
                insert
            }
            CueType::CueIn => insert.out_of_network(false).at_ticks(timing.splice_ticks),
            CueType::CrashOut => insert.out_of_network(false).immediate(),
        };

        Ok(SpliceInfoSectionBuilder::new()
            .pts_adjustment(0)
            .cw_index(0xFF)
            .tier(0xFFF)
            .splice_insert(insert.build()?)
            .build()?)
    }
}

/// Current position of the 90 kHz clock, which wraps every 2^33 ticks.
fn wall_clock_ticks(now: DateTime<Utc>) -> CueResult<u64> {
    let secs = u64::try_from(now.timestamp())
        .map_err(|_| CueError::TimeBeforeEpoch(now.to_rfc3339()))?;
    let since_epoch = Duration::new(secs, now.timestamp_subsec_nanos());
    Ok(since_epoch.as_90k() & PTS_MAX)
}
