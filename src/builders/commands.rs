//! Builders for SCTE-35 splice commands.

use super::error::{BuilderError, BuilderResult};
use crate::time::{BreakDuration, ClockTimeExt, PTS_MAX, SpliceTime};
use crate::types::{SpliceInsert, TimeSignal};
use std::time::Duration;

/// A point in time given either as a wall duration or as raw ticks.
#[derive(Clone, Copy, Debug)]
enum Timing {
    Duration(Duration),
    Ticks(u64),
}

impl Timing {
    fn to_ticks(self, field: &'static str) -> BuilderResult<u64> {
        match self {
            Timing::Duration(duration) => {
                let ticks = duration.as_90k();
                if ticks > PTS_MAX {
                    return Err(BuilderError::DurationTooLarge { field, duration });
                }
                Ok(ticks)
            }
            Timing::Ticks(ticks) if ticks > PTS_MAX => {
                Err(BuilderError::TicksTooLarge { field, ticks })
            }
            Timing::Ticks(ticks) => Ok(ticks),
        }
    }
}

/// Builder for creating splice insert commands.
///
/// The builder keeps `duration_flag` and `splice_immediate_flag` in step with
/// the break duration and splice time it is given.
#[derive(Debug)]
pub struct SpliceInsertBuilder {
    splice_event_id: u32,
    cancel: bool,
    out_of_network: bool,
    program_splice: bool,
    splice_immediate: bool,
    splice_time: Option<Timing>,
    duration: Option<Timing>,
    auto_return: bool,
    unique_program_id: u16,
    avail_num: u8,
    avails_expected: u8,
}

impl SpliceInsertBuilder {
    /// Create a new splice insert builder with the given event ID.
    pub fn new(splice_event_id: u32) -> Self {
        Self {
            splice_event_id,
            cancel: false,
            out_of_network: true,
            program_splice: true,
            splice_immediate: false,
            splice_time: None,
            duration: None,
            auto_return: true,
            unique_program_id: 0,
            avail_num: 0,
            avails_expected: 0,
        }
    }

    /// Mark this event as cancelled.
    pub fn cancel_event(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Set whether the splice is out of network.
    pub fn out_of_network(mut self, out: bool) -> Self {
        self.out_of_network = out;
        self
    }

    /// Set the splice to occur immediately.
    pub fn immediate(mut self) -> Self {
        self.splice_immediate = true;
        self.splice_time = None;
        self
    }

    /// Set the splice to occur at a specific PTS time.
    pub fn at_pts(mut self, pts_time: Duration) -> Self {
        self.splice_immediate = false;
        self.splice_time = Some(Timing::Duration(pts_time));
        self
    }

    /// Set the splice to occur at a PTS given in 90kHz ticks.
    pub fn at_ticks(mut self, ticks: u64) -> Self {
        self.splice_immediate = false;
        self.splice_time = Some(Timing::Ticks(ticks));
        self
    }

    /// Set the duration of the break.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(Timing::Duration(duration));
        self
    }

    /// Set the duration of the break in 90kHz ticks.
    pub fn duration_ticks(mut self, ticks: u64) -> Self {
        self.duration = Some(Timing::Ticks(ticks));
        self
    }

    /// Set whether the break should auto-return.
    pub fn auto_return(mut self, auto_return: bool) -> Self {
        self.auto_return = auto_return;
        self
    }

    /// Set the unique program ID.
    pub fn unique_program_id(mut self, id: u16) -> Self {
        self.unique_program_id = id;
        self
    }

    /// Set the avail number and expected count.
    pub fn avail(mut self, num: u8, expected: u8) -> Self {
        self.avail_num = num;
        self.avails_expected = expected;
        self
    }

    /// Build the splice insert command.
    ///
    /// A non-immediate splice without an explicit time gets an unspecified
    /// splice time.
    pub fn build(self) -> BuilderResult<SpliceInsert> {
        let splice_time = if self.program_splice && !self.splice_immediate {
            let pts_time = self
                .splice_time
                .map(|timing| timing.to_ticks("splice_time"))
                .transpose()?;
            Some(SpliceTime { pts_time })
        } else {
            None
        };

        let break_duration = self
            .duration
            .map(|timing| timing.to_ticks("duration"))
            .transpose()?
            .map(|duration| BreakDuration {
                auto_return: self.auto_return,
                duration,
            });

        Ok(SpliceInsert {
            splice_event_id: self.splice_event_id,
            splice_event_cancel_indicator: self.cancel,
            out_of_network_indicator: self.out_of_network,
            program_splice_flag: self.program_splice,
            duration_flag: break_duration.is_some(),
            splice_immediate_flag: self.splice_immediate,
            splice_time,
            break_duration,
            unique_program_id: self.unique_program_id,
            avail_num: self.avail_num,
            avails_expected: self.avails_expected,
        })
    }
}

/// Builder for creating time signal commands.
#[derive(Debug, Default)]
pub struct TimeSignalBuilder {
    pts_time: Option<Timing>,
}

impl TimeSignalBuilder {
    /// Create a new time signal builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time signal to occur immediately.
    pub fn immediate(mut self) -> Self {
        self.pts_time = None;
        self
    }

    /// Set the time signal to occur at a specific PTS time.
    pub fn at_pts(mut self, pts_time: Duration) -> Self {
        self.pts_time = Some(Timing::Duration(pts_time));
        self
    }

    /// Set the time signal PTS in 90kHz ticks.
    pub fn at_ticks(mut self, ticks: u64) -> Self {
        self.pts_time = Some(Timing::Ticks(ticks));
        self
    }

    /// Build the time signal command.
    pub fn build(self) -> BuilderResult<TimeSignal> {
        let pts_time = self
            .pts_time
            .map(|timing| timing.to_ticks("pts_time"))
            .transpose()?;

        Ok(TimeSignal {
            splice_time: SpliceTime { pts_time },
        })
    }
}
