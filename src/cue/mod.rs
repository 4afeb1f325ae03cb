//! Cue command generation.
//!
//! Maps the operator intents CUE-OUT, CUE-IN and CRASH-OUT onto splice
//! insert sections and hands them to the section encoder.

mod command;
mod config;
mod error;
mod generator;
mod sequence;

#[cfg(test)]
mod tests;

pub use command::{CueCommand, CueType};
pub use config::GeneratorConfig;
pub use error::{CueError, CueResult};
pub use generator::{CueGenerator, Scte35Message};
pub use sequence::{DEFAULT_INITIAL_EVENT_ID, EventIdSequence};
