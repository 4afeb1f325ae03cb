//! Tests for cue generation.

use super::*;
use crate::builders::BuilderError;
use crate::crc::validate_message_crc;
use crate::encoding::{EncodeOptions, OverflowBitMode};
use crate::time::SpliceTime;
use crate::types::{SpliceCommand, SpliceInsert};
use chrono::{TimeZone, Utc};
use data_encoding::{BASE64, HEXUPPER};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

/// 2024-01-01T00:00:00Z on the wrapped 90 kHz clock.
const MIDNIGHT_TICKS: u64 = 0x50CF_C800;

fn midnight() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn insert_of(message: &Scte35Message) -> &SpliceInsert {
    match &message.section.splice_command {
        SpliceCommand::SpliceInsert(insert) => insert,
        other => panic!("expected splice insert, got {other:?}"),
    }
}

fn command_length(bytes: &[u8]) -> usize {
    (((bytes[13] & 0x0F) as usize) << 8) | bytes[14] as usize
}

#[test]
fn test_cue_out_golden_bytes() {
    let generator = CueGenerator::default();
    let command = CueCommand::cue_out(Some(600.0)).with_event_id(100_023).at(midnight());
    let message = generator.generate(&command).unwrap();

    assert_eq!(
        message.hex,
        "FC30F028000000000000FFFFFFF015050000000186B700E0800050CFC800800337F9800001000049F6B296"
    );
    assert_eq!(message.base64, "/DDwKAAAAAAAAP////AVBQAAAAGGtwDggABQz8gAgAM3+YAAAQAASfaylg==");
    assert_eq!(message.event_id, 100_023);
}

#[test]
fn test_cue_out_fields() {
    let generator = CueGenerator::default();
    let command = CueCommand::cue_out(Some(600.0)).with_event_id(100_023).at(midnight());
    let message = generator.generate(&command).unwrap();
    let insert = insert_of(&message);

    assert!(insert.out_of_network_indicator);
    assert!(insert.program_splice_flag);
    assert!(insert.duration_flag);
    assert!(!insert.splice_immediate_flag);
    assert!(!insert.splice_event_cancel_indicator);
    assert_eq!(insert.splice_time, Some(SpliceTime::from_ticks(MIDNIGHT_TICKS)));
    let break_duration = insert.break_duration.unwrap();
    assert!(break_duration.auto_return);
    assert_eq!(break_duration.duration, 54_000_000);
    assert_eq!(insert.unique_program_id, 1);
    assert_eq!(insert.avail_num, 0);
    assert_eq!(insert.avails_expected, 0);

    let section = &message.section;
    assert_eq!(section.table_id, 0xFC);
    assert!(!section.section_syntax_indicator);
    assert!(!section.private_indicator);
    assert_eq!(section.protocol_version, 0);
    assert!(!section.encrypted_packet);
    assert_eq!(section.pts_adjustment, 0);
    assert_eq!(section.cw_index, 0xFF);
    assert_eq!(section.tier, 0xFFF);
    assert_eq!(section.splice_command_type(), 5);
    assert!(section.splice_descriptors.is_empty());
}

#[test]
fn test_cue_out_default_duration() {
    let generator = CueGenerator::default();
    let message = generator
        .generate(&CueCommand::cue_out(None).at(midnight()))
        .unwrap();
    assert_eq!(insert_of(&message).break_duration.unwrap().duration, 600 * 90_000);
    assert_eq!(message.command.ad_duration, Some(600.0));
}

#[test]
fn test_cue_out_fractional_duration() {
    let generator = CueGenerator::default();
    let message = generator
        .generate(&CueCommand::cue_out(Some(30.5)).at(midnight()))
        .unwrap();
    assert_eq!(insert_of(&message).break_duration.unwrap().duration, 2_745_000);
}

#[test]
fn test_cue_in() {
    let generator = CueGenerator::default();
    let command = CueCommand::cue_in().with_event_id(100_024).at(midnight());
    let message = generator.generate(&command).unwrap();
    let insert = insert_of(&message);

    assert!(!insert.duration_flag);
    assert!(insert.break_duration.is_none());
    assert!(!insert.out_of_network_indicator);
    assert!(!insert.splice_immediate_flag);
    assert_eq!(insert.splice_time, Some(SpliceTime::from_ticks(MIDNIGHT_TICKS)));
    assert_eq!(
        message.hex,
        "FC30F023000000000000FFFFFFF010050000000186B80040800050CFC80000010000C5E085AC"
    );
    // event id + cancel + flags + splice time + program id/avails
    assert_eq!(command_length(&message.bytes), 16);
}

#[test]
fn test_cue_in_ignores_ad_duration() {
    let generator = CueGenerator::default();
    let mut command = CueCommand::cue_in().at(midnight());
    command.ad_duration = Some(120.0);
    let message = generator.generate(&command).unwrap();
    assert!(insert_of(&message).break_duration.is_none());
}

#[test]
fn test_crash_out_omits_splice_time() {
    let generator = CueGenerator::default();
    let crash = generator
        .generate(&CueCommand::crash_out().with_event_id(100_025).at(midnight()))
        .unwrap();
    let cue_in = generator
        .generate(&CueCommand::cue_in().with_event_id(100_025).at(midnight()))
        .unwrap();

    let insert = insert_of(&crash);
    assert!(insert.splice_immediate_flag);
    assert!(insert.splice_time.is_none());
    assert_eq!(
        crash.hex,
        "FC30F01D000000000000FFFFFFF00A050000000186B900500001000035AC951A"
    );
    // the 6-byte splice time is the only difference
    assert_eq!(command_length(&crash.bytes), 10);
    assert_eq!(cue_in.bytes.len() - crash.bytes.len(), 6);
}

#[test]
fn test_auto_assigned_ids() {
    let generator = CueGenerator::default();
    let first = generator.generate(&CueCommand::cue_out(None)).unwrap();
    let explicit = generator
        .generate(&CueCommand::cue_in().with_event_id(42))
        .unwrap();
    let second = generator.generate(&CueCommand::crash_out()).unwrap();

    assert_eq!(first.event_id, 100_023);
    assert_eq!(explicit.event_id, 42);
    assert_eq!(second.event_id, 100_024);
    assert_eq!(generator.sequence().peek(), 100_025);
    assert_eq!(&second.bytes[18..22], &100_024u32.to_be_bytes());
}

#[test]
fn test_configured_seed_and_reset() {
    let generator = CueGenerator::new(GeneratorConfig {
        initial_event_id: 7,
        ..GeneratorConfig::default()
    });
    assert_eq!(generator.generate(&CueCommand::crash_out()).unwrap().event_id, 7);
    generator.sequence().reset(1_000);
    assert_eq!(generator.generate(&CueCommand::crash_out()).unwrap().event_id, 1_000);
}

#[test]
fn test_invalid_duration_does_not_consume_id() {
    let generator = CueGenerator::default();
    let err = generator
        .generate(&CueCommand::cue_out(Some(-1.0)))
        .unwrap_err();
    assert!(matches!(err, CueError::InvalidDuration { field: "ad_duration", .. }));

    let err = generator
        .generate(&CueCommand::cue_out(Some(f64::NAN)))
        .unwrap_err();
    assert!(matches!(err, CueError::InvalidDuration { .. }));

    let err = generator
        .generate(&CueCommand::cue_out(Some(200_000.0)))
        .unwrap_err();
    assert!(matches!(err, CueError::Builder(_)));

    assert_eq!(generator.sequence().peek(), DEFAULT_INITIAL_EVENT_ID);
}

#[test]
fn test_huge_ad_duration_is_rejected() {
    let generator = CueGenerator::default();
    for seconds in [1e15, 1e19] {
        let err = generator
            .generate(&CueCommand::cue_out(Some(seconds)).at(midnight()))
            .unwrap_err();
        assert!(
            matches!(
                err,
                CueError::Builder(BuilderError::DurationTooLarge { field: "ad_duration", .. })
            ),
            "{seconds}: {err:?}"
        );
    }
    assert_eq!(generator.sequence().peek(), DEFAULT_INITIAL_EVENT_ID);
}

#[test]
fn test_time_before_epoch() {
    let generator = CueGenerator::default();
    let before = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap();
    let err = generator
        .generate(&CueCommand::cue_in().at(before))
        .unwrap_err();
    assert!(matches!(err, CueError::TimeBeforeEpoch(_)));
}

#[test]
fn test_wall_clock_wraps_into_overflow_bit() {
    let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let command = CueCommand::cue_in().with_event_id(1).at(noon);

    let message = CueGenerator::default().generate(&command).unwrap();
    assert_eq!(
        insert_of(&message).splice_time,
        Some(SpliceTime::from_ticks(0x1_388D_F400))
    );
    // splice time starts after event id, cancel byte and flags byte
    assert_eq!(&message.bytes[24..30], &[0x80, 0x01, 0x38, 0x8D, 0xF4, 0x00]);

    let legacy = CueGenerator::new(GeneratorConfig {
        encode: EncodeOptions {
            overflow_bit: OverflowBitMode::AlwaysClear,
            ..EncodeOptions::default()
        },
        ..GeneratorConfig::default()
    });
    let message = legacy.generate(&command).unwrap();
    assert_eq!(&message.bytes[24..30], &[0x80, 0x00, 0x38, 0x8D, 0xF4, 0x00]);
    assert!(validate_message_crc(&message.bytes).unwrap());
}

#[test]
fn test_strict_generation_succeeds() {
    let generator = CueGenerator::new(GeneratorConfig {
        encode: EncodeOptions::strict(),
        ..GeneratorConfig::default()
    });
    let message = generator.generate(&CueCommand::cue_out(Some(60.0))).unwrap();
    assert!(validate_message_crc(&message.bytes).unwrap());
}

#[test]
fn test_message_views_agree() {
    let generator = CueGenerator::default();
    for command in [
        CueCommand::cue_out(Some(90.0)),
        CueCommand::cue_in(),
        CueCommand::crash_out(),
    ] {
        let message = generator.generate(&command).unwrap();
        assert_eq!(BASE64.decode(message.base64.as_bytes()).unwrap(), message.bytes);
        assert_eq!(HEXUPPER.decode(message.hex.as_bytes()).unwrap(), message.bytes);
        assert!(validate_message_crc(&message.bytes).unwrap());
    }
}

#[test]
fn test_echoed_command_and_timestamp() {
    let generator = CueGenerator::default();
    let command = CueCommand::cue_out(Some(30.0)).with_pre_roll(4.0).at(midnight());
    let message = generator.generate(&command).unwrap();

    assert_eq!(message.timestamp, "2024-01-01T00:00:00.000Z");
    assert_eq!(message.command.cue_type, CueType::CueOut);
    assert_eq!(message.command.event_id, Some(message.event_id));
    assert_eq!(message.command.pre_roll_duration, Some(4.0));
    assert_eq!(message.command.timestamp, Some(midnight()));
}

#[test]
fn test_pre_roll_is_not_enforced() {
    let generator = CueGenerator::default();
    let message = generator
        .generate(&CueCommand::cue_out(None).with_pre_roll(25.0))
        .unwrap();
    assert_eq!(message.command.pre_roll_duration, Some(25.0));
}

#[test]
fn test_cue_type_parsing() {
    assert_eq!("CUE-OUT".parse::<CueType>().unwrap(), CueType::CueOut);
    assert_eq!("CUE-IN".parse::<CueType>().unwrap(), CueType::CueIn);
    assert_eq!("CRASH-OUT".parse::<CueType>().unwrap(), CueType::CrashOut);
    assert_eq!(CueType::CrashOut.to_string(), "CRASH-OUT");

    for bad in ["cue-out", "CUE_OUT", "SPLICE", ""] {
        match bad.parse::<CueType>() {
            Err(CueError::UnsupportedCommand(value)) => assert_eq!(value, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn test_concurrent_generation_unique_ids() {
    let generator = Arc::new(CueGenerator::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..50)
                    .map(|_| generator.generate(&CueCommand::crash_out()).unwrap().event_id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(ids.len(), 200);
    assert_eq!(generator.sequence().peek(), DEFAULT_INITIAL_EVENT_ID + 200);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_command_json() {
        let command: CueCommand = serde_json::from_str(
            r#"{"type":"CUE-OUT","eventId":100023,"adDuration":600,"preRollDuration":2}"#,
        )
        .unwrap();
        assert_eq!(command.cue_type, CueType::CueOut);
        assert_eq!(command.event_id, Some(100_023));
        assert_eq!(command.ad_duration, Some(600.0));
        assert_eq!(command.pre_roll_duration, Some(2.0));
        assert!(command.timestamp.is_none());
    }

    #[test]
    fn test_command_json_unsupported_type() {
        let err = serde_json::from_str::<CueCommand>(r#"{"type":"CUE-SIDEWAYS"}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported cue command"), "{err}");
    }

    #[test]
    fn test_message_json() {
        let generator = CueGenerator::default();
        let message = generator
            .generate(&CueCommand::crash_out().with_event_id(100_025).at(midnight()))
            .unwrap();
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["eventId"], 100_025);
        assert_eq!(json["hex"], message.hex);
        assert_eq!(json["base64"], message.base64);
        assert_eq!(json["command"]["type"], "CRASH-OUT");
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00.000Z");
        assert!(json.get("section").is_none());
    }
}
