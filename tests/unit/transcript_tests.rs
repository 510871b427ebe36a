/*!
 * Tests for transcript loading and SRT parsing
 */

use anyhow::Result;
use shortsmith::transcript::{
    format_ass_timestamp, format_srt_timestamp, parse_srt_string, TranscriptSource,
    TranscriptWord,
};
use crate::common;

/// Test SRT parsing of a well-formed transcript
#[test]
fn test_parse_srt_string_withValidContent_shouldParseEntries() {
    let entries = parse_srt_string(common::sample_srt()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].text, "Here's the best tip.");
    assert_eq!(entries[0].start_sec, 1.0);
    assert_eq!(entries[0].end_sec, 4.0);
    assert_eq!(entries[0].confidence, 1.0);
    assert_eq!(entries[2].start_sec, 10.0);
}

/// Test that multi-line subtitle text is joined with spaces
#[test]
fn test_parse_srt_string_withMultiLineText_shouldJoinLines() {
    let content = "1\n00:00:01,000 --> 00:00:03,000\nFirst line\nsecond line\n";
    let entries = parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "First line second line");
}

/// Test that an entry with a non-positive duration is skipped
#[test]
fn test_parse_srt_string_withInvertedTimes_shouldSkipEntry() {
    let content = "1\n00:00:05,000 --> 00:00:04,000\nBackwards entry\n\n\
                   2\n00:00:06,000 --> 00:00:08,000\nGood entry\n";
    let entries = parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Good entry");
}

/// Test that content with no valid entries is an error
#[test]
fn test_parse_srt_string_withNoValidEntries_shouldFail() {
    assert!(parse_srt_string("").is_err());
    assert!(parse_srt_string("not an srt file at all").is_err());
}

/// Test that out-of-order entries are sorted by start time
#[test]
fn test_parse_srt_string_withOutOfOrderEntries_shouldSortByStart() {
    let content = "1\n00:00:10,000 --> 00:00:12,000\nLater\n\n\
                   2\n00:00:01,000 --> 00:00:03,000\nEarlier\n";
    let entries = parse_srt_string(content).unwrap();

    assert_eq!(entries[0].text, "Earlier");
    assert_eq!(entries[1].text, "Later");
}

/// Test SRT parsing accepts dot millisecond separators
#[test]
fn test_parse_srt_string_withDotSeparator_shouldParse() {
    let content = "1\n00:00:01.500 --> 00:00:02.250\nDotted\n";
    let entries = parse_srt_string(content).unwrap();

    assert_eq!(entries[0].start_sec, 1.5);
    assert_eq!(entries[0].end_sec, 2.25);
}

/// Test SRT timestamp formatting
#[test]
fn test_format_srt_timestamp_withFractionalSeconds_shouldFormat() {
    assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
    assert_eq!(format_srt_timestamp(5025.678), "01:23:45,678");
}

/// Test ASS timestamp formatting uses centiseconds
#[test]
fn test_format_ass_timestamp_withFractionalSeconds_shouldUseCentiseconds() {
    assert_eq!(format_ass_timestamp(0.0), "0:00:00.00");
    assert_eq!(format_ass_timestamp(61.25), "0:01:01.25");
    assert_eq!(format_ass_timestamp(3600.0), "1:00:00.00");
}

/// Test loading a JSON word transcript from disk
#[test]
fn test_load_words_withJsonFile_shouldDeserialize() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let content = r#"[
        {"text": "hello", "start_sec": 0.0, "end_sec": 0.4, "confidence": 0.9},
        {"text": "world", "start_sec": 0.5, "end_sec": 0.9}
    ]"#;
    let path = common::create_test_file(&dir.path().to_path_buf(), "words.json", content)?;

    let words = TranscriptSource::load_words(&path)?;
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].text, "hello");
    assert_eq!(words[0].confidence, 0.9);
    // Confidence defaults to full when omitted
    assert_eq!(words[1].confidence, 1.0);
    Ok(())
}

/// Test loading an SRT transcript from disk dispatches on extension
#[test]
fn test_load_words_withSrtFile_shouldParseAsSrt() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path =
        common::create_test_file(&dir.path().to_path_buf(), "talk.srt", common::sample_srt())?;

    let words = TranscriptSource::load_words(&path)?;
    assert_eq!(words.len(), 3);
    assert_eq!(words[1].text, "It contains multiple entries.");
    Ok(())
}

/// Test word duration helper
#[test]
fn test_word_duration_withValidTimes_shouldSubtract() {
    let w = TranscriptWord::new("hey", 1.5, 2.25, 1.0);
    assert!((w.duration_sec() - 0.75).abs() < 1e-9);
}
