use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::TranscriptError;

// @module: Transcript input contract and loading

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2})[,.](\d{3}) --> (\d{2}):(\d{2}):(\d{2})[,.](\d{3})")
        .unwrap()
});

/// One time-aligned transcript entry: a word, or a short phrase when the
/// transcriber emits phrase-level timings (SRT input does).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptWord {
    /// Spoken text
    pub text: String,

    /// Start time in the source video, seconds
    pub start_sec: f64,

    /// End time in the source video, seconds
    pub end_sec: f64,

    /// Transcription confidence in [0, 1]
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl TranscriptWord {
    /// Creates a new transcript word - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(text: impl Into<String>, start_sec: f64, end_sec: f64, confidence: f64) -> Self {
        TranscriptWord {
            text: text.into(),
            start_sec,
            end_sec,
            confidence,
        }
    }

    /// Duration of this entry in seconds
    pub fn duration_sec(&self) -> f64 {
        self.end_sec - self.start_sec
    }
}

/// Everything the pipeline needs from the upstream collaborators:
/// the word sequence, the media duration and the source resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSource {
    /// Ordered transcript entries, non-overlapping, non-decreasing start
    pub words: Vec<TranscriptWord>,

    /// Source media duration in seconds
    pub duration_sec: f64,

    /// Source frame width in pixels
    pub width: u32,

    /// Source frame height in pixels
    pub height: u32,
}

impl TranscriptSource {
    /// Create a new transcript source
    pub fn new(words: Vec<TranscriptWord>, duration_sec: f64, width: u32, height: u32) -> Self {
        TranscriptSource {
            words,
            duration_sec,
            width,
            height,
        }
    }

    /// Load words from a transcript file, dispatching on extension.
    ///
    /// `.srt` files are parsed as phrase-level entries with full
    /// confidence; anything else is read as a JSON array of words.
    pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<TranscriptWord>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

        let is_srt = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("srt"))
            .unwrap_or(false);

        if is_srt {
            parse_srt_string(&content)
        } else {
            let words: Vec<TranscriptWord> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse transcript JSON: {}", path.display()))?;
            Ok(words)
        }
    }
}

/// Parse SRT format text into transcript entries.
///
/// Each SRT block becomes one phrase-level `TranscriptWord` with
/// confidence 1.0 (SRT carries no confidence). Invalid blocks are
/// skipped with a warning; entries are sorted by start time.
pub fn parse_srt_string(content: &str) -> Result<Vec<TranscriptWord>> {
    let mut entries = Vec::new();

    // State variables for parsing
    let mut current_times: Option<(f64, f64)> = None;
    let mut current_text = String::new();
    let mut seen_seq_num = false;
    let mut line_count = 0;

    let mut finalize = |times: &mut Option<(f64, f64)>, text: &mut String, seen: &mut bool| {
        if let Some((start_sec, end_sec)) = times.take() {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                warn!("Skipping SRT entry at {:.3}s: empty text", start_sec);
            } else if end_sec <= start_sec {
                warn!(
                    "Skipping SRT entry at {:.3}s: end {:.3}s not after start",
                    start_sec, end_sec
                );
            } else {
                entries.push(TranscriptWord {
                    text: trimmed.to_string(),
                    start_sec,
                    end_sec,
                    confidence: 1.0,
                });
            }
        }
        text.clear();
        *seen = false;
    };

    for line in content.lines() {
        line_count += 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            finalize(&mut current_times, &mut current_text, &mut seen_seq_num);
            continue;
        }

        // Sequence number starts a new block
        if !seen_seq_num && current_times.is_none() && trimmed.parse::<usize>().is_ok() {
            seen_seq_num = true;
            continue;
        }

        // Timestamp line follows the sequence number
        if current_times.is_none() {
            if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                let start = capture_to_sec(&caps, 1);
                let end = capture_to_sec(&caps, 5);
                current_times = Some((start, end));
                continue;
            }
            warn!(
                "Unexpected text at line {} before timestamp: {}",
                line_count, trimmed
            );
            continue;
        }

        // Remaining lines in the block are text
        if !current_text.is_empty() {
            current_text.push(' ');
        }
        current_text.push_str(trimmed);
    }
    finalize(&mut current_times, &mut current_text, &mut seen_seq_num);

    if entries.is_empty() {
        return Err(TranscriptError::NoEntries.into());
    }

    // Sort by start time to ensure correct order
    entries.sort_by(|a, b| a.start_sec.total_cmp(&b.start_sec));

    debug!("Parsed {} transcript entries from SRT", entries.len());
    Ok(entries)
}

/// Convert a captured HH:MM:SS,mmm timestamp to seconds
fn capture_to_sec(caps: &regex::Captures, start_idx: usize) -> f64 {
    let part = |idx: usize| -> f64 {
        caps.get(start_idx + idx)
            .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0))
    };
    part(0) * 3600.0 + part(1) * 60.0 + part(2) + part(3) / 1000.0
}

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_srt_timestamp(sec: f64) -> String {
    let total_ms = (sec.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format seconds as an ASS timestamp (H:MM:SS.cc, centiseconds)
pub fn format_ass_timestamp(sec: f64) -> String {
    let total_cs = (sec.max(0.0) * 100.0).round() as u64;
    let hours = total_cs / 360_000;
    let minutes = (total_cs % 360_000) / 6_000;
    let seconds = (total_cs % 6_000) / 100;
    let centis = total_cs % 100;

    format!("{:01}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}
