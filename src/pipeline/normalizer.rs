use log::{debug, warn};

use crate::app_config::SegmentationConfig;
use crate::transcript::TranscriptWord;

// @module: Transcript normalization into sentence-like segments

/// A contiguous span of transcript words grouped at pause boundaries.
///
/// Invariant: `start_sec` is the first word's start, `end_sec` the last
/// word's end, and `end_sec > start_sec`.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Stable id, assigned in source order
    pub id: usize,

    /// Start time in the source video, seconds
    pub start_sec: f64,

    /// End time in the source video, seconds
    pub end_sec: f64,

    /// Words making up this segment, in order
    pub words: Vec<TranscriptWord>,

    /// Joined segment text
    pub text: String,

    /// Number of words below the configured confidence floor.
    /// They still count toward boundaries but are discounted in scoring.
    pub low_confidence_words: usize,
}

impl Segment {
    /// Natural duration of the segment in seconds
    pub fn duration_sec(&self) -> f64 {
        self.end_sec - self.start_sec
    }

    /// Midpoint of the segment in source time
    pub fn center_sec(&self) -> f64 {
        (self.start_sec + self.end_sec) / 2.0
    }
}

/// Merge consecutive words into sentence-like segments.
///
/// The running buffer is closed when the silence gap to the next word
/// exceeds `pause_threshold_sec`, when the current word ends in
/// sentence-ending punctuation, or when the buffer's duration exceeds
/// the `max_segment_sec` safety cap. An empty transcript yields an
/// empty segment list, not an error.
pub fn normalize(words: &[TranscriptWord], config: &SegmentationConfig) -> Vec<Segment> {
    if words.is_empty() {
        debug!("Empty transcript, no segments to build");
        return Vec::new();
    }

    let total_words = words.len();
    let mut segments: Vec<Segment> = Vec::new();
    let mut buffer: Vec<TranscriptWord> = Vec::new();

    let mut flush = |buffer: &mut Vec<TranscriptWord>, segments: &mut Vec<Segment>| {
        if buffer.is_empty() {
            return;
        }
        let start_sec = buffer[0].start_sec;
        let end_sec = buffer[buffer.len() - 1].end_sec;
        debug_assert!(
            end_sec > start_sec,
            "degenerate segment: start {} end {}",
            start_sec,
            end_sec
        );
        if end_sec <= start_sec {
            // Should be impossible for well-formed input; drop rather
            // than emit a segment that violates the invariant.
            warn!(
                "Dropping degenerate segment at {:.3}s ({} words)",
                start_sec,
                buffer.len()
            );
            buffer.clear();
            return;
        }

        let text = buffer
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let low_confidence_words = buffer
            .iter()
            .filter(|w| w.confidence < config.min_confidence)
            .count();

        segments.push(Segment {
            id: segments.len(),
            start_sec,
            end_sec,
            words: std::mem::take(buffer),
            text,
            low_confidence_words,
        });
    };

    for word in words {
        if let Some(last) = buffer.last() {
            let gap = word.start_sec - last.end_sec;
            let buffer_duration = last.end_sec - buffer[0].start_sec;

            if gap > config.pause_threshold_sec
                || ends_sentence(&last.text)
                || buffer_duration > config.max_segment_sec
            {
                flush(&mut buffer, &mut segments);
            }
        }
        buffer.push(word.clone());
    }
    flush(&mut buffer, &mut segments);

    // Every input word must land in exactly one segment
    let segmented_words: usize = segments.iter().map(|s| s.words.len()).sum();
    if segmented_words != total_words {
        warn!(
            "Lost words during segmentation: {} in, {} out",
            total_words, segmented_words
        );
    }

    debug!(
        "Normalized {} words into {} segments",
        total_words,
        segments.len()
    );
    segments
}

/// True if the word closes a sentence
fn ends_sentence(text: &str) -> bool {
    matches!(
        text.trim_end().chars().last(),
        Some('.') | Some('!') | Some('?')
    )
}
