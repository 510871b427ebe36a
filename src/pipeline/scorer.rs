use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::ScoreWeights;
use crate::pipeline::normalizer::Segment;

// @module: Heuristic engagement scoring of segments

/// Signal name for the keyword density contribution
pub const SIGNAL_KEYWORD_DENSITY: &str = "keyword_density";
/// Signal name for the words-per-second bell contribution
pub const SIGNAL_SPEECH_DENSITY: &str = "speech_density";
/// Signal name for the transcription confidence contribution
pub const SIGNAL_CONFIDENCE: &str = "confidence";
/// Signal name for the length fit penalty
pub const SIGNAL_LENGTH_FIT: &str = "length_fit";

// @const: Numeric token regex (numbers read as concrete, engaging claims)
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+([.,]\d+)?\b").unwrap());

// @const: Question detector
static QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?").unwrap());

/// A segment annotated with its engagement score and the raw weighted
/// contribution of each signal.
///
/// Created once by the scorer, never mutated afterward. The `reasons`
/// map is first-class output for explainability, keyed by signal name
/// in a `BTreeMap` so serialized order is stable.
#[derive(Debug, Clone)]
pub struct ScoredSegment {
    /// The underlying segment
    pub segment: Segment,

    /// Final score: sum of the reasons map
    pub score: f64,

    /// Raw contribution per signal
    pub reasons: BTreeMap<&'static str, f64>,
}

/// Deterministic, stateless segment scorer.
///
/// Holds the compiled keyword pattern and the configured weights; the
/// score is a pure function of a segment's own text and timing with no
/// cross-segment state.
pub struct SegmentScorer {
    weights: ScoreWeights,
    keyword_pattern: Regex,
    clip_length_sec: f64,
}

impl SegmentScorer {
    /// Build a scorer from the configured weights and keyword list
    pub fn new(weights: ScoreWeights, keywords: &[String], clip_length_sec: u32) -> Self {
        let keyword_pattern = build_keyword_pattern(keywords);
        SegmentScorer {
            weights,
            keyword_pattern,
            clip_length_sec: f64::from(clip_length_sec),
        }
    }

    /// Score every segment in order
    pub fn score_all(&self, segments: Vec<Segment>) -> Vec<ScoredSegment> {
        let scored: Vec<ScoredSegment> = segments.into_iter().map(|s| self.score(s)).collect();
        if let Some(best) = scored
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
        {
            debug!(
                "Scored {} segments, best {:.3} at {:.1}s",
                scored.len(),
                best.score,
                best.segment.start_sec
            );
        }
        scored
    }

    /// Score one segment
    pub fn score(&self, segment: Segment) -> ScoredSegment {
        let mut reasons = BTreeMap::new();
        reasons.insert(SIGNAL_KEYWORD_DENSITY, self.keyword_density(&segment));
        reasons.insert(SIGNAL_SPEECH_DENSITY, self.speech_density(&segment));
        reasons.insert(SIGNAL_CONFIDENCE, self.confidence(&segment));
        reasons.insert(SIGNAL_LENGTH_FIT, self.length_fit(&segment));

        let score = reasons.values().sum();
        ScoredSegment {
            segment,
            score,
            reasons,
        }
    }

    /// Keyword matches plus numbers and questions, normalized by word count
    fn keyword_density(&self, segment: &Segment) -> f64 {
        let text = segment.text.to_lowercase();
        let mut hits = self.keyword_pattern.find_iter(&text).count();
        hits += NUMBER_REGEX.find_iter(&text).count();
        hits += QUESTION_REGEX.find_iter(&text).count();

        let word_count = segment.words.len().max(1);
        self.weights.keyword * (hits as f64 / word_count as f64)
    }

    /// Bell-shaped weighting of words-per-second, centered on the
    /// configured ideal rate. Too sparse and too fast both penalize.
    fn speech_density(&self, segment: &Segment) -> f64 {
        let duration = segment.duration_sec().max(0.5);
        let wps = segment.words.len() as f64 / duration;

        let ideal = self.weights.ideal_words_per_sec;
        let sigma = ideal / 2.0;
        let deviation = (wps - ideal) / sigma;
        self.weights.speech_density * (-0.5 * deviation * deviation).exp()
    }

    /// Average transcription confidence across words
    fn confidence(&self, segment: &Segment) -> f64 {
        let word_count = segment.words.len().max(1);
        let mean: f64 =
            segment.words.iter().map(|w| w.confidence).sum::<f64>() / word_count as f64;
        self.weights.confidence * mean
    }

    /// Penalty growing with the distance between the segment's natural
    /// duration and the target clip length; favors segments that need
    /// minimal padding or trimming.
    fn length_fit(&self, segment: &Segment) -> f64 {
        let distance = (segment.duration_sec() - self.clip_length_sec).abs();
        let normalized = (distance / self.clip_length_sec).min(1.0);
        -self.weights.length_fit * normalized
    }
}

/// Compile the keyword list into one case-insensitive alternation with
/// word boundaries. An empty list yields a never-matching pattern.
fn build_keyword_pattern(keywords: &[String]) -> Regex {
    if keywords.is_empty() {
        return Regex::new(r"\b\B").unwrap();
    }
    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    let pattern = format!(r"(?i)\b({})\b", escaped.join("|"));
    // The pattern is built from escaped literals, so it always compiles
    Regex::new(&pattern).unwrap_or_else(|_| Regex::new(r"\b\B").unwrap())
}
