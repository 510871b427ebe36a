/*!
 * Tests for heuristic segment scoring
 */

use shortsmith::app_config::{Config, ScoreWeights};
use shortsmith::pipeline::normalizer::Segment;
use shortsmith::pipeline::scorer::{
    SegmentScorer, SIGNAL_CONFIDENCE, SIGNAL_KEYWORD_DENSITY, SIGNAL_LENGTH_FIT,
    SIGNAL_SPEECH_DENSITY,
};
use crate::common;

/// Build a segment directly from a sentence of words
fn segment_from(text: &str, start_sec: f64, end_sec: f64) -> Segment {
    let words = common::sentence(text, start_sec, end_sec);
    Segment {
        id: 0,
        start_sec,
        end_sec,
        text: text.to_string(),
        low_confidence_words: 0,
        words,
    }
}

fn default_scorer() -> SegmentScorer {
    let config = Config::default();
    SegmentScorer::new(ScoreWeights::default(), &config.keywords, 15)
}

/// Test that every signal appears in the reasons map and sums to the score
#[test]
fn test_score_withAnySegment_shouldExposeAllReasons() {
    let scorer = default_scorer();
    let scored = scorer.score(segment_from("just a plain sentence here", 0.0, 2.0));

    assert_eq!(scored.reasons.len(), 4);
    for key in [
        SIGNAL_KEYWORD_DENSITY,
        SIGNAL_SPEECH_DENSITY,
        SIGNAL_CONFIDENCE,
        SIGNAL_LENGTH_FIT,
    ] {
        assert!(scored.reasons.contains_key(key), "missing signal {}", key);
    }

    let sum: f64 = scored.reasons.values().sum();
    assert!((sum - scored.score).abs() < 1e-9);
}

/// Test that keyword-rich text outscores neutral text
#[test]
fn test_score_withKeywords_shouldBeatNeutralText() {
    let scorer = default_scorer();

    let neutral = scorer.score(segment_from("we walked along the road slowly", 0.0, 3.0));
    let hooked = scorer.score(segment_from("the secret tip nobody tells you", 10.0, 13.0));

    assert!(
        hooked.reasons[SIGNAL_KEYWORD_DENSITY] > neutral.reasons[SIGNAL_KEYWORD_DENSITY],
        "keyword signal should react to marker words"
    );
    assert!(hooked.score > neutral.score);
}

/// Test that numbers and questions count as lexical markers
#[test]
fn test_score_withNumbersAndQuestions_shouldRaiseKeywordSignal() {
    let scorer = default_scorer();

    let plain = scorer.score(segment_from("it went fine overall", 0.0, 2.0));
    let numeric = scorer.score(segment_from("it grew 300 percent right?", 0.0, 2.0));

    assert!(numeric.reasons[SIGNAL_KEYWORD_DENSITY] > plain.reasons[SIGNAL_KEYWORD_DENSITY]);
}

/// Test the speech density bell peaks near the ideal rate
#[test]
fn test_score_withIdealRate_shouldBeatExtremes() {
    let scorer = default_scorer();

    // 10 words over 4s = 2.5 wps, exactly the default ideal
    let ideal = scorer.score(segment_from(
        "one two three four five six seven eight nine ten",
        0.0,
        4.0,
    ));
    // Same 10 words over 1s = 10 wps, unintelligibly fast
    let rushed = scorer.score(segment_from(
        "one two three four five six seven eight nine ten",
        0.0,
        1.0,
    ));
    // Same 10 words over 30s, very sparse
    let sparse = scorer.score(segment_from(
        "one two three four five six seven eight nine ten",
        0.0,
        30.0,
    ));

    assert!(ideal.reasons[SIGNAL_SPEECH_DENSITY] > rushed.reasons[SIGNAL_SPEECH_DENSITY]);
    assert!(ideal.reasons[SIGNAL_SPEECH_DENSITY] > sparse.reasons[SIGNAL_SPEECH_DENSITY]);
}

/// Test that low transcription confidence lowers the confidence signal
#[test]
fn test_score_withLowConfidenceWords_shouldLowerConfidenceSignal() {
    let scorer = default_scorer();

    let clear = Segment {
        id: 0,
        start_sec: 0.0,
        end_sec: 2.0,
        words: vec![
            common::word_with_confidence("very", 0.0, 0.5, 0.95),
            common::word_with_confidence("clear", 0.5, 1.0, 0.95),
        ],
        text: "very clear".to_string(),
        low_confidence_words: 0,
    };
    let muddy = Segment {
        id: 1,
        start_sec: 0.0,
        end_sec: 2.0,
        words: vec![
            common::word_with_confidence("very", 0.0, 0.5, 0.2),
            common::word_with_confidence("muddy", 0.5, 1.0, 0.3),
        ],
        text: "very muddy".to_string(),
        low_confidence_words: 2,
    };

    let clear = scorer.score(clear);
    let muddy = scorer.score(muddy);
    assert!(clear.reasons[SIGNAL_CONFIDENCE] > muddy.reasons[SIGNAL_CONFIDENCE]);
}

/// Test the length fit penalty favors near-target durations
#[test]
fn test_score_withNearTargetDuration_shouldPenalizeLess() {
    let scorer = default_scorer();

    let near = scorer.score(segment_from(
        "a segment that runs close to the target clip length overall",
        0.0,
        14.0,
    ));
    let far = scorer.score(segment_from("tiny", 0.0, 1.0));

    assert!(near.reasons[SIGNAL_LENGTH_FIT] > far.reasons[SIGNAL_LENGTH_FIT]);
    // Length fit is a penalty, never positive
    assert!(near.reasons[SIGNAL_LENGTH_FIT] <= 0.0);
    assert!(far.reasons[SIGNAL_LENGTH_FIT] <= 0.0);
}

/// Test that scoring is deterministic
#[test]
fn test_score_withSameInput_shouldBeDeterministic() {
    let scorer = default_scorer();
    let a = scorer.score(segment_from("the best hack you will see", 5.0, 8.0));
    let b = scorer.score(segment_from("the best hack you will see", 5.0, 8.0));

    assert_eq!(a.score, b.score);
    assert_eq!(a.reasons, b.reasons);
}

/// Test that a zero weight silences its signal
#[test]
fn test_score_withZeroKeywordWeight_shouldZeroThatSignal() {
    let config = Config::default();
    let mut weights = ScoreWeights::default();
    weights.keyword = 0.0;
    let scorer = SegmentScorer::new(weights, &config.keywords, 15);

    let scored = scorer.score(segment_from("secret tip best hack", 0.0, 2.0));
    assert_eq!(scored.reasons[SIGNAL_KEYWORD_DENSITY], 0.0);
}
