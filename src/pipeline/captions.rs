use log::debug;

use crate::app_config::CaptionConfig;
use crate::pipeline::planner::CutWindow;
use crate::render_job::CaptionCue;
use crate::transcript::TranscriptWord;

// @module: Re-timing of transcript words into clip-local caption cues

/// A word re-timed to the clip's own timeline, before grouping
struct RetimedWord {
    text: String,
    start_sec: f64,
    end_sec: f64,
    /// True when the word before this one (in source order) was dropped,
    /// so grouping must not bridge the gap
    follows_gap: bool,
}

/// Build the caption cue timeline for one cut window.
///
/// Each word's display window is its source timing with the cut start
/// subtracted out, clamped to `[0, clip_length]`. A word entirely
/// outside the cut (possible after trimming) is dropped, never emitted
/// as a negative or out-of-range cue; that is a hard invariant.
/// Consecutive short cues are grouped up to `max_chars_per_cue` to
/// avoid flicker; grouping never reorders words and never spans a
/// dropped-word gap or a pause longer than `pause_threshold_sec`.
pub fn build_cues(
    words: &[TranscriptWord],
    cut: CutWindow,
    config: &CaptionConfig,
    pause_threshold_sec: f64,
) -> Vec<CaptionCue> {
    let clip_length = cut.duration_sec();

    let mut retimed: Vec<RetimedWord> = Vec::new();
    let mut dropped_last = false;
    for word in words {
        // Entirely outside the cut window: drop, and remember the gap
        if word.end_sec <= cut.start_sec || word.start_sec >= cut.end_sec {
            dropped_last = !retimed.is_empty();
            continue;
        }

        let start_sec = (word.start_sec - cut.start_sec).clamp(0.0, clip_length);
        let end_sec = (word.end_sec - cut.start_sec).clamp(0.0, clip_length);
        if end_sec <= start_sec {
            dropped_last = !retimed.is_empty();
            continue;
        }

        retimed.push(RetimedWord {
            text: word.text.clone(),
            start_sec,
            end_sec,
            follows_gap: dropped_last,
        });
        dropped_last = false;
    }

    let cues = group_words(retimed, config.max_chars_per_cue, pause_threshold_sec);
    debug!(
        "Built {} cues for cut [{:.2}, {:.2}]",
        cues.len(),
        cut.start_sec,
        cut.end_sec
    );
    cues
}

/// Merge consecutive words into cues under a character budget
fn group_words(
    words: Vec<RetimedWord>,
    max_chars_per_cue: usize,
    pause_threshold_sec: f64,
) -> Vec<CaptionCue> {
    let mut cues: Vec<CaptionCue> = Vec::new();
    let mut current: Option<CaptionCue> = None;

    for word in words {
        if let Some(mut cue) = current.take() {
            let merged_len = cue.text.len() + 1 + word.text.len();
            let gap = word.start_sec - cue.display_end_sec;
            let fits =
                merged_len <= max_chars_per_cue && !word.follows_gap && gap <= pause_threshold_sec;

            if fits {
                cue.text.push(' ');
                cue.text.push_str(&word.text);
                cue.display_end_sec = word.end_sec;
                current = Some(cue);
                continue;
            }
            cues.push(cue);
        }
        current = Some(CaptionCue {
            text: word.text,
            display_start_sec: word.start_sec,
            display_end_sec: word.end_sec,
        });
    }
    if let Some(cue) = current {
        cues.push(cue);
    }

    cues
}
