use log::debug;

use crate::app_config::SelectionConfig;
use crate::pipeline::scorer::ScoredSegment;

// @module: Greedy selection of non-overlapping highlight windows

/// Choose up to `max_clips` non-overlapping segments by descending score.
///
/// Classic interval-scheduling-with-priority greedy: candidates are
/// sorted by score (stable, ties broken by earlier start), then accepted
/// only if their interval, expanded by `min_spacing_sec`, does not
/// intersect any already-accepted interval. This is not globally
/// score-optimal (weighted interval scheduling would need dynamic
/// programming) but guarantees no two selected clips overlap and runs
/// in O(n log n); a deliberate simplicity trade-off.
///
/// The interval checked is the candidate's eventual cut footprint: its
/// segment expanded to at least `clip_length_sec` around the center,
/// since that is the span the planner will occupy in the source
/// timeline. Segments shorter than the clip length would otherwise pass
/// the check and still produce overlapping cuts after padding.
///
/// Returns the accepted segments in ascending start time. If fewer than
/// `max_clips` non-overlapping segments exist, returns what was found;
/// never pads with synthetic segments.
pub fn select(
    candidates: Vec<ScoredSegment>,
    max_clips: usize,
    clip_length_sec: u32,
    config: &SelectionConfig,
) -> Vec<ScoredSegment> {
    let mut ranked = candidates;
    // Total, deterministic ordering: score descending, earlier start wins ties
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.segment.start_sec.total_cmp(&b.segment.start_sec))
    });

    let clip_length = f64::from(clip_length_sec);
    let mut accepted: Vec<ScoredSegment> = Vec::new();
    let mut footprints: Vec<(f64, f64)> = Vec::new();

    for candidate in ranked {
        if accepted.len() >= max_clips {
            break;
        }
        let (start, end) = cut_footprint(&candidate, clip_length);
        let conflict = footprints.iter().any(|&(a_start, a_end)| {
            intervals_overlap(
                start - config.min_spacing_sec,
                end + config.min_spacing_sec,
                a_start,
                a_end,
            )
        });
        if !conflict {
            footprints.push((start, end));
            accepted.push(candidate);
        }
    }

    // Emit in source order; playback order is what downstream expects
    accepted.sort_by(|a, b| a.segment.start_sec.total_cmp(&b.segment.start_sec));

    debug!("Selected {} of up to {} clips", accepted.len(), max_clips);
    accepted
}

/// The source-timeline span this candidate's cut will occupy: the
/// segment itself, grown symmetrically to the clip length when shorter
fn cut_footprint(candidate: &ScoredSegment, clip_length: f64) -> (f64, f64) {
    let segment = &candidate.segment;
    let natural = segment.end_sec - segment.start_sec;
    if natural >= clip_length {
        (segment.start_sec, segment.end_sec)
    } else {
        let center = (segment.start_sec + segment.end_sec) / 2.0;
        (center - clip_length / 2.0, center + clip_length / 2.0)
    }
}

/// True if [a_start, a_end] and [b_start, b_end] intersect
fn intervals_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start < b_end && b_start < a_end
}
