use log::debug;

use crate::app_config::AspectRatio;
use crate::errors::PipelineError;
use crate::pipeline::scorer::ScoredSegment;
use crate::render_job::CropRect;

// @module: Expansion of selected segments into concrete cut windows

/// A concrete cut in the source timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutWindow {
    /// Cut start, seconds
    pub start_sec: f64,
    /// Cut end, seconds
    pub end_sec: f64,
}

impl CutWindow {
    /// Cut duration in seconds
    pub fn duration_sec(&self) -> f64 {
        self.end_sec - self.start_sec
    }
}

/// Pluggable crop strategy.
///
/// Given the source frame geometry and the cut's time range, returns the
/// crop rectangle for the target aspect ratio. The default is a centered
/// crop; a smarter implementation could track faces or motion.
pub trait Reframe {
    /// Compute the crop rectangle for one clip
    fn crop(
        &self,
        source_width: u32,
        source_height: u32,
        aspect: AspectRatio,
        cut: CutWindow,
    ) -> CropRect;
}

/// Default reframe strategy: crop the longer dimension to match the
/// target ratio, center-aligned. Ignores the time range.
#[derive(Debug, Default, Clone, Copy)]
pub struct CenteredReframe;

impl Reframe for CenteredReframe {
    fn crop(
        &self,
        source_width: u32,
        source_height: u32,
        aspect: AspectRatio,
        _cut: CutWindow,
    ) -> CropRect {
        centered_crop(source_width, source_height, aspect.ratio())
    }
}

/// Expand a selected segment to the exact clip length.
///
/// Shorter segments are padded symmetrically from the source timeline,
/// clamped at 0 and at the video duration with the deficit shifted
/// entirely to the open side when a boundary is hit. Longer segments are
/// trimmed symmetrically around the segment center; the leading edge
/// snaps to the nearest word-start boundary and the trailing edge
/// follows it to preserve the exact length (words crossing the trailing
/// edge are dropped by the cue builder).
///
/// When the video itself is shorter than the clip length the cut spans
/// the full `[0, duration]` range; this is the one deliberate deviation
/// from the exact clip length, at content boundaries.
pub fn plan_cut(
    selected: &ScoredSegment,
    clip_length_sec: u32,
    source_duration_sec: f64,
) -> Result<CutWindow, PipelineError> {
    let segment = &selected.segment;
    if segment.end_sec <= segment.start_sec {
        return Err(PipelineError::DegenerateSegment {
            id: segment.id,
            start_sec: segment.start_sec,
            end_sec: segment.end_sec,
        });
    }

    let target = f64::from(clip_length_sec);

    // Source shorter than the clip length: take everything there is
    if source_duration_sec <= target {
        return Ok(CutWindow {
            start_sec: 0.0,
            end_sec: source_duration_sec,
        });
    }

    let natural = segment.duration_sec();
    let window = if natural <= target {
        pad_symmetrically(segment.start_sec, segment.end_sec, target, source_duration_sec)
    } else {
        trim_to_length(selected, target, source_duration_sec)
    };

    debug!(
        "Planned cut [{:.2}, {:.2}] for segment {} ({:.2}s natural)",
        window.start_sec, window.end_sec, segment.id, natural
    );
    Ok(window)
}

/// Grow [start, end] to `target` seconds, half on each side, shifting
/// the deficit to the open side when clamped at 0 or `duration`.
fn pad_symmetrically(start: f64, end: f64, target: f64, duration: f64) -> CutWindow {
    let deficit = target - (end - start);
    let mut cut_start = start - deficit / 2.0;
    let mut cut_end = end + deficit / 2.0;

    if cut_start < 0.0 {
        cut_end -= cut_start; // shift the shortfall to the right
        cut_start = 0.0;
    }
    if cut_end > duration {
        cut_start -= cut_end - duration;
        cut_end = duration;
        cut_start = cut_start.max(0.0);
    }

    CutWindow {
        start_sec: cut_start,
        end_sec: cut_end,
    }
}

/// Shrink the segment to `target` seconds around its center, snapping
/// the leading edge to the nearest word-start boundary.
fn trim_to_length(selected: &ScoredSegment, target: f64, duration: f64) -> CutWindow {
    let segment = &selected.segment;
    let ideal_start = segment.center_sec() - target / 2.0;

    // Prefer cutting at a word boundary over cutting mid-word
    let snapped = segment
        .words
        .iter()
        .map(|w| w.start_sec)
        .filter(|s| s + target <= segment.end_sec + 0.5)
        .min_by(|a, b| {
            (a - ideal_start)
                .abs()
                .total_cmp(&(b - ideal_start).abs())
        })
        .unwrap_or(ideal_start);

    let cut_start = snapped.clamp(0.0, duration - target);
    CutWindow {
        start_sec: cut_start,
        end_sec: cut_start + target,
    }
}

/// Centered-crop rule: crop the longer dimension to match the target
/// ratio, keeping the full extent of the other dimension.
fn centered_crop(source_width: u32, source_height: u32, target_ratio: f64) -> CropRect {
    let width = f64::from(source_width);
    let height = f64::from(source_height);
    let source_ratio = width / height;

    if source_ratio > target_ratio {
        // Source is wider than the target: crop the sides
        let crop_width = (height * target_ratio).round().min(width) as u32;
        CropRect {
            x: (source_width - crop_width) / 2,
            y: 0,
            width: crop_width,
            height: source_height,
        }
    } else {
        // Source is taller than the target: crop top and bottom
        let crop_height = (width / target_ratio).round().min(height) as u32;
        CropRect {
            x: 0,
            y: (source_height - crop_height) / 2,
            width: source_width,
            height: crop_height,
        }
    }
}
