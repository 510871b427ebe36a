use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_config::{AspectRatio, OutputSettings};

// @module: Declarative render job handed to the external encoder

/// Crop rectangle in source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Crop width
    pub width: u32,
    /// Crop height
    pub height: u32,
}

/// A single timed subtitle display event, on the clip's own timeline
/// (the cut start is already subtracted out).
///
/// Invariant: cues are ordered, non-overlapping and contained within
/// `[0, clip_length]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionCue {
    /// Cue text
    pub text: String,

    /// Display start, seconds into the clip
    pub display_start_sec: f64,

    /// Display end, seconds into the clip
    pub display_end_sec: f64,
}

/// A fully specified cut of the source video: timing, crop geometry and
/// caption cue timeline. Owns its cues exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipPlan {
    /// Id of the segment this clip was planned from
    pub segment_id: usize,

    /// Cut start in the source timeline, seconds
    pub cut_start_sec: f64,

    /// Cut end in the source timeline, seconds
    pub cut_end_sec: f64,

    /// Crop geometry for the target aspect ratio
    pub crop: CropRect,

    /// Engagement score of the underlying segment
    pub score: f64,

    /// Per-signal score contributions, kept for explainability
    pub reasons: BTreeMap<String, f64>,

    /// Caption cues on the clip-local timeline
    pub captions: Vec<CaptionCue>,
}

impl ClipPlan {
    /// Cut duration in seconds
    pub fn duration_sec(&self) -> f64 {
        self.cut_end_sec - self.cut_start_sec
    }
}

/// The complete, ordered output of one pipeline invocation.
///
/// Immutable once handed to the external encoder; the pipeline never
/// observes encoding progress or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderJob {
    /// Fresh id for this job
    pub job_id: Uuid,

    /// Target aspect ratio
    pub aspect: AspectRatio,

    /// Output frame width for the aspect preset
    pub target_width: u32,

    /// Output frame height for the aspect preset
    pub target_height: u32,

    /// Named caption style preset, passed through uninterpreted
    pub caption_style: String,

    /// Encode parameters, passed through uninterpreted
    pub output: OutputSettings,

    /// Planned clips in ascending source order
    pub clips: Vec<ClipPlan>,
}

impl RenderJob {
    /// Serialize the job as a pretty-printed JSON manifest
    pub fn to_manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
