/*!
 * Highlight selection and clip assembly pipeline.
 *
 * The pipeline is a pure, single-threaded, synchronous transformation:
 * given a transcript and a configuration it is a deterministic function
 * from input to render job. Data flows strictly forward through five
 * stages, each producing a new immutable structure:
 *
 * normalizer -> scorer -> selector -> planner -> captions -> RenderJob
 */

pub mod captions;
pub mod normalizer;
pub mod planner;
pub mod scorer;
pub mod selector;

use anyhow::Result;
use log::{debug, info};
use uuid::Uuid;

use crate::app_config::Config;
use crate::render_job::{ClipPlan, RenderJob};
use crate::transcript::TranscriptSource;

pub use normalizer::Segment;
pub use planner::{CenteredReframe, CutWindow, Reframe};
pub use scorer::{ScoredSegment, SegmentScorer};

/// The pipeline entry point.
///
/// Holds the validated-on-run configuration and the pluggable reframe
/// strategy. Invocations share no mutable state, so separate jobs may
/// run concurrently on their own pipeline instances.
pub struct HighlightPipeline {
    config: Config,
    reframe: Box<dyn Reframe + Send + Sync>,
}

impl HighlightPipeline {
    /// Create a pipeline with the default centered-crop reframe strategy
    pub fn new(config: Config) -> Self {
        Self::with_reframe(config, Box::new(CenteredReframe))
    }

    /// Create a pipeline with a custom reframe strategy
    pub fn with_reframe(config: Config, reframe: Box<dyn Reframe + Send + Sync>) -> Self {
        HighlightPipeline { config, reframe }
    }

    /// Run the full pipeline on one transcript source.
    ///
    /// Fails fast on invalid configuration before any scoring. An empty
    /// transcript yields a render job with zero clips, not an error;
    /// "no highlights found" is for downstream layers to surface.
    pub fn run(&self, source: &TranscriptSource) -> Result<RenderJob> {
        self.config.validate()?;

        let (target_width, target_height) = self.config.aspect.target_resolution();
        let mut job = RenderJob {
            job_id: Uuid::new_v4(),
            aspect: self.config.aspect,
            target_width,
            target_height,
            caption_style: self.config.style.clone(),
            output: self.config.output.clone(),
            clips: Vec::new(),
        };

        if source.words.is_empty() {
            info!("Empty transcript, emitting render job with zero clips");
            return Ok(job);
        }

        let segments = normalizer::normalize(&source.words, &self.config.segmentation);
        if segments.is_empty() {
            info!("No segments after normalization, emitting empty render job");
            return Ok(job);
        }

        let scorer = SegmentScorer::new(
            self.config.weights.clone(),
            &self.config.keywords,
            self.config.clip_length_sec,
        );
        let scored = scorer.score_all(segments);

        let selected = selector::select(
            scored,
            self.config.max_clips,
            self.config.clip_length_sec,
            &self.config.selection,
        );

        for candidate in &selected {
            let cut = planner::plan_cut(
                candidate,
                self.config.clip_length_sec,
                source.duration_sec,
            )?;
            let crop = self
                .reframe
                .crop(source.width, source.height, self.config.aspect, cut);
            let cues = captions::build_cues(
                &candidate.segment.words,
                cut,
                &self.config.captions,
                self.config.segmentation.pause_threshold_sec,
            );

            job.clips.push(ClipPlan {
                segment_id: candidate.segment.id,
                cut_start_sec: cut.start_sec,
                cut_end_sec: cut.end_sec,
                crop,
                score: candidate.score,
                reasons: candidate
                    .reasons
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), *v))
                    .collect(),
                captions: cues,
            });
        }

        debug!(
            "Assembled render job {} with {} clips",
            job.job_id,
            job.clips.len()
        );
        Ok(job)
    }
}
