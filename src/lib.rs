/*!
 * # shortsmith
 *
 * A Rust library for turning long-form video transcripts into ranked,
 * vertically-framed highlight clips with burned-in caption timelines.
 *
 * ## Features
 *
 * - Merge word-level transcripts into sentence-like segments
 * - Score segments with a transparent, deterministic heuristic
 *   (keyword density, speech density, confidence, length fit)
 * - Greedy selection of diverse, non-overlapping highlight windows
 * - Expansion of selected windows into concrete cuts with crop geometry
 * - Clip-local caption cue timelines with flicker-free grouping
 * - Declarative render job output for an external encoder
 * - SRT and JSON transcript ingestion, ASS caption document generation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management and validation
 * - `transcript`: Input contract types and transcript loading
 * - `pipeline`: The five-stage clip assembly core:
 *   - `pipeline::normalizer`: Pause-boundary segmentation
 *   - `pipeline::scorer`: Heuristic engagement scoring
 *   - `pipeline::selector`: Greedy non-overlapping selection
 *   - `pipeline::planner`: Cut windows and crop geometry
 *   - `pipeline::captions`: Clip-local caption cues
 * - `render_job`: The declarative output handed to the encoder
 * - `subtitle_writer`: ASS caption documents per clip
 * - `errors`: Custom error types for the crate
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod pipeline;
pub mod render_job;
pub mod subtitle_writer;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::{AspectRatio, Config, OutputSettings, ScoreWeights};
pub use errors::{AppError, ConfigError, PipelineError, TranscriptError};
pub use pipeline::{HighlightPipeline, ScoredSegment, Segment};
pub use render_job::{CaptionCue, ClipPlan, CropRect, RenderJob};
pub use transcript::{TranscriptSource, TranscriptWord};
