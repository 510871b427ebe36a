/*!
 * Error types for the shortsmith pipeline.
 *
 * This module contains custom error types for different parts of the crate,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised by configuration validation.
///
/// These fail fast, before any scoring runs. The pipeline never silently
/// clamps a rejected value to a default.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Clip length must be a positive number of seconds
    #[error("clip_length_sec must be positive")]
    ZeroClipLength,

    /// At least one clip must be requested
    #[error("max_clips must be positive")]
    ZeroMaxClips,

    /// Aspect ratio string did not match a known preset
    #[error("Malformed aspect ratio: {0} (expected 9:16, 1:1 or 16:9)")]
    MalformedAspect(String),

    /// A scorer weight was negative, NaN or infinite
    #[error("Invalid scorer weight {name}: {value}")]
    InvalidWeight {
        /// Name of the offending weight
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A timing threshold was non-positive, NaN or infinite
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold {
        /// Name of the offending option
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Errors that can occur while loading a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// No usable entries were found in the input
    #[error("No valid transcript entries were found")]
    NoEntries,

    /// A timestamp could not be parsed
    #[error("Invalid timestamp at line {line}: {text}")]
    InvalidTimestamp {
        /// Line number within the input
        line: usize,
        /// Offending text
        text: String,
    },
}

/// Errors that can occur while assembling a render job
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration rejected before any processing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A segment with zero or negative duration reached the planner.
    /// Structurally impossible given the normalizer invariants.
    #[error("Degenerate segment {id}: start {start_sec} >= end {end_sec}")]
    DegenerateSegment {
        /// Segment id
        id: usize,
        /// Segment start in source time
        start_sec: f64,
        /// Segment end in source time
        end_sec: f64,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from transcript loading
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from the pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
