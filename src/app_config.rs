use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the pipeline configuration including loading,
/// validating and saving configuration settings.
/// Represents the full clip-assembly configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target clip length in seconds
    #[serde(default = "default_clip_length_sec")]
    pub clip_length_sec: u32,

    /// Maximum number of clips to produce
    #[serde(default = "default_max_clips")]
    pub max_clips: usize,

    /// Target aspect ratio for the output clips
    #[serde(default)]
    pub aspect: AspectRatio,

    /// Named caption style preset. Opaque to the pipeline, passed through
    /// to the caption writer and the external encoder.
    #[serde(default = "default_style")]
    pub style: String,

    /// Segmentation options
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Scorer signal weights
    #[serde(default)]
    pub weights: ScoreWeights,

    /// High-engagement lexical markers matched by the keyword signal
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Selection options
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Caption cue options
    #[serde(default)]
    pub captions: CaptionConfig,

    /// Encode parameters handed to the external encoder
    #[serde(default)]
    pub output: OutputSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Target aspect ratio preset
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// Vertical 9:16 (shorts/reels)
    #[default]
    #[serde(rename = "9:16")]
    Vertical,
    /// Square 1:1
    #[serde(rename = "1:1")]
    Square,
    /// Landscape 16:9
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    /// Output resolution for this preset (width, height)
    pub fn target_resolution(&self) -> (u32, u32) {
        match self {
            Self::Vertical => (1080, 1920),
            Self::Square => (1080, 1080),
            Self::Landscape => (1920, 1080),
        }
    }

    /// Width:height ratio as a float
    pub fn ratio(&self) -> f64 {
        let (w, h) = self.target_resolution();
        f64::from(w) / f64::from(h)
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Vertical => "9:16",
            Self::Square => "1:1",
            Self::Landscape => "16:9",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "9:16" => Ok(Self::Vertical),
            "1:1" => Ok(Self::Square),
            "16:9" => Ok(Self::Landscape),
            _ => Err(ConfigError::MalformedAspect(s.to_string())),
        }
    }
}

/// Options controlling how transcript words are merged into segments
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SegmentationConfig {
    /// Silence gap that closes the current segment, in seconds
    #[serde(default = "default_pause_threshold_sec")]
    pub pause_threshold_sec: f64,

    /// Safety cap on segment duration for continuous speech, in seconds
    #[serde(default = "default_max_segment_sec")]
    pub max_segment_sec: f64,

    /// Words below this confidence are kept but flagged and discounted
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            pause_threshold_sec: default_pause_threshold_sec(),
            max_segment_sec: default_max_segment_sec(),
            min_confidence: default_min_confidence(),
        }
    }
}

/// Weights applied to the scorer's signals.
///
/// Each signal's raw weighted contribution is retained in the scored
/// segment's `reasons` map for explainability.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScoreWeights {
    /// Weight of the keyword density signal
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,

    /// Weight of the words-per-second bell signal
    #[serde(default = "default_speech_density_weight")]
    pub speech_density: f64,

    /// Weight of the transcription confidence signal
    #[serde(default = "default_confidence_weight")]
    pub confidence: f64,

    /// Weight of the length-fit penalty
    #[serde(default = "default_length_fit_weight")]
    pub length_fit: f64,

    /// Words-per-second rate the bell weighting is centered on
    #[serde(default = "default_ideal_words_per_sec")]
    pub ideal_words_per_sec: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: default_keyword_weight(),
            speech_density: default_speech_density_weight(),
            confidence: default_confidence_weight(),
            length_fit: default_length_fit_weight(),
            ideal_words_per_sec: default_ideal_words_per_sec(),
        }
    }
}

/// Options controlling greedy window selection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SelectionConfig {
    /// Minimum spacing between accepted clips in the source timeline,
    /// in seconds. Prevents near-duplicate clips from adjacent sentences.
    #[serde(default = "default_min_spacing_sec")]
    pub min_spacing_sec: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_spacing_sec: default_min_spacing_sec(),
        }
    }
}

/// Options controlling caption cue grouping
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptionConfig {
    /// Maximum characters per grouped cue, to avoid flicker
    #[serde(default = "default_max_chars_per_cue")]
    pub max_chars_per_cue: usize,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_chars_per_cue: default_max_chars_per_cue(),
        }
    }
}

/// Encode parameters for the external encoder.
///
/// Pass-through values; the pipeline never interprets them beyond
/// copying them into the render job.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputSettings {
    /// Video codec
    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    /// Encoder preset
    #[serde(default = "default_encode_preset")]
    pub preset: String,

    /// Constant rate factor
    #[serde(default = "default_crf")]
    pub crf: u32,

    /// Audio codec
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Audio bitrate
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: String,

    /// Output frame rate
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Pixel format
    #[serde(default = "default_pixel_format")]
    pub pixel_format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            video_codec: default_video_codec(),
            preset: default_encode_preset(),
            crf: default_crf(),
            audio_codec: default_audio_codec(),
            audio_bitrate: default_audio_bitrate(),
            frame_rate: default_frame_rate(),
            pixel_format: default_pixel_format(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map the configured level onto the logger's filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_clip_length_sec() -> u32 {
    15
}

fn default_max_clips() -> usize {
    6
}

fn default_style() -> String {
    "default".to_string()
}

fn default_pause_threshold_sec() -> f64 {
    0.6 // gap that reads as a sentence break in conversational speech
}

fn default_max_segment_sec() -> f64 {
    20.0
}

fn default_min_confidence() -> f64 {
    0.5
}

fn default_keyword_weight() -> f64 {
    1.0
}

fn default_speech_density_weight() -> f64 {
    1.0
}

fn default_confidence_weight() -> f64 {
    0.5
}

fn default_length_fit_weight() -> f64 {
    0.5
}

fn default_ideal_words_per_sec() -> f64 {
    2.5 // comfortable spoken-word rate
}

fn default_min_spacing_sec() -> f64 {
    2.0
}

fn default_max_chars_per_cue() -> usize {
    42
}

fn default_keywords() -> Vec<String> {
    [
        "tip", "secret", "mistake", "common", "best", "worst", "always", "never", "how to",
        "here's", "watch this", "listen", "idea", "hack", "strategy", "story", "example",
        "because", "why", "myth", "truth",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_video_codec() -> String {
    "libx264".to_string()
}

fn default_encode_preset() -> String {
    "veryfast".to_string()
}

fn default_crf() -> u32 {
    21
}

fn default_audio_codec() -> String {
    "aac".to_string()
}

fn default_audio_bitrate() -> String {
    "160k".to_string()
}

fn default_frame_rate() -> u32 {
    30
}

fn default_pixel_format() -> String {
    "yuv420p".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values.
    ///
    /// Runs before any scoring; rejected values are never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clip_length_sec == 0 {
            return Err(ConfigError::ZeroClipLength);
        }
        if self.max_clips == 0 {
            return Err(ConfigError::ZeroMaxClips);
        }

        let thresholds = [
            ("pause_threshold_sec", self.segmentation.pause_threshold_sec),
            ("max_segment_sec", self.segmentation.max_segment_sec),
            ("ideal_words_per_sec", self.weights.ideal_words_per_sec),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        if !self.selection.min_spacing_sec.is_finite() || self.selection.min_spacing_sec < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "min_spacing_sec",
                value: self.selection.min_spacing_sec,
            });
        }
        if !self.segmentation.min_confidence.is_finite()
            || !(0.0..=1.0).contains(&self.segmentation.min_confidence)
        {
            return Err(ConfigError::InvalidThreshold {
                name: "min_confidence",
                value: self.segmentation.min_confidence,
            });
        }

        let weights = [
            ("keyword", self.weights.keyword),
            ("speech_density", self.weights.speech_density),
            ("confidence", self.weights.confidence),
            ("length_fit", self.weights.length_fit),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            clip_length_sec: default_clip_length_sec(),
            max_clips: default_max_clips(),
            aspect: AspectRatio::default(),
            style: default_style(),
            segmentation: SegmentationConfig::default(),
            weights: ScoreWeights::default(),
            keywords: default_keywords(),
            selection: SelectionConfig::default(),
            captions: CaptionConfig::default(),
            output: OutputSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}
