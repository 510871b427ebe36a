/*!
 * Tests for configuration loading and validation
 */

use std::str::FromStr;
use shortsmith::app_config::{AspectRatio, Config};
use shortsmith::errors::ConfigError;

/// Test that the default configuration passes validation
#[test]
fn test_validate_withDefaults_shouldPass() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.clip_length_sec, 15);
    assert_eq!(config.max_clips, 6);
    assert_eq!(config.aspect, AspectRatio::Vertical);
}

/// Test fail-fast on a zero clip length
#[test]
fn test_validate_withZeroClipLength_shouldFail() {
    let mut config = Config::default();
    config.clip_length_sec = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroClipLength)
    ));
}

/// Test fail-fast on zero max clips
#[test]
fn test_validate_withZeroMaxClips_shouldFail() {
    let mut config = Config::default();
    config.max_clips = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroMaxClips)));
}

/// Test rejection of a negative scorer weight
#[test]
fn test_validate_withNegativeWeight_shouldFail() {
    let mut config = Config::default();
    config.weights.keyword = -1.0;
    match config.validate() {
        Err(ConfigError::InvalidWeight { name, value }) => {
            assert_eq!(name, "keyword");
            assert_eq!(value, -1.0);
        }
        other => panic!("Expected InvalidWeight, got {:?}", other),
    }
}

/// Test rejection of a NaN threshold
#[test]
fn test_validate_withNanPauseThreshold_shouldFail() {
    let mut config = Config::default();
    config.segmentation.pause_threshold_sec = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold { name: "pause_threshold_sec", .. })
    ));
}

/// Test rejection of an out-of-range confidence floor
#[test]
fn test_validate_withConfidenceFloorAboveOne_shouldFail() {
    let mut config = Config::default();
    config.segmentation.min_confidence = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold { name: "min_confidence", .. })
    ));
}

/// Test aspect ratio parsing for all presets
#[test]
fn test_aspect_from_str_withValidRatios_shouldParse() {
    assert_eq!(AspectRatio::from_str("9:16").unwrap(), AspectRatio::Vertical);
    assert_eq!(AspectRatio::from_str("1:1").unwrap(), AspectRatio::Square);
    assert_eq!(
        AspectRatio::from_str("16:9").unwrap(),
        AspectRatio::Landscape
    );
}

/// Test aspect ratio parsing rejects unknown strings
#[test]
fn test_aspect_from_str_withMalformedRatio_shouldFail() {
    assert!(AspectRatio::from_str("4:3").is_err());
    assert!(AspectRatio::from_str("vertical").is_err());
}

/// Test aspect preset resolutions
#[test]
fn test_aspect_target_resolution_withPresets_shouldMatchTable() {
    assert_eq!(AspectRatio::Vertical.target_resolution(), (1080, 1920));
    assert_eq!(AspectRatio::Square.target_resolution(), (1080, 1080));
    assert_eq!(AspectRatio::Landscape.target_resolution(), (1920, 1080));
}

/// Test that an empty JSON object deserializes to the defaults
#[test]
fn test_config_deserialize_withEmptyObject_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.clip_length_sec, 15);
    assert_eq!(config.max_clips, 6);
    assert_eq!(config.style, "default");
    assert_eq!(config.captions.max_chars_per_cue, 42);
    assert!(!config.keywords.is_empty());
}

/// Test that partial JSON only overrides the named fields
#[test]
fn test_config_deserialize_withPartialJson_shouldKeepOtherDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"clip_length_sec": 30, "aspect": "1:1"}"#).unwrap();
    assert_eq!(config.clip_length_sec, 30);
    assert_eq!(config.aspect, AspectRatio::Square);
    assert_eq!(config.max_clips, 6);
    assert_eq!(config.output.video_codec, "libx264");
}

/// Test config serialization round trip
#[test]
fn test_config_roundtrip_withCustomValues_shouldPreserveThem() {
    let mut config = Config::default();
    config.max_clips = 3;
    config.weights.speech_density = 2.0;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.max_clips, 3);
    assert_eq!(parsed.weights.speech_density, 2.0);
}
