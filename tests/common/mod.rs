/*!
 * Common test utilities for the shortsmith test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use shortsmith::transcript::TranscriptWord;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small SRT transcript for parsing tests
pub fn sample_srt() -> &'static str {
    r#"1
00:00:01,000 --> 00:00:04,000
Here's the best tip.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#
}

/// Build a full-confidence transcript word
pub fn word(text: &str, start_sec: f64, end_sec: f64) -> TranscriptWord {
    TranscriptWord::new(text, start_sec, end_sec, 1.0)
}

/// Build a transcript word with an explicit confidence
pub fn word_with_confidence(
    text: &str,
    start_sec: f64,
    end_sec: f64,
    confidence: f64,
) -> TranscriptWord {
    TranscriptWord::new(text, start_sec, end_sec, confidence)
}

/// Build `count` evenly spaced words starting at `start_sec`, each
/// `word_sec` long with `gap_sec` silence between them
pub fn spaced_words(count: usize, start_sec: f64, word_sec: f64, gap_sec: f64) -> Vec<TranscriptWord> {
    (0..count)
        .map(|i| {
            let start = start_sec + i as f64 * (word_sec + gap_sec);
            word(&format!("word{}", i), start, start + word_sec)
        })
        .collect()
}

/// Build a sentence of words spanning [start_sec, end_sec] from the
/// given text, splitting evenly on whitespace
pub fn sentence(text: &str, start_sec: f64, end_sec: f64) -> Vec<TranscriptWord> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let step = (end_sec - start_sec) / tokens.len() as f64;
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let start = start_sec + i as f64 * step;
            word(t, start, start + step)
        })
        .collect()
}
