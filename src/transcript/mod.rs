//! Serialized call transcripts for debugging and golden-file comparison.
//!
//! A recorded call log can be exported as a YAML transcript file and read
//! back later. Transcripts serialize the calls only; comparing one against
//! a checked-in golden file is left to the host test.

pub mod format;
pub mod writer;

pub use format::{Entry, Transcript};
pub use writer::TranscriptWriter;

use std::path::Path;

/// Loads a transcript from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Transcript, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read transcript file {}: {e}", path.display()))?;
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse transcript file {}: {e}", path.display()))
}
