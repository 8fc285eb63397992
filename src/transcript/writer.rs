//! Writes call transcripts to YAML files.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Entry, Transcript};

/// Buffers logged calls and writes them as a YAML transcript file.
#[derive(Debug)]
pub struct TranscriptWriter {
    path: PathBuf,
    name: String,
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TranscriptWriter {
    /// Creates a writer that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), entries: Vec::new(), next_seq: 0 }
    }

    /// Logs one call. The `seq` field is assigned automatically.
    pub fn log(
        &mut self,
        double: impl Into<String>,
        operation: impl Into<String>,
        args: serde_json::Value,
    ) {
        let entry = Entry {
            seq: self.next_seq,
            double: double.into(),
            operation: operation.into(),
            args,
        };
        self.next_seq += 1;
        self.entries.push(entry);
    }

    /// Appends exported entries, reassigning sequence numbers so a
    /// transcript built from several doubles stays monotone.
    pub fn append(&mut self, entries: Vec<Entry>) {
        for entry in entries {
            self.log(entry.double, entry.operation, entry.args);
        }
    }

    /// Finishes the transcript and writes the YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let transcript =
            Transcript { name: self.name, recorded_at: Utc::now(), entries: self.entries };
        let yaml = serde_yaml::to_string(&transcript).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
