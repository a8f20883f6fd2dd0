//! Labeled Log File Loading
//!
//! Loads one or more `(path, label)` sources sequentially. A failure on one
//! file is reported and skipped; the batch fails only when nothing at all
//! could be loaded.

use crate::error::LoadError;
use crate::parser::parse_line;
use crate::reading::{Dataset, Reading};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One configured log source: a file path and the operating-condition label
/// attached to every reading parsed from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSource {
    pub path: PathBuf,
    pub label: String,
}

/// Load a single log file, attaching `label` to every parsed reading.
///
/// Lines that fail parsing are skipped silently (counted, not errors).
/// I/O failures propagate to the caller; `load_all` treats them as
/// non-fatal per file.
pub fn load_file(path: &Path, label: &str) -> io::Result<Vec<Reading>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut readings = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(parsed) => readings.push(parsed.labeled(label)),
            None => skipped += 1,
        }
    }

    debug!(
        "{}: {} readings parsed, {} lines skipped",
        path.display(),
        readings.len(),
        skipped
    );
    Ok(readings)
}

/// Load every configured source and concatenate the results in
/// configuration order (no cross-file sort or interleaving).
///
/// A missing or unreadable file is reported and contributes an empty
/// sequence. Fails with [`LoadError::EmptyDataset`] only when no source
/// yielded any reading.
pub fn load_all(sources: &[LogSource]) -> Result<Dataset, LoadError> {
    let mut dataset = Dataset::default();

    for source in sources {
        match load_file(&source.path, &source.label) {
            Ok(readings) => {
                info!(
                    "{}: {} readings loaded as '{}'",
                    source.path.display(),
                    readings.len(),
                    source.label
                );
                dataset.extend(readings);
            }
            Err(err) => {
                warn!("skipping {}: {}", source.path.display(), err);
            }
        }
    }

    if dataset.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    info!("total readings loaded: {}", dataset.len());
    Ok(dataset)
}
