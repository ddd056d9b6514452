//! Bulk loading of events from log files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::category::EventCategory;
use crate::event::Event;
use crate::extract::{ExtractError, extract};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Malformed(#[from] ExtractError),
}

/// What to do with a line that matched a category label but failed field
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the whole run (source behavior; no partial report).
    #[default]
    Fail,
    /// Warn and skip the line.
    Skip,
}

/// Reads every line of every file and collects the classified events.
///
/// Lines matching no category are skipped. An unreadable file aborts the
/// run; malformed matched lines are handled per `policy`. The returned
/// order is unspecified, the pairing engine re-sorts by timestamp.
pub fn load_events(
    files: &[PathBuf],
    categories: &[EventCategory],
    policy: MalformedPolicy,
) -> Result<Vec<Event>, LoadError> {
    let mut events = Vec::new();
    for path in files {
        load_file(path, categories, policy, &mut events)?;
        tracing::debug!(path = %path.display(), "scanned log file");
    }
    Ok(events)
}

fn load_file(
    path: &Path,
    categories: &[EventCategory],
    policy: MalformedPolicy,
    events: &mut Vec<Event>,
) -> Result<(), LoadError> {
    fn io_err(path: &Path, source: std::io::Error) -> LoadError {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    let file = File::open(path).map_err(|e| io_err(path, e))?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| io_err(path, e))?;
        match extract(&line, categories) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(err) => match policy {
                MalformedPolicy::Fail => return Err(err.into()),
                MalformedPolicy::Skip => {
                    tracing::warn!(error = %err, "skipping malformed log line");
                }
            },
        }
    }
    Ok(())
}
