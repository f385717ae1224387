use crate::source::envelope::EventEnvelope;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to read event file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Read one event envelope per file.
pub fn read_event_files(paths: &[PathBuf]) -> Result<Vec<EventEnvelope>, ReaderError> {
    let mut events = Vec::with_capacity(paths.len());
    for path in paths {
        let body = fs::read(path).map_err(|source| ReaderError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = body.len(), "Read event file");
        events.push(EventEnvelope::new(body));
    }
    Ok(events)
}

/// Read one event envelope per non-empty line from the given reader.
///
/// This is the stdin binding: each line is treated as one complete message,
/// the way the event trigger hands over one payload per event.
pub fn read_events_from<R: BufRead>(reader: R) -> Result<Vec<EventEnvelope>, ReaderError> {
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(EventEnvelope::from(line));
    }
    Ok(events)
}
