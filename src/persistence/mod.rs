//! Save/load of the session record
//!
//! Features:
//! - Pretty-printed JSON, same layout as the game's data file
//! - Atomic replace (write tmp, then rename over the save)
//! - Missing file falls back to a default record

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::session::SessionRecord;

/// Default data file name
pub const DATA_FILENAME: &str = "data.json";

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Read a record. A malformed file is an error; the caller decides whether
/// to start fresh.
pub fn load(path: &Path) -> Result<SessionRecord, SessionError> {
    let json = fs::read_to_string(path)?;
    let record = SessionRecord::from_json(&json)?;
    log::info!(
        "Loaded session from {} (continue: {}, highscore: {})",
        path.display(),
        record.continue_available,
        record.highscore
    );
    Ok(record)
}

/// Read a record, or return the default one if the file does not exist
pub fn load_or_default(path: &Path) -> Result<SessionRecord, SessionError> {
    match load(path) {
        Err(SessionError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!("No session at {}, starting fresh", path.display());
            Ok(SessionRecord::default())
        }
        other => other,
    }
}

/// Write a record, replacing any previous save
pub fn save(path: &Path, record: &SessionRecord) -> Result<(), SessionError> {
    let json = record.to_json()?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    log::info!("Session saved to {}", path.display());
    Ok(())
}
