//! Ledger persistence (load/save to disk).
//!
//! The ledger is saved as pretty-printed JSON in `~/.hearth/ledger.json`.
//! Loading never fails: a missing or corrupt file degrades to the default
//! state, and missing fields within the JSON degrade field-wise.

use crate::ledger::LedgerState;
use std::fs;
use std::io;
use std::path::PathBuf;

const LEDGER_FILE: &str = "ledger.json";

/// Get the ~/.hearth/ directory path, creating it if needed.
pub fn hearth_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".hearth");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.hearth/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(hearth_dir()?.join(filename))
}

/// Load a JSON file from ~/.hearth/, returning `T::default()` if missing or
/// invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.hearth/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the ledger from disk, or return the default state if missing or
/// unreadable.
pub fn load_ledger() -> LedgerState {
    load_json_or_default(LEDGER_FILE)
}

/// Save the ledger to disk.
pub fn save_ledger(state: &LedgerState) -> io::Result<()> {
    save_json(LEDGER_FILE, state)
}
