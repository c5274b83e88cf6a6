//! Persistence of zone definitions.
//!
//! Zones are stored as their specification text, never as a compiled tree:
//! loading a file re-defines every zone, so a file written by an older
//! version is checked against the current predicate set.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::zone::{ZoneError, ZoneRegistry};

/// Errors emitted when reading or writing a zone file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid zone file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One persisted zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    pub spec: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

/// The persisted form of a registry, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneFile {
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
}

/// Outcome of [`ZoneRegistry::import`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Ids of zones that were defined
    pub loaded: Vec<String>,
    /// Records that were skipped, with the reason
    pub failed: Vec<(String, ZoneError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ZoneRegistry {
    /// Snapshot every user-defined zone.
    pub fn export(&self) -> ZoneFile {
        let zones = self
            .zones()
            .iter()
            .map(|zone| ZoneRecord {
                id: zone.id().to_string(),
                priority: zone.priority(),
                spec: zone.describe().to_string(),
                data: zone.data().clone(),
            })
            .collect();
        ZoneFile { zones }
    }

    /// Define every record in order, each replacing any zone of the same id
    /// whole. A record that fails to compile is skipped and logged; the rest
    /// still load.
    pub fn import(&self, file: ZoneFile) -> LoadReport {
        let mut report = LoadReport::default();
        for record in file.zones {
            match self.define_with_data(&record.id, record.priority, &record.spec, record.data) {
                Ok(_) => report.loaded.push(record.id),
                Err(e) => {
                    warn!(zone = %record.id, error = %e, "skipping zone");
                    report.failed.push((record.id, e));
                }
            }
        }
        info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "loaded zones"
        );
        report
    }
}

pub fn from_json(json: &str) -> Result<ZoneFile, StoreError> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_json(file: &ZoneFile) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(file)?)
}

/// Read a zone file. A missing file reads as empty.
pub fn load_path(path: impl AsRef<Path>) -> Result<ZoneFile, StoreError> {
    match fs::read_to_string(path.as_ref()) {
        Ok(json) => from_json(&json),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ZoneFile::default()),
        Err(err) => Err(StoreError::Io(err)),
    }
}

/// Write a zone file, replacing any previous one only once the new contents
/// are fully written.
pub fn save_path(path: impl AsRef<Path>, file: &ZoneFile) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = to_json(file)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
