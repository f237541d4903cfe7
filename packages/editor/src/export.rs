//! Settings export.
//!
//! A snapshot wraps the settings document with an export timestamp and a
//! format version. Hosts save it as `headline-settings.json`.

use crate::errors::{EditorError, EditorResult};
use chrono::{DateTime, SecondsFormat, Utc};
use headline_model::HeadlineSettings;
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0";

pub const EXPORT_FILE_NAME: &str = "headline-settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub settings: HeadlineSettings,
    /// ISO-8601 UTC with millisecond precision
    pub timestamp: String,
    pub version: String,
}

impl ExportSnapshot {
    pub fn new(settings: HeadlineSettings) -> Self {
        Self::at(settings, Utc::now())
    }

    pub fn at(settings: HeadlineSettings, time: DateTime<Utc>) -> Self {
        Self {
            settings,
            timestamp: time.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Pretty-printed JSON, two-space indented
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously produced by [`ExportSnapshot::to_json`]
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let snapshot: ExportSnapshot = serde_json::from_str(json)?;
        if snapshot.version != EXPORT_VERSION {
            return Err(EditorError::UnsupportedVersion {
                found: snapshot.version,
                expected: EXPORT_VERSION.to_string(),
            });
        }
        Ok(snapshot)
    }
}
