//! Statement upload model
//!
//! A bank statement file queued for import. Only the file's metadata is kept;
//! the contents are never read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::ids::{AccountId, StatementId};
use crate::error::LedgerError;

/// Statement file formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    Csv,
    Ofx,
    Qfx,
    Pdf,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 4] = [Self::Csv, Self::Ofx, Self::Qfx, Self::Pdf];

    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| LedgerError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Ofx => "ofx",
            Self::Qfx => "qfx",
            Self::Pdf => "pdf",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Csv => "Comma-separated values",
            Self::Ofx => "Open Financial Exchange",
            Self::Qfx => "Quicken Financial Exchange",
            Self::Pdf => "PDF statement",
        }
    }
}

impl FromStr for StatementFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "ofx" => Ok(Self::Ofx),
            "qfx" => Ok(Self::Qfx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(LedgerError::invalid_enum("statement format", s)),
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// Processing state of an uploaded statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    #[default]
    Queued,
    Processed,
    Failed,
}

impl fmt::Display for StatementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "Queued"),
            Self::Processed => write!(f, "Processed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// A statement file accepted for later processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementUpload {
    pub id: StatementId,
    pub file_name: String,
    pub format: StatementFormat,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub status: StatementStatus,
}

impl StatementUpload {
    pub fn queued(
        file_name: impl Into<String>,
        format: StatementFormat,
        size_bytes: u64,
        account_id: Option<AccountId>,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: StatementId::new(),
            file_name: file_name.into(),
            format,
            size_bytes,
            account_id,
            uploaded_at,
            status: StatementStatus::Queued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            StatementFormat::from_path(Path::new("march.csv")).unwrap(),
            StatementFormat::Csv
        );
        assert_eq!(
            StatementFormat::from_path(Path::new("/tmp/Export.QFX")).unwrap(),
            StatementFormat::Qfx
        );
        assert!(matches!(
            StatementFormat::from_path(Path::new("notes.txt")),
            Err(LedgerError::UnsupportedFormat(_))
        ));
        assert!(StatementFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_format_parse_accepts_dot() {
        assert_eq!(".ofx".parse::<StatementFormat>().unwrap(), StatementFormat::Ofx);
        assert_eq!(StatementFormat::Pdf.to_string(), "PDF");
    }

    #[test]
    fn test_queued_upload() {
        let at: DateTime<Utc> = "2025-03-01T09:30:00Z".parse().unwrap();
        let upload = StatementUpload::queued("march.pdf", StatementFormat::Pdf, 2048, None, at);
        assert_eq!(upload.status, StatementStatus::Queued);
        assert_eq!(upload.uploaded_at, at);

        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(json["format"], "pdf");
        assert!(json.get("account_id").is_none());
    }
}
