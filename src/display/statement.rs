//! Statement upload display formatting

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_file_size, format_relative_time};
use crate::models::{Account, StatementFormat, StatementUpload};

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// List statement uploads, newest first
pub fn format_statement_list(
    uploads: &[StatementUpload],
    accounts: &[Account],
    now: &DateTime<Utc>,
) -> String {
    if uploads.is_empty() {
        return "No statements uploaded.\n".to_string();
    }

    let mut sorted: Vec<&StatementUpload> = uploads.iter().collect();
    sorted.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

    let rows: Vec<StatementRow> = sorted
        .into_iter()
        .map(|u| StatementRow {
            file: u.file_name.clone(),
            format: u.format.to_string(),
            size: format_file_size(u.size_bytes),
            account: u
                .account_id
                .and_then(|id| accounts.iter().find(|a| a.id == id))
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            uploaded: format_relative_time(&u.uploaded_at, now),
            status: u.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// The accepted formats, one per line
pub fn format_supported_formats() -> String {
    StatementFormat::ALL
        .iter()
        .map(|f| format!("  .{:<4} {}\n", f.extension(), f.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_statement_list() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();
        let uploads = vec![
            StatementUpload::queued("feb.csv", StatementFormat::Csv, 2048, None, now - Duration::days(30)),
            StatementUpload::queued("mar.pdf", StatementFormat::Pdf, 512, None, now - Duration::minutes(3)),
        ];

        let output = format_statement_list(&uploads, &[], &now);
        let mar = output.find("mar.pdf").unwrap();
        let feb = output.find("feb.csv").unwrap();
        assert!(mar < feb);
        assert!(output.contains("3m ago"));
        assert!(output.contains("2.0 KB"));
        assert!(output.contains("Queued"));
    }

    #[test]
    fn test_empty_statement_list() {
        let now = Utc::now();
        assert_eq!(format_statement_list(&[], &[], &now), "No statements uploaded.\n");
    }

    #[test]
    fn test_supported_formats() {
        let output = format_supported_formats();
        assert!(output.contains(".csv"));
        assert!(output.contains("Quicken Financial Exchange"));
        assert_eq!(output.lines().count(), 4);
    }
}
