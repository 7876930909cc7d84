use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Record, RecordField};
use crate::store::{RecordStore, StorageBackend};
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes the full sequence to `dest` as CSV: the column titles, then one row
/// per record in stored order.
///
/// Without `escape`, fields are joined with bare commas, so a value containing
/// a comma, quote or newline yields a row that does not parse back. With
/// `escape`, such values are quoted RFC 4180 style.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    dest: &Path,
    escape: bool,
) -> Result<CmdResult> {
    let records = store.records();

    let file = File::create(dest).map_err(RosterError::Io)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, &records, escape)?;
    writer.flush().map_err(RosterError::Io)?;
    info!(path = %dest.display(), count = records.len(), escape, "exported records");

    let mut result = CmdResult::default().with_written_paths(vec![dest.to_path_buf()]);
    if records.is_empty() {
        result.add_message(CmdMessage::warning("No records to export, wrote header only."));
    }
    result.add_message(CmdMessage::success(format!(
        "Data exported to {}",
        dest.display()
    )));
    Ok(result)
}

/// `export_YYYYMMDD_HHMMSS.csv` for the given moment.
pub fn default_filename(now: DateTime<Local>) -> String {
    format!("export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

pub fn write_csv<W: Write>(mut writer: W, records: &[Record], escape: bool) -> Result<()> {
    let header: Vec<&str> = RecordField::ALL.iter().map(|f| f.title()).collect();
    writeln!(writer, "{}", header.join(",")).map_err(RosterError::Io)?;

    for record in records {
        let row: Vec<String> = RecordField::ALL
            .iter()
            .map(|f| csv_field(&f.value(record), escape).into_owned())
            .collect();
        writeln!(writer, "{}", row.join(",")).map_err(RosterError::Io)?;
    }
    Ok(())
}

fn csv_field(value: &str, escape: bool) -> Cow<'_, str> {
    if escape && value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::store::MemBackend;
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![
            Record::new("AB1234", "Jane Doe", "Engineer", "R&D")
                .with_email("jane@example.com")
                .with_phone("+15551234567")
                .with_hire_date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()),
            Record::new("CD5678", "Roe, John", "Analyst \"Senior\"", "Finance")
                .with_status(Status::OnLeave)
                .with_hire_date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()),
        ]
    }

    fn csv(records: &[Record], escape: bool) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records, escape).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_rows_in_fixed_order() {
        let out = csv(&records()[..1], false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,Name,Role,Department,Email,Phone,Hire Date,Status",
                "AB1234,Jane Doe,Engineer,R&D,jane@example.com,+15551234567,2023-01-15,Active",
            ]
        );
    }

    #[test]
    fn unescaped_by_default() {
        let out = csv(&records(), false);
        assert!(out.contains("CD5678,Roe, John,Analyst \"Senior\",Finance,,,2020-06-01,On Leave"));
    }

    #[test]
    fn escaping_quotes_only_where_needed() {
        let out = csv(&records(), true);
        assert!(out.contains(
            "CD5678,\"Roe, John\",\"Analyst \"\"Senior\"\"\",Finance,,,2020-06-01,On Leave"
        ));
        assert!(out.contains("AB1234,Jane Doe,Engineer,R&D,"));
    }

    #[test]
    fn empty_store_writes_header_only() {
        assert_eq!(
            csv(&[], false),
            "ID,Name,Role,Department,Email,Phone,Hire Date,Status\n"
        );
    }

    #[test]
    fn default_filename_uses_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_filename(now), "export_20240309_140507.csv");
    }

    #[test]
    fn run_writes_file_and_reports_path() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.csv");
        let store = RecordStore::open(MemBackend::with_records(records())).unwrap();

        let result = run(&store, &dest, false).unwrap();

        assert_eq!(result.written_paths, vec![dest.clone()]);
        let written = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
