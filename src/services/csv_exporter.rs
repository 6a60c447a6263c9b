use anyhow::{Context, Result};
use std::path::Path;

use crate::models::MoneylineRecord;

pub const CSV_HEADER: [&str; 2] = ["team", "moneyline"];

/// Write `records` to `path` as `team,moneyline` CSV, replacing any existing
/// file. The header row is written even when there are no records.
pub fn write_moneylines(path: &Path, records: &[MoneylineRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }

    // Header is written by hand so an empty run still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {} for writing", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} moneylines to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_back(path: &Path) -> Vec<MoneylineRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        assert_eq!(reader.headers().unwrap(), &csv::StringRecord::from(vec!["team", "moneyline"]));
        reader.deserialize().map(|row| row.unwrap()).collect()
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moneylines.csv");
        let records = vec![
            MoneylineRecord::new("KC Chiefs", "-166"),
            MoneylineRecord::new("BAL Ravens", "+140"),
            MoneylineRecord::new("St. Louis, \"Old\" Rams", "+1000"),
        ];

        write_moneylines(&path, &records).unwrap();

        assert_eq!(read_back(&path), records);
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_moneylines(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "team,moneyline\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moneylines.csv");
        std::fs::write(&path, "stale,data\nfrom,yesterday\nand,more\n").unwrap();

        write_moneylines(&path, &[MoneylineRecord::new("DET Lions", "-240")]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "team,moneyline\nDET Lions,-240\n");
    }

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("nfl.csv");

        write_moneylines(&path, &[MoneylineRecord::new("SF 49ers", "-300")]).unwrap();

        assert_eq!(read_back(&path).len(), 1);
    }
}
