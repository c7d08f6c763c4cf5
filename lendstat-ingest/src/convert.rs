//! Convert a raw platform export into the normalized statement layout.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rewrite `source` (the platform's newest-first export) as a
/// chronological statement at `dest`, with the header row replaced by
/// column indices so downstream readers can address fields positionally.
///
/// Returns the number of data rows written.
pub fn convert_statement(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<usize> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(source)
        .with_context(|| format!("opening {}", source.display()))?;

    let width = rdr
        .headers()
        .with_context(|| format!("reading header of {}", source.display()))?
        .len();

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let mut wtr = csv::Writer::from_path(dest)
        .with_context(|| format!("writing {}", dest.display()))?;

    let header: Vec<String> = (0..width).map(|i| i.to_string()).collect();
    wtr.write_record(&header)?;
    for row in rows.iter().rev() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::read_statement;
    use lendstat_core::Category;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_convert_reverses_rows_and_reheads() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("export.csv");
        let dest = dir.path().join("statement.csv");

        fs::write(
            &source,
            "Date,Type,A,B,C,D,E,F,Amount\n\
             01/02/2020,Interest,,,,,,,3.0\n\
             15/01/2020,Interest,,,,,,,5.0\n\
             01/01/2020,Deposit,,,,,,,100.0\n",
        )
        .unwrap();

        let rows = convert_statement(&source, &dest).unwrap();
        assert_eq!(rows, 3);

        let written = fs::read_to_string(&dest).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("0,1,2,3,4,5,6,7,8"));
        assert!(lines.next().unwrap().starts_with("01/01/2020,Deposit"));
        assert!(lines.next().unwrap().starts_with("15/01/2020,Interest"));
        assert!(lines.next().unwrap().starts_with("01/02/2020,Interest"));
    }

    #[test]
    fn test_converted_file_round_trips_through_reader() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("export.csv");
        let dest = dir.path().join("data").join("statement.csv");

        fs::write(
            &source,
            "Date,Type,A,B,C,D,E,F,Amount\n\
             15/01/2020,Interest,,,,,,,5.0\n\
             01/01/2020,Deposit,,,,,,,100.0\n",
        )
        .unwrap();

        convert_statement(&source, &dest).unwrap();
        let statement = read_statement(&dest).unwrap();

        assert_eq!(statement.entries.len(), 2);
        // Chronological after conversion
        assert_eq!(statement.entries[0].category, Category::Deposit);
        assert_eq!(statement.entries[1].category, Category::Interest);
        assert!(statement.entries[0].date < statement.entries[1].date);
    }

    #[test]
    fn test_convert_missing_source() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("statement.csv");
        assert!(convert_statement(dir.path().join("absent.csv"), &dest).is_err());
    }
}
