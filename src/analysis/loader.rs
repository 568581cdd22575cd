//! CSV loading for transmission logs

use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::core::constants::columns;
use crate::core::error::{BwlatError, Result};
use crate::core::types::{Record, Series, SeriesKind};

/// Load one log from a CSV file with a `stamp,size,latency` header.
pub fn load_series<P: AsRef<Path>>(kind: SeriesKind, path: P) -> Result<Series> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BwlatError::Io(io::Error::new(
            e.kind(),
            format!("could not open {} log '{}': {e}", kind, path.display()),
        ))
    })?;
    load_series_from_reader(kind, &path.display().to_string(), file)
}

/// Load one log from any reader. `source_name` only shows up in errors.
///
/// Required columns may appear in any order and extra columns are ignored.
/// A header-only input yields an empty series.
pub fn load_series_from_reader<R: Read>(
    kind: SeriesKind,
    source_name: &str,
    reader: R,
) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| classify(source_name, None, e))?
        .clone();
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(BwlatError::MalformedInput {
                source_name: source_name.to_string(),
                message: format!("missing required column '{required}'"),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row.map_err(|e| classify(source_name, Some(&headers), e))?);
    }

    debug!("Parsed {} {kind} record(s) from {source_name}", records.len());
    Ok(Series::new(kind, records))
}

/// Map a csv error onto our error type, naming the offending line and column
fn classify(
    source_name: &str,
    headers: Option<&csv::StringRecord>,
    err: csv::Error,
) -> BwlatError {
    let line = err.position().map(|pos| pos.line());
    let message = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => {
            let column = de
                .field()
                .and_then(|index| headers.and_then(|h| h.get(index as usize)));
            match column {
                Some(column) => format!("column '{column}': {}", de.kind()),
                None => de.kind().to_string(),
            }
        }
        _ => err.to_string(),
    };

    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => BwlatError::Io(io_err),
        _ => BwlatError::MalformedInput {
            source_name: source_name.to_string(),
            message: match line {
                Some(line) => format!("line {line}: {message}"),
                None => message,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(input: &str) -> Result<Series> {
        load_series_from_reader(SeriesKind::Odometry, "test.csv", input.as_bytes())
    }

    #[test]
    fn test_load_basic() -> Result<()> {
        let series = load("stamp,size,latency\n0,1000,0.01\n1,2000,0.02\n")?;

        assert_eq!(series.kind(), SeriesKind::Odometry);
        assert_eq!(series.len(), 2);
        assert_eq!(series.records()[0], Record::new(0.0, 1000, 0.01));
        assert_eq!(series.records()[1], Record::new(1.0, 2000, 0.02));
        Ok(())
    }

    #[test]
    fn test_load_reordered_and_extra_columns() -> Result<()> {
        let series = load("latency,extra,stamp,size\n0.5,abc,1733900000.25,42\n")?;

        assert_eq!(series.records(), &[Record::new(1733900000.25, 42, 0.5)]);
        Ok(())
    }

    #[test]
    fn test_load_header_only_yields_empty_series() -> Result<()> {
        let series = load("stamp,size,latency\n")?;
        assert!(series.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_missing_column() {
        let err = load("stamp,latency\n0,0.01\n").unwrap_err();

        match err {
            BwlatError::MalformedInput {
                source_name,
                message,
            } => {
                assert_eq!(source_name, "test.csv");
                assert_eq!(message, "missing required column 'size'");
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_load_non_numeric_value() {
        let err = load("stamp,size,latency\n0,1000,0.01\n1,lots,0.02\n").unwrap_err();

        match err {
            BwlatError::MalformedInput { message, .. } => {
                assert!(message.contains("line 3"), "message was: {message}");
                assert!(message.contains("'size'"), "message was: {message}");
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_load_fractional_size_is_malformed() {
        let err = load("stamp,size,latency\n0,10.5,0.01\n").unwrap_err();
        assert!(matches!(err, BwlatError::MalformedInput { .. }));
    }

    #[test]
    fn test_load_short_row_is_malformed() {
        let err = load("stamp,size,latency\n0,1000\n").unwrap_err();
        assert!(matches!(err, BwlatError::MalformedInput { .. }));
    }

    #[test]
    fn test_load_series_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"stamp,size,latency\n5.0,700,0.007\n")?;

        let series = load_series(SeriesKind::Images, file.path())?;
        assert_eq!(series.kind(), SeriesKind::Images);
        assert_eq!(series.stamps(), vec![5.0]);
        Ok(())
    }

    #[test]
    fn test_load_series_missing_file() {
        let err = load_series(SeriesKind::Images, "/definitely/not/here.csv").unwrap_err();

        match err {
            BwlatError::Io(io_err) => {
                assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
                assert!(io_err.to_string().contains("/definitely/not/here.csv"));
            }
            other => panic!("Expected Io, got {other:?}"),
        }
    }
}
