use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::PlotError;

/// Header given to the leading row index column, so it can never be
/// mistaken for one of the data columns.
const INDEX_COLUMN: &str = "__index";

/// Columns the chart reads, by header name.
pub const REQUIRED_COLUMNS: [&str; 3] = ["size", "time", "executable"];

/// One measurement: how long `executable` took to render an image of `size`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    pub size: f64,
    pub time: f64,
    pub executable: String,
}

/// # File reader
/// * `path` - The location of the benchmark results, usually `benchmark.csv`
///
/// Fails if the file is missing, a required column is absent or a row
/// cannot be parsed. Nothing is returned for a partially readable file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<BenchmarkRecord>, PlotError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = from_reader(file)?;
    info!(
        "Loaded {} benchmark records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses comma separated benchmark results with a header row. The first
/// column is the row index and is skipped.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BenchmarkRecord>, PlotError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = index_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(row.deserialize::<BenchmarkRecord>(Some(&headers))?);
    }
    Ok(records)
}

/// Renames the first header to [`INDEX_COLUMN`] and checks that every
/// column in [`REQUIRED_COLUMNS`] is still present.
fn index_headers(headers: &csv::StringRecord) -> Result<csv::StringRecord, PlotError> {
    let headers = headers
        .iter()
        .enumerate()
        .map(|(i, name)| if i == 0 { INDEX_COLUMN } else { name })
        .collect::<csv::StringRecord>();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|name| name == **column))
    {
        return Err(PlotError::MissingColumn(missing.to_string()));
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::{from_reader, read, BenchmarkRecord};
    use crate::error::PlotError;
    use pretty_assertions::assert_eq;

    const BENCHMARK_CSV: &str = ",size,time,executable
0,512,0.021,cpu
1,1024,0.083,cpu
2,512,0.004,single_core
3,1024,0.012,single_core
4,1024,0.002,multi_core_nullary
";

    #[test]
    fn test_read_all_rows() {
        let records = from_reader(BENCHMARK_CSV.as_bytes()).unwrap();
        assert_eq!(5, records.len(), "Every data row must become a record");
        assert_eq!(
            BenchmarkRecord {
                size: 512.0,
                time: 0.021,
                executable: "cpu".to_string(),
            },
            records[0]
        );
        assert_eq!("multi_core_nullary", records[4].executable);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "id,executable,width,size,time\n7,cpu,64,64,0.5\n";
        let records = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            vec![BenchmarkRecord {
                size: 64.0,
                time: 0.5,
                executable: "cpu".to_string(),
            }],
            records
        );
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let records = from_reader(",size,time,executable\n".as_bytes()).unwrap();
        assert!(records.is_empty(), "No rows means no records");
    }

    #[test]
    fn test_missing_column() {
        let csv = ",size,executable\n0,512,cpu\n";
        match from_reader(csv.as_bytes()) {
            Err(PlotError::MissingColumn(column)) => assert_eq!("time", column),
            other => panic!("Expected a missing 'time' column, got {:?}", other),
        }
    }

    #[test]
    fn test_index_column_does_not_count() {
        // the first column is always the index, even if it is named like a data column
        let csv = "size,time,executable\n512,0.02,cpu\n";
        match from_reader(csv.as_bytes()) {
            Err(PlotError::MissingColumn(column)) => assert_eq!("size", column),
            other => panic!("Expected a missing 'size' column, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(
            matches!(from_reader("".as_bytes()), Err(PlotError::MissingColumn(_))),
            "An empty file has no columns to plot"
        );
    }

    #[test]
    fn test_unparsable_time() {
        let csv = ",size,time,executable\n0,512,fast,cpu\n";
        assert!(
            matches!(from_reader(csv.as_bytes()), Err(PlotError::Csv(_))),
            "A non numeric time must fail the load"
        );
    }

    #[test]
    fn test_missing_file() {
        let path = "does/not/exist/benchmark.csv";
        match read(path) {
            Err(PlotError::Io { path: failed, .. }) => {
                assert_eq!(std::path::PathBuf::from(path), failed)
            }
            other => panic!("Expected an IO error for '{}', got {:?}", path, other),
        }
    }
}
