use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::AnalysisError;
use crate::load::table::Dataset;

/// Read a comma-delimited source into a [`Dataset`].
///
/// The first line names the fields; every following line must carry exactly
/// that many comma-separated values, or the whole load fails with
/// `MalformedRow`. Values are kept as raw strings with only the line
/// terminator stripped. Quoted or escaped delimiters are not supported.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    // 1) header line
    let mut header_line = String::new();
    reader.read_line(&mut header_line)?;
    let headers: Vec<String> = split_line(&header_line).map(str::to_string).collect();

    // 2) data lines, index-aligned against the header
    let mut rows = Vec::new();
    let mut line = String::new();
    let mut line_no = 1usize;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;

        let values: Vec<String> = split_line(&line).map(str::to_string).collect();
        if values.len() != headers.len() {
            return Err(AnalysisError::MalformedRow {
                line: line_no,
                expected: headers.len(),
                found: values.len(),
            });
        }
        rows.push(values);
    }

    info!(rows = rows.len(), columns = headers.len(), "loaded dataset");
    Ok(Dataset::new(headers, rows))
}

/// Split one line on the delimiter after stripping its terminator. No
/// further trimming: interior whitespace is data.
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split(',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_source(contents: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn round_trips_header_and_row() -> Result<()> {
        let file = write_source("A,B\n1,2\n")?;
        let data = load_dataset(file.path())?;

        assert_eq!(data.headers(), ["A", "B"]);
        assert_eq!(data.len(), 1);
        let record = data.records().next().unwrap();
        assert_eq!(record.field("A"), Some("1"));
        assert_eq!(record.field("B"), Some("2"));
        Ok(())
    }

    #[test]
    fn preserves_raw_values_and_crlf() -> Result<()> {
        let file = write_source("A,B\r\n 1,x y\r\n")?;
        let data = load_dataset(file.path())?;

        let record = data.records().next().unwrap();
        assert_eq!(record.field("A"), Some(" 1"));
        assert_eq!(record.field("B"), Some("x y"));
        Ok(())
    }

    #[test]
    fn missing_final_terminator_is_fine() -> Result<()> {
        let file = write_source("A,B\n1,2\n3,4")?;
        let data = load_dataset(file.path())?;
        assert_eq!(data.len(), 2);
        Ok(())
    }

    #[test]
    fn short_row_is_malformed() -> Result<()> {
        let file = write_source("A,B,C\n1,2\n")?;
        match load_dataset(file.path()) {
            Err(AnalysisError::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn long_row_is_malformed() -> Result<()> {
        let file = write_source("A,B\n1,2,3\n")?;
        assert!(matches!(
            load_dataset(file.path()),
            Err(AnalysisError::MalformedRow {
                line: 2,
                expected: 2,
                found: 3,
            })
        ));
        Ok(())
    }

    #[test]
    fn unopenable_path_is_source_not_found() {
        let err = load_dataset("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, AnalysisError::SourceNotFound { .. }));
    }
}
