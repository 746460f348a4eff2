use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

/// Error types for reading the results file
#[derive(Debug)]
pub enum SamplePointsError {
    Io(io::Error),
    Parse {
        line: usize,
        content: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for SamplePointsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SamplePointsError::Io(err) => write!(f, "failed to read sample points: {}", err),
            SamplePointsError::Parse {
                line,
                content,
                source,
            } => write!(
                f,
                "line {}: '{}' is not a floating-point number ({})",
                line, content, source
            ),
        }
    }
}

impl std::error::Error for SamplePointsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SamplePointsError::Io(err) => Some(err),
            SamplePointsError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for SamplePointsError {
    fn from(err: io::Error) -> Self {
        SamplePointsError::Io(err)
    }
}

/// read the results file: one float per line, duplicates removed, first-seen order kept.
/// The file is closed as soon as reading is done.
pub fn load_sample_points(path: &Path) -> Result<Vec<f64>, SamplePointsError> {
    let raw = {
        let file = File::open(path)?;
        parse_sample_points(BufReader::new(file))?
    };
    let n_raw = raw.len();
    let points = dedup_preserving_order(raw);
    info!(
        "loaded {} sample points from {} ({} duplicates dropped)",
        points.len(),
        path.display(),
        n_raw - points.len()
    );
    Ok(points)
}

/// parse every non-blank line as f64; the first bad line aborts with its 1-based number
pub fn parse_sample_points<R: BufRead>(reader: R) -> Result<Vec<f64>, SamplePointsError> {
    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            debug!("skipping blank line {}", i + 1);
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|source| SamplePointsError::Parse {
                line: i + 1,
                content: trimmed.to_string(),
                source,
            })?;
        values.push(value);
    }
    Ok(values)
}

/// Remove values equal (==) to an earlier one. 0.0 and -0.0 count as the same value,
/// NaN is never equal to anything and so every NaN is kept.
pub fn dedup_preserving_order(values: Vec<f64>) -> Vec<f64> {
    let mut seen: HashSet<u64> = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|&v| {
            if v.is_nan() {
                return true;
            }
            let key = if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
            seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;

    #[test]
    fn test_duplicates_removed_in_order() {
        let input = "2.5\n3.14\n2.5\n3.9\n";
        let raw = parse_sample_points(Cursor::new(input)).unwrap();
        assert_eq!(raw, vec![2.5, 3.14, 2.5, 3.9]);
        assert_eq!(dedup_preserving_order(raw), vec![2.5, 3.14, 3.9]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let input = "  2.5  \n\t3.0\r\n3.5   \n";
        let raw = parse_sample_points(Cursor::new(input)).unwrap();
        assert_eq!(raw, vec![2.5, 3.0, 3.5]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "2.5\n\n   \n3.0\n";
        let raw = parse_sample_points(Cursor::new(input)).unwrap();
        assert_eq!(raw, vec![2.5, 3.0]);
    }

    #[test]
    fn test_empty_input() {
        let raw = parse_sample_points(Cursor::new("")).unwrap();
        assert!(raw.is_empty());
        assert!(dedup_preserving_order(raw).is_empty());
    }

    #[test]
    fn test_non_numeric_line_fails() {
        let input = "2.5\nabc\n3.0\n";
        let err = parse_sample_points(Cursor::new(input)).unwrap_err();
        match err {
            SamplePointsError::Parse { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_signed_zero_is_one_value() {
        assert_eq!(dedup_preserving_order(vec![0.0, -0.0, 1.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn test_nan_never_deduplicated() {
        let out = dedup_preserving_order(vec![f64::NAN, 2.0, f64::NAN]);
        assert_eq!(out.len(), 3);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.0);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "3.1\n3.2\n3.1\n3.2\n3.3\n").unwrap();
        drop(file);

        let first = load_sample_points(&path).unwrap();
        assert_eq!(first, vec![3.1, 3.2, 3.3]);
        let second = load_sample_points(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_sample_points(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SamplePointsError::Io(_)));
    }
}
