use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use super::convert::{convert_row, convert_row_split};
use super::delimiter::{Delimiter, Splitter};
use super::error::{LoadError, Result};
use super::model::{FeatureMatrix, TargetVector};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every line of `reader` into a feature matrix.
///
/// The reader is consumed and dropped before this returns, on success or
/// error. Columns = width of the first line, plus one with `intercept`.
pub fn load_matrix<R: Read>(
    reader: R,
    delimiter: &Delimiter,
    intercept: bool,
) -> Result<FeatureMatrix> {
    let splitter = delimiter.compile()?;
    let rows = read_rows(BufReader::new(reader), &splitter, |tokens, line| {
        convert_row(tokens, intercept, line)
    })?;

    let features = assemble(&rows);
    log::debug!(
        "loaded {}x{} matrix (delimiter {delimiter}, intercept={intercept})",
        features.nrows(),
        features.ncols()
    );
    Ok(features)
}

/// Load every line of `reader`, treating the last column as the target.
///
/// Returns `(features, target)` where `target` always has exactly one
/// column and as many rows as `features`.
pub fn load_matrix_with_target<R: Read>(
    reader: R,
    delimiter: &Delimiter,
    intercept: bool,
) -> Result<(FeatureMatrix, TargetVector)> {
    let splitter = delimiter.compile()?;
    let rows = read_rows(BufReader::new(reader), &splitter, |tokens, line| {
        convert_row_split(tokens, intercept, line)
    })?;

    let (feature_rows, targets): (Vec<Vec<f64>>, Vec<f64>) = rows.into_iter().unzip();
    let features = assemble(&feature_rows);
    let target = Array1::from_vec(targets).insert_axis(Axis(1));

    log::debug!(
        "loaded {}x{} matrix with {}x1 target (delimiter {delimiter}, intercept={intercept})",
        features.nrows(),
        features.ncols(),
        target.nrows()
    );
    Ok((features, target))
}

/// [`load_matrix`] on a file. The file is closed before this returns.
pub fn load_matrix_from_path(
    path: impl AsRef<Path>,
    delimiter: &Delimiter,
    intercept: bool,
) -> Result<FeatureMatrix> {
    load_matrix(open(path.as_ref())?, delimiter, intercept)
}

/// [`load_matrix_with_target`] on a file. The file is closed before this
/// returns.
pub fn load_matrix_with_target_from_path(
    path: impl AsRef<Path>,
    delimiter: &Delimiter,
    intercept: bool,
) -> Result<(FeatureMatrix, TargetVector)> {
    load_matrix_with_target(open(path.as_ref())?, delimiter, intercept)
}

fn open(path: &Path) -> Result<File> {
    log::debug!("opening {}", path.display());
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Line loop
// ---------------------------------------------------------------------------

/// Read, trim, split and convert every line, enforcing a constant token
/// width. Rows are buffered in input order because the row count is only
/// known once the stream is exhausted.
fn read_rows<B, T, F>(reader: B, splitter: &Splitter, mut convert: F) -> Result<Vec<T>>
where
    B: BufRead,
    F: FnMut(&[&str], usize) -> Result<T>,
{
    let mut rows = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let tokens = splitter.split(line.trim());

        match width {
            None => width = Some(tokens.len()),
            Some(expected) if expected != tokens.len() => {
                return Err(LoadError::Format {
                    line: line_no,
                    expected,
                    actual: tokens.len(),
                });
            }
            Some(_) => {}
        }

        rows.push(convert(&tokens, line_no)?);
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Matrix assembly
// ---------------------------------------------------------------------------

/// Allocate an exact-size matrix and copy each buffered row into place.
/// All rows have the same length, checked by [`read_rows`].
fn assemble(rows: &[Vec<f64>]) -> Array2<f64> {
    let ncols = rows.first().map_or(0, Vec::len);
    let mut matrix = Array2::zeros((rows.len(), ncols));
    for (mut dst, src) in matrix.rows_mut().into_iter().zip(rows) {
        dst.assign(&ArrayView1::from(src.as_slice()));
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Cursor;

    const SAMPLE: &str = "1,2,3\n4,5,6";

    fn comma() -> Delimiter {
        Delimiter::default()
    }

    #[test]
    fn plain_without_intercept() {
        let m = load_matrix(Cursor::new(SAMPLE), &comma(), false).unwrap();
        assert_eq!(m, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn plain_with_intercept() {
        let m = load_matrix(Cursor::new(SAMPLE), &comma(), true).unwrap();
        assert_eq!(m, array![[1.0, 1.0, 2.0, 3.0], [1.0, 4.0, 5.0, 6.0]]);
    }

    #[test]
    fn split_with_intercept() {
        let (x, y) = load_matrix_with_target(Cursor::new(SAMPLE), &comma(), true).unwrap();
        assert_eq!(x, array![[1.0, 1.0, 2.0], [1.0, 4.0, 5.0]]);
        assert_eq!(y, array![[3.0], [6.0]]);
    }

    #[test]
    fn split_without_intercept() {
        let (x, y) = load_matrix_with_target(Cursor::new(SAMPLE), &comma(), false).unwrap();
        assert_eq!(x, array![[1.0, 2.0], [4.0, 5.0]]);
        assert_eq!(y, array![[3.0], [6.0]]);
    }

    #[test]
    fn width_mismatch_names_line_and_widths() {
        let input = "1,2,3\n4,5";
        for err in [
            load_matrix(Cursor::new(input), &comma(), false).unwrap_err(),
            load_matrix(Cursor::new(input), &comma(), true).unwrap_err(),
            load_matrix_with_target(Cursor::new(input), &comma(), true).unwrap_err(),
        ] {
            match err {
                LoadError::Format {
                    line,
                    expected,
                    actual,
                } => {
                    assert_eq!((line, expected, actual), (2, 3, 2));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn blank_line_is_not_skipped() {
        let err = load_matrix(Cursor::new("1\n\n2"), &comma(), false).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, ref token } if token.is_empty()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let m = load_matrix(Cursor::new("  1,2  \r\n\t3,4\n"), &comma(), false).unwrap();
        assert_eq!(m, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn empty_input_gives_empty_matrices() {
        let m = load_matrix(Cursor::new(""), &comma(), true).unwrap();
        assert_eq!(m.dim(), (0, 0));
        let (x, y) = load_matrix_with_target(Cursor::new(""), &comma(), true).unwrap();
        assert_eq!(x.dim(), (0, 0));
        assert_eq!(y.dim(), (0, 1));
    }

    #[test]
    fn single_column_split_is_format_error() {
        let err = load_matrix_with_target(Cursor::new("1\n2"), &comma(), true).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format {
                line: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn pattern_delimiter() {
        let d = Delimiter::pattern(r"[\s,]+");
        let m = load_matrix(Cursor::new("1 2,3\n4,, 5  6"), &d, false).unwrap();
        assert_eq!(m, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn bad_pattern_fails_before_reading() {
        let err = load_matrix(Cursor::new(SAMPLE), &Delimiter::pattern("["), false).unwrap_err();
        assert!(matches!(err, LoadError::Pattern(_)));
    }

    #[test]
    fn io_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }
        let err = load_matrix(Broken, &comma(), false).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    struct Tracked(Cursor<&'static str>, std::rc::Rc<()>);

    impl Read for Tracked {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.0.read(buf)
        }
    }

    #[test]
    fn reader_is_dropped_on_parse_error() {
        let guard = std::rc::Rc::new(());
        let reader = Tracked(Cursor::new("1,2\nx,y"), guard.clone());
        let err = load_matrix(reader, &comma(), false).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
        assert_eq!(std::rc::Rc::strong_count(&guard), 1);
    }

    #[test]
    fn reader_is_dropped_on_format_error() {
        let guard = std::rc::Rc::new(());
        let reader = Tracked(Cursor::new("1,2\n3"), guard.clone());
        let err = load_matrix(reader, &comma(), false).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format {
                line: 2,
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(std::rc::Rc::strong_count(&guard), 1);

        let guard = std::rc::Rc::new(());
        let reader = Tracked(Cursor::new("1,2\n3"), guard.clone());
        assert!(load_matrix_with_target(reader, &comma(), true).is_err());
        assert_eq!(std::rc::Rc::strong_count(&guard), 1);
    }

    #[test]
    fn trailing_delimiters_are_ignored() {
        for input in ["1,2,3,\n4,5,6,", "1,2,3,\n4,5,6", "1,2,3\n4,5,6,,"] {
            let m = load_matrix(Cursor::new(input), &comma(), false).unwrap();
            assert_eq!(m, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

            let (x, y) = load_matrix_with_target(Cursor::new(input), &comma(), true).unwrap();
            assert_eq!(x, array![[1.0, 1.0, 2.0], [1.0, 4.0, 5.0]]);
            assert_eq!(y, array![[3.0], [6.0]]);
        }
    }

    #[test]
    fn zero_width_pattern_splits_every_character() {
        let m = load_matrix(Cursor::new("12\n34"), &Delimiter::pattern(r"\s*"), false).unwrap();
        assert_eq!(m, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_matrix_from_path("/definitely/not/here.txt", &comma(), false).unwrap_err();
        match err {
            LoadError::Open { path, .. } => assert!(path.ends_with("here.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
