use super::error::{LoadError, Result};

/// Value placed in front of every row when an intercept column is requested.
pub const INTERCEPT: f64 = 1.0;

/// Smallest row width usable in split mode: one feature plus the target.
pub const MIN_SPLIT_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Plain rows
// ---------------------------------------------------------------------------

/// Convert one line's tokens into a numeric row.
///
/// With `intercept` the row is `[1.0, t0, t1, ...]`, otherwise the tokens
/// map one-to-one. `line` is only used to label errors.
pub fn convert_row(tokens: &[&str], intercept: bool, line: usize) -> Result<Vec<f64>> {
    let mut row = Vec::with_capacity(tokens.len() + usize::from(intercept));
    if intercept {
        row.push(INTERCEPT);
    }
    for tok in tokens {
        row.push(parse_token(tok, line)?);
    }
    Ok(row)
}

// ---------------------------------------------------------------------------
// Split rows: features + trailing target
// ---------------------------------------------------------------------------

/// Convert one line's tokens into `(features, target)`.
///
/// The last token is always the target, whether or not an intercept is
/// prepended to the features.
pub fn convert_row_split(
    tokens: &[&str],
    intercept: bool,
    line: usize,
) -> Result<(Vec<f64>, f64)> {
    if tokens.len() < MIN_SPLIT_WIDTH {
        return Err(LoadError::Format {
            line,
            expected: MIN_SPLIT_WIDTH,
            actual: tokens.len(),
        });
    }

    let (features, last) = tokens.split_at(tokens.len() - 1);
    let row = convert_row(features, intercept, line)?;
    let target = parse_token(last[0], line)?;
    Ok((row, target))
}

/// Parse one token, also accepting a single `f`/`F`/`d`/`D` type suffix
/// (`"1.5f"`, `"2d"`).
fn parse_token(tok: &str, line: usize) -> Result<f64> {
    let trimmed = tok.trim();
    trimmed
        .parse::<f64>()
        .or_else(|e| match trimmed.strip_suffix(['f', 'F', 'd', 'D']) {
            Some(number) => number.parse::<f64>(),
            None => Err(e),
        })
        .map_err(|_| LoadError::Parse {
            line,
            token: tok.to_string(),
        })
}
