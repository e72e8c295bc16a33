use ndarray::Array2;

// ---------------------------------------------------------------------------
// Matrix aliases
// ---------------------------------------------------------------------------

/// Row-major feature table, one row per input line.
pub type FeatureMatrix = Array2<f64>;

/// Single-column label table, row-aligned with a [`FeatureMatrix`].
pub type TargetVector = Array2<f64>;

// ---------------------------------------------------------------------------
// Dataset – features plus optional target
// ---------------------------------------------------------------------------

/// The result of one load: features and, in split mode, the target column.
///
/// Row `i` of `features` and of `target` come from the same input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: FeatureMatrix,
    pub target: Option<TargetVector>,
    /// Whether column 0 of `features` is the constant intercept.
    pub intercept: bool,
}

impl Dataset {
    /// Number of observations (rows).
    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns, intercept included.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn into_parts(self) -> (FeatureMatrix, Option<TargetVector>) {
        (self.features, self.target)
    }
}
