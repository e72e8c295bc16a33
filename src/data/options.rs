use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::delimiter::Delimiter;
use super::error::Result;
use super::loader::{
    load_matrix, load_matrix_from_path, load_matrix_with_target,
    load_matrix_with_target_from_path,
};
use super::model::{Dataset, FeatureMatrix, TargetVector};

// ---------------------------------------------------------------------------
// LoadOptions – one load's settings, serializable for config files
// ---------------------------------------------------------------------------

/// Settings for one load. Missing JSON fields fall back to the defaults:
/// comma delimiter, no intercept, no target column.
///
/// ```json
/// { "delimiter": { "literal": "," }, "intercept": true, "target": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub delimiter: Delimiter,
    /// Prepend a constant `1.0` column to the features.
    pub intercept: bool,
    /// Split the last column off as the target.
    pub target: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.intercept = intercept;
        self
    }

    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    /// Read options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing options file {}", path.display()))
    }

    /// Load `reader` according to these options.
    pub fn load<R: Read>(&self, reader: R) -> Result<Dataset> {
        if self.target {
            let (features, target) =
                load_matrix_with_target(reader, &self.delimiter, self.intercept)?;
            Ok(self.dataset(features, Some(target)))
        } else {
            let features = load_matrix(reader, &self.delimiter, self.intercept)?;
            Ok(self.dataset(features, None))
        }
    }

    /// Load a file according to these options.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        if self.target {
            let (features, target) =
                load_matrix_with_target_from_path(path, &self.delimiter, self.intercept)?;
            Ok(self.dataset(features, Some(target)))
        } else {
            let features = load_matrix_from_path(path, &self.delimiter, self.intercept)?;
            Ok(self.dataset(features, None))
        }
    }

    fn dataset(&self, features: FeatureMatrix, target: Option<TargetVector>) -> Dataset {
        Dataset {
            features,
            target,
            intercept: self.intercept,
        }
    }
}
