/// Data layer: delimited text → numeric matrices.
///
/// Architecture:
/// ```text
///  text stream / file  +  Delimiter
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  trim + split each line, check width, buffer rows
///   └──────────┘
///        │ tokens
///        ▼
///   ┌──────────┐
///   │  convert  │  tokens → f64 row (+ intercept, + split target)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  exact-size feature matrix, optional n×1 target
///   └──────────┘
/// ```

pub mod convert;
pub mod delimiter;
pub mod error;
pub mod loader;
pub mod model;
pub mod options;

pub use delimiter::Delimiter;
pub use error::{LoadError, Result};
pub use loader::{
    load_matrix, load_matrix_from_path, load_matrix_with_target,
    load_matrix_with_target_from_path,
};
pub use model::{Dataset, FeatureMatrix, TargetVector};
pub use options::LoadOptions;
