//! Load delimited numeric text tables into feature matrices and, optionally,
//! a row-aligned single-column target.
//!
//! ```no_run
//! use rusty_tabular::{load_matrix_with_target_from_path, Delimiter};
//!
//! let (x, y) = load_matrix_with_target_from_path("ex1data1.txt", &Delimiter::from(","), true)?;
//! assert_eq!(x.nrows(), y.nrows());
//! # Ok::<(), rusty_tabular::LoadError>(())
//! ```

pub mod data;

pub use data::{
    load_matrix, load_matrix_from_path, load_matrix_with_target,
    load_matrix_with_target_from_path, Dataset, Delimiter, FeatureMatrix, LoadError,
    LoadOptions, Result, TargetVector,
};
