//! Core domain models for setup-cfg-fmt
//!
//! This module contains the text-normalization algorithms the formatter is built on:
//! - Version tuples and `python_requires` constraints
//! - Requirement specifier normalization and sorting
//! - Classifier derivation, trimming and natural sorting

pub mod classifier;
mod requirement;
mod version;

pub use classifier::{license_classifier, natural_sort};
pub use requirement::{base_name, normalize, normalize_block, Requirement};
pub use version::{
    format_constraint, parse_constraint, parse_version, ConstraintParse, PythonRequires, Version,
};
