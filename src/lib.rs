//! setup-cfg-fmt - setup.cfg formatter library
//!
//! This library provides the core functionality for normalizing setup.cfg
//! packaging metadata:
//! - Requirement specifier normalization and sorting
//! - `python_requires` resolution and Python version classifiers
//! - README and LICENSE inference
//! - Canonical section and key ordering

pub mod cli;
pub mod document;
pub mod domain;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod output;
pub mod probe;
