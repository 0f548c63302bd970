//! # physlab-rs
//!
//! `physlab-rs` is a virtual physics laboratory core: a fixed catalog of
//! laboratory experiments, each pairing explanatory text and a formula with
//! bounded numeric parameters and a pure computation that produces a
//! plottable series, sometimes with one derived scalar.
//!
//! The library provides:
//! - A parameter system with construction-time validated bounds and
//!   slider-ready control resolution
//! - An immutable, ordered experiment catalog with 17 built-in experiments
//! - A simulation engine that executes any catalog entry behind one uniform
//!   contract and catches computation failures at its boundary
//! - Display formatting for the presentation surface
//!
//! ## Basic Usage
//!
//! ```
//! use physlab_rs::{engine, ExperimentCatalog};
//! use std::collections::HashMap;
//!
//! let catalog = ExperimentCatalog::standard();
//! let experiment = catalog.get("3. Verification of Brewster's Law").unwrap();
//!
//! let inputs = HashMap::from([("Refractive index n₂".to_string(), 1.5)]);
//! let result = engine::run(experiment, &inputs).unwrap();
//!
//! assert_eq!(result.series.len(), 180);
//! assert!(result.scalar.is_none());
//! ```

pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod experiments;
pub mod parameters;
pub mod series;

// Re-exports for convenience
pub use catalog::ExperimentCatalog;
pub use error::{LabError, Result};
pub use experiment::{ComputeFn, ExperimentDefinition};
pub use parameters::{ParamKind, ParameterSpec, ResolvedControl};
pub use series::{RunResult, Series, SimOutput};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
