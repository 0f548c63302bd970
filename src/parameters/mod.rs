//! # Parameter System
//!
//! This module describes the bounded numeric inputs of an experiment and
//! turns them into slider-ready control descriptions.
//!
//! ## Core Components
//!
//! - [`ParameterSpec`]: bounds, step, default, and numeric kind of one input
//! - [`ParamKind`]: integer vs. real control behavior, fixed at construction
//! - [`ResolvedControl`]: the effective control the presentation surface
//!   exposes, with the degenerate zero-step declaration corrected
//!
//! ## Example Usage
//!
//! ```rust
//! use physlab_rs::parameters::{resolve, ParameterSpec, ResolvedControl};
//!
//! let spec = ParameterSpec::real("Slit width (mm)", 0.01, 1.0, 0.01, 0.2).unwrap();
//!
//! match resolve(&spec) {
//!     ResolvedControl::Real { min, max, default, step } => {
//!         assert_eq!((min, max, default, step), (0.01, 1.0, 0.2, 0.01));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod resolve;
pub mod spec;

pub use resolve::{effective_step, resolve, ResolvedControl};
pub use spec::{ParamKind, ParameterError, ParameterSpec};
