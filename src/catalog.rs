//! Experiment catalog
//!
//! The catalog is the fixed, ordered collection of experiment definitions,
//! keyed by display name. It is populated once at process start and never
//! mutated: lookups are read-only, there is no caching and no invalidation,
//! and declaration order is the only ordering signal (the ordinal name
//! prefixes exist for display, not for sorting). The catalog performs no
//! computation itself.

use crate::error::{LabError, Result};
use crate::experiment::ExperimentDefinition;
use crate::experiments;

/// An ordered, write-once collection of experiment definitions.
///
/// Backed by a `Vec` rather than a map so iteration order is construction
/// order by construction; with 17 entries a linear name scan is the lookup.
pub struct ExperimentCatalog {
    experiments: Vec<ExperimentDefinition>,
}

impl std::fmt::Debug for ExperimentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExperimentCatalog")
            .field("experiments", &self.experiments.len())
            .finish()
    }
}

impl ExperimentCatalog {
    /// Create a catalog from an ordered list of definitions
    ///
    /// # Returns
    ///
    /// The catalog, or an error if two definitions share a name. Parameter
    /// invariants (`min <= default <= max`, unique labels) were already
    /// enforced when each definition was constructed.
    pub fn new(experiments: Vec<ExperimentDefinition>) -> Result<Self> {
        for (i, def) in experiments.iter().enumerate() {
            if experiments[..i].iter().any(|d| d.name() == def.name()) {
                return Err(LabError::Catalog(format!(
                    "duplicate experiment name '{}'",
                    def.name()
                )));
            }
        }

        Ok(Self { experiments })
    }

    /// The standard 17-experiment catalog, in ordinal display order.
    pub fn standard() -> Self {
        Self::new(experiments::all()).expect("standard catalog is well-formed")
    }

    /// Experiment names in declaration order, for presentation.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.experiments.iter().map(|def| def.name())
    }

    /// Look up an experiment by its display name
    ///
    /// # Returns
    ///
    /// The definition, or [`LabError::ExperimentNotFound`] if the name is
    /// absent. A miss is a programming-contract violation in normal
    /// operation, since the presentation surface only offers catalog keys.
    pub fn get(&self, name: &str) -> Result<&ExperimentDefinition> {
        self.experiments
            .iter()
            .find(|def| def.name() == name)
            .ok_or_else(|| LabError::ExperimentNotFound(name.to_string()))
    }

    /// Number of experiments in the catalog.
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Iterate over the definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ExperimentDefinition> {
        self.experiments.iter()
    }
}
