//! Integration tests for the standard experiment catalog.

use physlab_rs::parameters::{effective_step, resolve, ParamKind, ResolvedControl};
use physlab_rs::{engine, ExperimentCatalog, LabError};

#[test]
fn test_catalog_has_seventeen_experiments_in_ordinal_order() {
    let catalog = ExperimentCatalog::standard();
    assert_eq!(catalog.len(), 17);

    let names: Vec<&str> = catalog.names().collect();
    for (i, name) in names.iter().enumerate() {
        assert!(
            name.starts_with(&format!("{}. ", i + 1)),
            "position {} holds '{}'",
            i,
            name
        );
    }
}

#[test]
fn test_every_default_lies_within_bounds() {
    let catalog = ExperimentCatalog::standard();
    for def in catalog.iter() {
        for spec in def.parameters() {
            assert!(
                spec.min <= spec.default && spec.default <= spec.max,
                "'{}' / '{}': default {} outside [{}, {}]",
                def.name(),
                spec.label,
                spec.default,
                spec.min,
                spec.max
            );
        }
    }
}

#[test]
fn test_every_experiment_runs_on_defaults() {
    let catalog = ExperimentCatalog::standard();
    for def in catalog.iter() {
        let result = engine::run_with_defaults(def)
            .unwrap_or_else(|e| panic!("'{}' failed on defaults: {}", def.name(), e));

        // Series invariant: equal-length, non-empty
        assert!(!result.series.is_empty(), "'{}' produced an empty series", def.name());
        for &y in result.series.values().iter() {
            assert!(y.is_finite());
        }
    }
}

#[test]
fn test_experiments_with_derived_scalars() {
    let catalog = ExperimentCatalog::standard();
    let with_scalar = [
        "1. Radius of Curvature by Newton's Rings",
        "5. Estimation of Planck's Constant",
        "6. Energy Band Gap of Semiconductor",
    ];

    for def in catalog.iter() {
        let result = engine::run_with_defaults(def).unwrap();
        let expected = with_scalar.contains(&def.name());
        assert_eq!(
            result.scalar.is_some(),
            expected,
            "'{}' scalar presence",
            def.name()
        );
    }
}

#[test]
fn test_unknown_name_fails_and_catalog_is_unchanged() {
    let catalog = ExperimentCatalog::standard();
    let before: Vec<String> = catalog.names().map(String::from).collect();

    match catalog.get("Cold Fusion") {
        Err(LabError::ExperimentNotFound(name)) => assert_eq!(name, "Cold Fusion"),
        other => panic!("Expected ExperimentNotFound, got {:?}", other.map(|d| d.name())),
    }

    let after: Vec<String> = catalog.names().map(String::from).collect();
    assert_eq!(before, after);
}

#[test]
fn test_resolved_controls_are_usable() {
    let catalog = ExperimentCatalog::standard();
    for def in catalog.iter() {
        for spec in def.parameters() {
            assert_ne!(effective_step(spec), 0.0, "'{}' resolved to step 0", spec.label);

            match resolve(spec) {
                ResolvedControl::Integer {
                    min,
                    max,
                    default,
                    step,
                } => {
                    assert_eq!(spec.kind, ParamKind::Integer);
                    assert!(min <= default && default <= max);
                    assert_ne!(step, 0);
                }
                ResolvedControl::Real {
                    min,
                    max,
                    default,
                    step,
                } => {
                    assert_eq!(spec.kind, ParamKind::Real);
                    assert!(min <= default && default <= max);
                    assert_ne!(step, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_kind_mix_is_explicit_per_spec() {
    // The catalog deliberately mixes kinds within one formula family:
    // Planck's stopping potential has fractional step and bounds but an
    // integer default, so it is an integer control.
    let catalog = ExperimentCatalog::standard();
    let planck = catalog.get("5. Estimation of Planck's Constant").unwrap();

    let potential = &planck.parameters()[1];
    assert_eq!(potential.label, "Stopping Potential (V)");
    assert_eq!(potential.kind, ParamKind::Integer);
    assert_eq!(potential.step, 0.01);

    // While Brewster's index, with a whole-valued lower bound, stays real
    // because its default is fractional.
    let brewster = catalog.get("3. Verification of Brewster's Law").unwrap();
    assert_eq!(brewster.parameters()[0].kind, ParamKind::Real);
}
