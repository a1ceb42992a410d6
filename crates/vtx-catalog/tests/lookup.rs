use vtx_catalog::{select, Catalog};
use vtx_core::{CommonBinding, VtxError};

#[test]
fn unknown_name_fails_with_unknown_scenario() {
    let catalog = Catalog::builtin();
    for name in [
        "Realistic14TeVCollision",
        "",
        "VtxSmearingParameters",
        "Early10TeVX322Y100 ",
        "Gaussian",
    ] {
        match catalog.get(name) {
            Err(VtxError::UnknownScenario(info)) => {
                assert_eq!(info.code, "unknown-scenario");
                assert_eq!(info.context.get("name").map(String::as_str), Some(name));
            }
            other => panic!("{name:?} resolved unexpectedly: {other:?}"),
        }
        assert!(!catalog.contains(name));
    }
}

#[test]
fn lookup_is_case_sensitive_but_hints_the_spelling() {
    let catalog = Catalog::builtin();
    let err = catalog.get("realistic7tevcollision").unwrap_err();
    assert!(err.is_unknown_scenario());
    assert_eq!(
        err.info().hint.as_deref(),
        Some("did you mean Realistic7TeVCollision?")
    );
}

#[test]
fn short_and_long_names_resolve_to_the_same_entry() {
    let catalog = Catalog::builtin();
    let short = catalog.get("NominalCollision2").unwrap();
    let long = catalog.get("NominalCollision2VtxSmearingParameters").unwrap();
    assert_eq!(short, long);
}

#[test]
fn selecting_twice_yields_equal_configs() {
    let catalog = Catalog::builtin();
    let common = CommonBinding::default();
    let first = select(&catalog, "Realistic8TeVCollision", &common).unwrap();
    let second = select(&catalog, "Realistic8TeVCollision", &common).unwrap();
    assert_eq!(first, second);
}

#[test]
fn selecting_unknown_name_returns_no_config() {
    let catalog = Catalog::builtin();
    let result = select(&catalog, "Early10TeVX322Y200", &CommonBinding::default());
    assert!(matches!(result, Err(VtxError::UnknownScenario(_))));
}

#[test]
fn empty_catalog_knows_nothing() {
    let catalog = Catalog::empty();
    assert!(catalog.is_empty());
    assert!(catalog.get("Gauss").unwrap_err().is_unknown_scenario());
}
