use std::fs;
use std::path::PathBuf;

use vtx_catalog::{Catalog, CatalogFile};
use vtx_core::{Origin, SmearingVariant, VtxError};

const EXTRA: &str = r#"
schema_version:
  major: 1
  minor: 0
  patch: 0
entries:
  - name: Test13TeV
    description: hypothetical optics
    type: BetafuncEvtVtxGenerator
    Phi: 0.0
    BetaStar: 80
    Emittance: 2.0e-08
    Alpha: 0.0
    SigmaZ: 5.0
    TimeOffset: 0.0
    X0: 0.1
    Y0: 0.1
    Z0: 0.0
  - name: NarrowGauss
    type: GaussEvtVtxGenerator
    MeanX: 0.0
    MeanY: 0.0
    MeanZ: 0.0
    SigmaX: 0.001
    SigmaY: 0.001
    SigmaZ: 1.0
    TimeOffset: 0.0
"#;

fn write_catalog(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, contents).expect("write catalog");
    (dir, path)
}

#[test]
fn user_file_extends_builtin_catalog() {
    let (_dir, path) = write_catalog(EXTRA);
    let catalog = Catalog::builtin().with_file(&path).unwrap();
    assert_eq!(catalog.len(), 26);

    let entry = catalog.get("Test13TeVVtxSmearingParameters").unwrap();
    assert_eq!(entry.variant(), SmearingVariant::BetaFunction);
    assert_eq!(entry.description(), Some("hypothetical optics"));
    assert_eq!(entry.origin(), &Origin::File(path.display().to_string()));
    assert_eq!(entry.parameters().field("BetaStar"), Some(80.0));

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(&names[24..], ["Test13TeV", "NarrowGauss"]);
}

#[test]
fn user_file_cannot_shadow_builtin_names() {
    let (_dir, path) = write_catalog(
        r#"
entries:
  - name: Gauss
    type: GaussEvtVtxGenerator
    MeanX: 0.0
    MeanY: 0.0
    MeanZ: 0.0
    SigmaX: 1.0
    SigmaY: 1.0
    SigmaZ: 1.0
    TimeOffset: 0.0
"#,
    );
    let err = Catalog::builtin().with_file(&path).unwrap_err();
    match err {
        VtxError::DuplicateScenario(info) => {
            assert_eq!(info.context.get("name").map(String::as_str), Some("Gauss"));
            assert_eq!(
                info.context.get("existing_origin").map(String::as_str),
                Some("builtin")
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn repeated_name_within_a_file_is_rejected() {
    let doubled = format!("{EXTRA}{}", EXTRA.split("entries:").nth(1).unwrap());
    let file = CatalogFile::parse(&doubled).unwrap();
    assert_eq!(file.entries.len(), 4);
    let err = file.into_entries(Origin::Builtin).unwrap_err();
    assert!(matches!(err, VtxError::DuplicateScenario(_)));
}

#[test]
fn out_of_range_entry_names_the_scenario() {
    let (_dir, path) = write_catalog(
        r#"
entries:
  - name: Broken
    type: GaussEvtVtxGenerator
    MeanX: 0.0
    MeanY: 0.0
    MeanZ: 0.0
    SigmaX: -0.5
    SigmaY: 1.0
    SigmaZ: 1.0
    TimeOffset: 0.0
"#,
    );
    let err = Catalog::builtin().with_file(&path).unwrap_err();
    match err {
        VtxError::InvalidParameter(info) => {
            assert_eq!(info.code, "negative-sigma");
            assert_eq!(info.context.get("scenario").map(String::as_str), Some("Broken"));
            assert_eq!(info.context.get("field").map(String::as_str), Some("SigmaX"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn long_form_names_are_reserved() {
    let file = CatalogFile::parse(
        r#"
entries:
  - name: CustomVtxSmearingParameters
    type: FlatEvtVtxGenerator
    MinX: 0.0
    MaxX: 0.0
    MinY: 0.0
    MaxY: 0.0
    MinZ: 0.0
    MaxZ: 0.0
    TimeOffset: 0.0
"#,
    )
    .unwrap();
    let err = file.into_entries(Origin::Builtin).unwrap_err();
    assert_eq!(err.info().code, "reserved-suffix");
}

#[test]
fn padded_names_are_refused() {
    let file = CatalogFile::parse(
        r#"
entries:
  - name: " Foo"
    type: FlatEvtVtxGenerator
    MinX: 0.0
    MaxX: 0.0
    MinY: 0.0
    MaxY: 0.0
    MinZ: 0.0
    MaxZ: 0.0
    TimeOffset: 0.0
"#,
    )
    .unwrap();
    let err = file.into_entries(Origin::Builtin).unwrap_err();
    assert_eq!(err.info().code, "padded-name");
}

#[test]
fn foreign_schema_major_is_refused() {
    let yaml = EXTRA.replacen("major: 1", "major: 9", 1);
    let err = CatalogFile::parse(&yaml).unwrap_err();
    assert!(matches!(err, VtxError::Serde(_)));
    assert_eq!(err.info().code, "unsupported-schema");
    assert_eq!(err.info().context.get("found").map(String::as_str), Some("9.0.0"));

    let newer_minor = EXTRA.replacen("minor: 0", "minor: 4", 1);
    assert_eq!(CatalogFile::parse(&newer_minor).unwrap().entries.len(), 2);
}

#[test]
fn unknown_generator_type_is_a_serde_error() {
    let err = CatalogFile::parse(
        r#"
entries:
  - name: Odd
    type: BeamProfileVtxGenerator
    BeamSigmaX: 0.1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, VtxError::Serde(_)));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Catalog::builtin()
        .with_file(&dir.path().join("absent.yaml"))
        .unwrap_err();
    assert!(matches!(err, VtxError::Io(_)));
}
