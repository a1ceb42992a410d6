use std::fs;
use std::process::{Command, Output};

fn vtx_smear(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vtx-smear"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run vtx-smear")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn list_prints_every_builtin_scenario() {
    let output = vtx_smear(&["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 24);
    assert!(text.contains("Realistic7TeVCollision"));
    assert!(text.lines().any(|line| line.starts_with("Gauss ")));
}

#[test]
fn list_filters_by_variant() {
    let output = vtx_smear(&["list", "--variant", "flat", "--json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Flat");
    assert_eq!(rows[0]["generator"], "FlatEvtVtxGenerator");
}

#[test]
fn select_emits_merged_configuration() {
    let output = vtx_smear(&["select", "--scenario", "Early10TeVX322Y100"]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(doc["config"]["label"], "VtxSmeared");
    assert_eq!(doc["config"]["type"], "BetafuncEvtVtxGenerator");
    assert_eq!(doc["config"]["Y0"], 0.01);
    assert_eq!(doc["config"]["src"], "generator");
    assert_eq!(
        doc["provenance"]["parameter_set"],
        "Early10TeVX322Y100VtxSmearingParameters"
    );
}

#[test]
fn select_unknown_scenario_fails() {
    let output = vtx_smear(&["select", "--scenario", "Early10TeVX322Y200"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Early10TeVX322Y200"), "{stderr}");
}

#[test]
fn selection_file_round_trip_through_validate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let selection = dir.path().join("selection.yaml");
    fs::write(&selection, "scenario: NominalCollision3\nsrc: source\n").unwrap();
    let out = dir.path().join("out").join("vtx.json");

    let output = vtx_smear(&[
        "select",
        "--config",
        selection.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let written = fs::read_to_string(&out).expect("document written");
    assert!(written.contains("\"src\": \"source\""));

    let output = vtx_smear(&["validate", "--document", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("ok: NominalCollision3VtxSmearingParameters"));
}

#[test]
fn validate_rejects_bad_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("bad.yaml");
    fs::write(
        &catalog,
        "entries:\n  - name: Bad\n    type: BetafuncEvtVtxGenerator\n    Phi: 0.0\n    BetaStar: 0.0\n    Emittance: 1.0e-08\n    Alpha: 0.0\n    SigmaZ: 1.0\n    TimeOffset: 0.0\n    X0: 0.0\n    Y0: 0.0\n    Z0: 0.0\n",
    )
    .unwrap();
    let output = vtx_smear(&["validate", "--catalog", catalog.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn show_text_lists_fields() {
    let output = vtx_smear(&["show", "Realistic7TeVCollision", "--text"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Realistic7TeVCollisionVtxSmearingParameters (BetafuncEvtVtxGenerator)"));
    assert!(text.contains("BetaStar     = 350"));
    assert!(text.contains("transverse beam size 43.3 microns"));
}

#[test]
fn select_rejects_empty_source() {
    let output = vtx_smear(&["select", "--scenario", "Gauss", "--src", ""]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("src"), "{stderr}");
}

#[test]
fn yaml_document_validates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gauss.yaml");
    let path_str = path.to_str().expect("utf8 path");
    let output = vtx_smear(&["select", "--scenario", "Gauss", "--yaml", "--out", path_str]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&path).expect("yaml").contains("label: VtxSmeared"));

    let output = vtx_smear(&["validate", "--document", path_str]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).starts_with("ok: GaussVtxSmearingParameters"));
}
