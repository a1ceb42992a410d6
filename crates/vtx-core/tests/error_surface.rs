use vtx_core::errors::{ErrorInfo, VtxError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("name", "Early10TeVX322Y100")
        .with_context("reason", "example")
}

#[test]
fn unknown_scenario_surface() {
    let err = VtxError::UnknownScenario(sample_info("unknown-scenario", "not defined"));
    assert_eq!(err.info().code, "unknown-scenario");
    assert!(err.info().context.contains_key("name"));
    assert!(err.is_unknown_scenario());
}

#[test]
fn invalid_parameter_surface() {
    let err = VtxError::InvalidParameter(sample_info("negative-sigma", "SigmaX is negative"));
    assert_eq!(err.info().code, "negative-sigma");
    assert!(!err.is_unknown_scenario());
}

#[test]
fn display_includes_context_and_hint() {
    let err = VtxError::DuplicateScenario(
        ErrorInfo::new("duplicate-scenario", "scenario defined twice")
            .with_context("name", "Gauss")
            .with_hint("rename the entry"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "duplicate scenario: scenario defined twice (code: duplicate-scenario) | context: [name=Gauss] | hint: rename the entry"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = VtxError::InvalidLabel(ErrorInfo::new("invalid-label", "bad label"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "InvalidLabel");
    assert_eq!(json["detail"]["code"], "invalid-label");
    let decoded: VtxError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
