use vnfin_core::{Capability, VnfinError};

#[test]
fn capability_converts_to_unsupported() {
    let err: VnfinError = Capability::News.into();
    assert_eq!(
        err,
        VnfinError::Unsupported {
            capability: "news".into()
        }
    );
}

#[test]
fn connector_error_names_the_connector() {
    let err = VnfinError::connector("vnfin-tcbs", "status 500: ratios for FPT");
    assert_eq!(err.to_string(), "vnfin-tcbs failed: status 500: ratios for FPT");
}

#[test]
fn serde_json_errors_are_data_issues() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: VnfinError = parse.unwrap_err().into();
    assert!(matches!(err, VnfinError::Data(_)));
}
