use serde_json::json;

use super::*;

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn f31_args() -> Map<String, Value> {
    args(json!({
        "name": "F31",
        "long_name": "Fedora 31",
        "id_prefix": "FEDORA",
        "version": "31",
        "branch": "f31",
        "dist_tag": "f31",
        "stable_tag": "f31-updates",
        "testing_tag": "f31-updates-testing",
        "candidate_tag": "f31-updates-candidate",
        "pending_stable_tag": "f31-updates-pending",
        "pending_testing_tag": "f31-updates-testing-pending",
        "override_tag": "f31-override",
        "user": "releng",
    }))
}

fn invalid_message(result: Result<ReleaseParams, ModuleError>) -> String {
    match result {
        Err(ModuleError::InvalidArguments(msg)) => msg,
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(params) => panic!("expected failure, got {params:?}"),
    }
}

#[test]
fn defaults_apply_when_optional_params_are_absent() {
    let params = ReleaseParams::from_args(&f31_args()).expect("params");
    assert_eq!(params.state, ReleaseState::Pending);
    assert_eq!(params.url, DEFAULT_URL);
    assert!(params.validate_certs);
    assert_eq!(params.pending_signing_tag, None);
    assert_eq!(params.mail_template, None);
    assert_eq!(params.composed_by_bodhi, None);
    assert_eq!(params.password, None);
}

#[test]
fn scalar_values_are_coerced_to_text() {
    let mut map = f31_args();
    map.insert("version".to_string(), json!(31));
    map.insert("composed_by_bodhi".to_string(), json!(false));
    let params = ReleaseParams::from_args(&map).expect("params");
    assert_eq!(params.version, "31");
    assert_eq!(params.composed_by_bodhi.as_deref(), Some("False"));
}

#[test]
fn null_counts_as_absent() {
    let mut map = f31_args();
    map.insert("mail_template".to_string(), Value::Null);
    map.insert("state".to_string(), Value::Null);
    let params = ReleaseParams::from_args(&map).expect("params");
    assert_eq!(params.mail_template, None);
    assert_eq!(params.state, ReleaseState::Pending);
}

#[test]
fn missing_required_params_are_listed_in_schema_order() {
    let mut map = f31_args();
    map.remove("user");
    map.remove("name");
    map.insert("long_name".to_string(), Value::Null);
    let msg = invalid_message(ReleaseParams::from_args(&map));
    assert_eq!(msg, "missing required arguments: name, long_name, user");
}

#[test]
fn unknown_params_are_rejected_but_control_keys_are_not() {
    let mut map = f31_args();
    map.insert("_ansible_check_mode".to_string(), json!(true));
    assert!(ReleaseParams::from_args(&map).is_ok());

    map.insert("colour".to_string(), json!("blue"));
    let msg = invalid_message(ReleaseParams::from_args(&map));
    assert!(
        msg.starts_with("Unsupported parameters for (bodhi_release) module: colour."),
        "{msg}"
    );
    assert!(msg.contains("Supported parameters include: branch, candidate_tag"));
}

#[test]
fn state_must_be_one_of_the_lifecycle_states() {
    let mut map = f31_args();
    map.insert("state".to_string(), json!("frozen"));
    let msg = invalid_message(ReleaseParams::from_args(&map));
    assert_eq!(
        msg,
        "value of state must be one of: disabled, pending, current, archived, got: frozen"
    );

    map.insert("state".to_string(), json!("archived"));
    let params = ReleaseParams::from_args(&map).expect("params");
    assert_eq!(params.state, ReleaseState::Archived);
}

#[test]
fn lists_are_not_accepted_for_text_params() {
    let mut map = f31_args();
    map.insert("branch".to_string(), json!(["f31"]));
    let msg = invalid_message(ReleaseParams::from_args(&map));
    assert_eq!(
        msg,
        "argument 'branch' is of type list and we were unable to convert to str"
    );
}

#[test]
fn validate_certs_accepts_ansible_booleans() {
    let mut map = f31_args();
    map.insert("validate_certs".to_string(), json!("no"));
    assert!(!ReleaseParams::from_args(&map).expect("params").validate_certs);

    map.insert("validate_certs".to_string(), json!("maybe"));
    let msg = invalid_message(ReleaseParams::from_args(&map));
    assert!(msg.contains("not a valid boolean"), "{msg}");
}

#[test]
fn release_request_omits_absent_optionals() {
    let params = ReleaseParams::from_args(&f31_args()).expect("params");
    let request = serde_json::to_value(params.release_request()).expect("serialize");
    let obj = request.as_object().expect("object");

    assert_eq!(obj["name"], json!("F31"));
    assert_eq!(obj["state"], json!("pending"));
    assert!(!obj.contains_key("pending_signing_tag"));
    assert!(!obj.contains_key("mail_template"));
    assert!(!obj.contains_key("composed_by_bodhi"));
    assert!(!obj.contains_key("user"));
    assert!(!obj.contains_key("password"));
}

#[test]
fn drifted_fields_names_only_differences() {
    let params = ReleaseParams::from_args(&f31_args()).expect("params");
    let mut existing = Release {
        name: "F31".to_string(),
        long_name: "Fedora 31".to_string(),
        id_prefix: "FEDORA".to_string(),
        version: "31".to_string(),
        branch: "f31".to_string(),
        dist_tag: "f31".to_string(),
        stable_tag: "f31-updates".to_string(),
        testing_tag: "f31-updates-testing".to_string(),
        candidate_tag: "f31-updates-candidate".to_string(),
        pending_stable_tag: "f31-updates-pending".to_string(),
        pending_testing_tag: "f31-updates-testing-pending".to_string(),
        override_tag: "f31-override".to_string(),
        state: "pending".to_string(),
        ..Release::default()
    };
    assert!(params.drifted_fields(&existing).is_empty());

    existing.state = "current".to_string();
    existing.branch = "rawhide".to_string();
    assert_eq!(params.drifted_fields(&existing), vec!["branch", "state"]);
}

#[test]
fn debug_output_hides_the_password() {
    let mut map = f31_args();
    map.insert("password".to_string(), json!("hunter2"));
    let params = ReleaseParams::from_args(&map).expect("params");
    assert!(!format!("{params:?}").contains("hunter2"));
}
