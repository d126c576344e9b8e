use super::*;

fn f31_form() -> CreateReleaseForm {
    CreateReleaseForm {
        csrf_token: Some("t".to_string()),
        name: Some("F31".to_string()),
        long_name: Some("Fedora 31".to_string()),
        id_prefix: Some("FEDORA".to_string()),
        version: Some("31".to_string()),
        branch: Some("f31".to_string()),
        dist_tag: Some("f31".to_string()),
        stable_tag: Some("f31-updates".to_string()),
        testing_tag: Some("f31-updates-testing".to_string()),
        candidate_tag: Some("f31-updates-candidate".to_string()),
        pending_stable_tag: Some("f31-updates-pending".to_string()),
        pending_testing_tag: Some("f31-updates-testing-pending".to_string()),
        override_tag: Some("f31-override".to_string()),
        ..CreateReleaseForm::default()
    }
}

#[test]
fn complete_form_builds_a_pending_release() {
    let release = validate_release_form(&f31_form(), None, &[]).expect("valid");
    assert_eq!(release.name, "F31");
    assert_eq!(release.state, "pending");
    assert!(release.composed_by_bodhi);
    assert_eq!(release.pending_signing_tag, None);
}

#[test]
fn missing_fields_are_reported_together() {
    let mut form = f31_form();
    form.long_name = None;
    form.branch = Some("  ".to_string());
    let errors = validate_release_form(&form, None, &[]).expect_err("invalid");
    let names: Vec<&str> = errors.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["long_name", "branch"]);
    assert!(errors.iter().all(|e| e.description == "Required"));
}

#[test]
fn state_and_composed_flag_are_checked() {
    let mut form = f31_form();
    form.state = Some("frozen".to_string());
    form.composed_by_bodhi = Some("sometimes".to_string());
    let errors = validate_release_form(&form, None, &[]).expect_err("invalid");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].name, "state");
    assert_eq!(errors[1].name, "composed_by_bodhi");

    form.state = Some("current".to_string());
    form.composed_by_bodhi = Some("False".to_string());
    let release = validate_release_form(&form, None, &[]).expect("valid");
    assert_eq!(release.state, "current");
    assert!(!release.composed_by_bodhi);
}

#[test]
fn duplicate_names_are_refused_case_insensitively() {
    let existing = validate_release_form(&f31_form(), None, &[]).expect("valid");
    let mut form = f31_form();
    form.name = Some("f31".to_string());
    let errors = validate_release_form(&form, None, &[existing]).expect_err("duplicate");
    assert_eq!(errors[0].description, "Release f31 already exists");
}

#[test]
fn unknown_koji_tags_are_refused_when_tags_are_known() {
    let known: HashSet<String> = [
        "f31",
        "f31-updates",
        "f31-updates-testing",
        "f31-updates-candidate",
        "f31-updates-pending",
        "f31-updates-testing-pending",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    let errors = validate_release_form(&f31_form(), Some(&known), &[]).expect_err("override");
    assert_eq!(
        errors,
        vec![ErrorEntry::body("override_tag", "Invalid tag: f31-override")]
    );
}

#[test]
fn session_cookie_and_basic_auth_are_parsed() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        "theme=dark; bodhi_session=abc123".parse().expect("cookie"),
    );
    // "releng:secret"
    headers.insert(
        header::AUTHORIZATION,
        "Basic cmVsZW5nOnNlY3JldA==".parse().expect("auth"),
    );

    assert_eq!(session_id(&headers).as_deref(), Some("abc123"));
    assert_eq!(
        basic_credentials(&headers),
        Some(("releng".to_string(), "secret".to_string()))
    );
}
