use super::*;

#[test]
fn base_url_gains_trailing_slash_for_joins() -> Result<()> {
    let url = parse_base_url("https://bodhi.example.org/bodhi")?;
    assert_eq!(url.as_str(), "https://bodhi.example.org/bodhi/");
    assert_eq!(
        url.join("releases/")?.as_str(),
        "https://bodhi.example.org/bodhi/releases/"
    );

    let root = parse_base_url("https://bodhi.fedoraproject.org")?;
    assert_eq!(
        root.join("csrf")?.as_str(),
        "https://bodhi.fedoraproject.org/csrf"
    );
    Ok(())
}

#[test]
fn non_http_urls_are_refused() {
    assert!(parse_base_url("ftp://bodhi.example.org").is_err());
    assert!(parse_base_url("not a url").is_err());
    assert!(parse_base_url("mailto:releng@example.org").is_err());
}

#[test]
fn errors_member_marks_a_rejection() {
    let body = serde_json::json!({
        "status": "error",
        "errors": [{"location": "body", "name": "name", "description": "name taken"}],
    });
    assert_eq!(
        rejection_errors(&body),
        Some(serde_json::json!([
            {"location": "body", "name": "name", "description": "name taken"}
        ]))
    );

    let created = serde_json::json!({"name": "F31", "state": "pending"});
    assert_eq!(rejection_errors(&created), None);
}

#[test]
fn creation_form_carries_csrf_and_skips_absent_optionals() {
    let request = crate::model::ReleaseRequest {
        name: "F31",
        long_name: "Fedora 31",
        id_prefix: "FEDORA",
        version: "31",
        branch: "f31",
        dist_tag: "f31",
        stable_tag: "f31-updates",
        testing_tag: "f31-updates-testing",
        candidate_tag: "f31-updates-candidate",
        pending_stable_tag: "f31-updates-pending",
        pending_testing_tag: "f31-updates-testing-pending",
        pending_signing_tag: None,
        override_tag: "f31-override",
        state: crate::model::ReleaseState::Current,
        mail_template: Some("fedora_errata_template"),
        composed_by_bodhi: None,
    };
    let form = serde_json::to_value(CreateReleaseForm {
        csrf_token: "abc",
        release: &request,
    })
    .expect("serialize");

    assert_eq!(form["csrf_token"], "abc");
    assert_eq!(form["name"], "F31");
    assert_eq!(form["state"], "current");
    assert_eq!(form["mail_template"], "fedora_errata_template");
    assert!(form.get("pending_signing_tag").is_none());
    assert!(form.get("composed_by_bodhi").is_none());
}
