use std::str::FromStr;

use bodhi_release::model::ReleaseState;

use super::*;

/// Form body of `POST /releases/`. Everything is optional so that missing
/// fields surface as Bodhi-style errors rather than extractor rejections.
#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct CreateReleaseForm {
    #[serde(default)]
    pub(super) csrf_token: Option<String>,
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default)]
    pub(super) long_name: Option<String>,
    #[serde(default)]
    pub(super) id_prefix: Option<String>,
    #[serde(default)]
    pub(super) version: Option<String>,
    #[serde(default)]
    pub(super) branch: Option<String>,
    #[serde(default)]
    pub(super) dist_tag: Option<String>,
    #[serde(default)]
    pub(super) stable_tag: Option<String>,
    #[serde(default)]
    pub(super) testing_tag: Option<String>,
    #[serde(default)]
    pub(super) candidate_tag: Option<String>,
    #[serde(default)]
    pub(super) pending_stable_tag: Option<String>,
    #[serde(default)]
    pub(super) pending_testing_tag: Option<String>,
    #[serde(default)]
    pub(super) pending_signing_tag: Option<String>,
    #[serde(default)]
    pub(super) override_tag: Option<String>,
    #[serde(default)]
    pub(super) state: Option<String>,
    #[serde(default)]
    pub(super) mail_template: Option<String>,
    #[serde(default)]
    pub(super) composed_by_bodhi: Option<String>,
}

fn required(errors: &mut Vec<ErrorEntry>, name: &str, value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            errors.push(ErrorEntry::body(name, "Required"));
            String::new()
        }
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(super) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Validates a creation form against the current releases.
pub(super) fn validate_release_form(
    form: &CreateReleaseForm,
    koji_tags: Option<&HashSet<String>>,
    existing: &[Release],
) -> std::result::Result<Release, Vec<ErrorEntry>> {
    let mut errors = Vec::new();

    let name = required(&mut errors, "name", &form.name);
    let long_name = required(&mut errors, "long_name", &form.long_name);
    let id_prefix = required(&mut errors, "id_prefix", &form.id_prefix);
    let version = required(&mut errors, "version", &form.version);
    let branch = required(&mut errors, "branch", &form.branch);
    let dist_tag = required(&mut errors, "dist_tag", &form.dist_tag);
    let stable_tag = required(&mut errors, "stable_tag", &form.stable_tag);
    let testing_tag = required(&mut errors, "testing_tag", &form.testing_tag);
    let candidate_tag = required(&mut errors, "candidate_tag", &form.candidate_tag);
    let pending_stable_tag = required(&mut errors, "pending_stable_tag", &form.pending_stable_tag);
    let pending_testing_tag =
        required(&mut errors, "pending_testing_tag", &form.pending_testing_tag);
    let override_tag = required(&mut errors, "override_tag", &form.override_tag);
    let pending_signing_tag = optional(&form.pending_signing_tag);
    let mail_template = optional(&form.mail_template);

    let state = match optional(&form.state) {
        None => ReleaseState::default(),
        Some(raw) => match ReleaseState::from_str(&raw) {
            Ok(state) => state,
            Err(_) => {
                errors.push(ErrorEntry::body(
                    "state",
                    format!(
                        "\"{}\" is not one of disabled, pending, current, archived",
                        raw
                    ),
                ));
                ReleaseState::default()
            }
        },
    };

    let composed_by_bodhi = match optional(&form.composed_by_bodhi) {
        None => true,
        Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
            errors.push(ErrorEntry::body(
                "composed_by_bodhi",
                format!("\"{}\" is not a valid boolean", raw),
            ));
            true
        }),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    if existing.iter().any(|r| r.name.eq_ignore_ascii_case(&name)) {
        return Err(vec![ErrorEntry::body(
            "name",
            format!("Release {} already exists", name),
        )]);
    }

    if let Some(known) = koji_tags {
        let mut tags = vec![
            ("dist_tag", &dist_tag),
            ("stable_tag", &stable_tag),
            ("testing_tag", &testing_tag),
            ("candidate_tag", &candidate_tag),
            ("pending_stable_tag", &pending_stable_tag),
            ("pending_testing_tag", &pending_testing_tag),
            ("override_tag", &override_tag),
        ];
        if let Some(tag) = &pending_signing_tag {
            tags.push(("pending_signing_tag", tag));
        }
        let unknown: Vec<ErrorEntry> = tags
            .into_iter()
            .filter(|(_, tag)| !known.contains(tag.as_str()))
            .map(|(field, tag)| ErrorEntry::body(field, format!("Invalid tag: {}", tag)))
            .collect();
        if !unknown.is_empty() {
            return Err(unknown);
        }
    }

    Ok(Release {
        name,
        long_name,
        version,
        id_prefix,
        branch,
        dist_tag,
        stable_tag,
        testing_tag,
        candidate_tag,
        pending_stable_tag,
        pending_testing_tag,
        pending_signing_tag,
        override_tag,
        state: state.as_str().to_string(),
        mail_template,
        composed_by_bodhi,
    })
}

#[cfg(test)]
#[path = "../../tests/bin/bodhi_dev_server/validators_tests.rs"]
mod tests;
