use serde::{Deserialize, Serialize};

use super::params::ReleaseState;

/// Release object as Bodhi serializes it.
///
/// Only `name` is guaranteed; the server is the authority on everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,

    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub id_prefix: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub dist_tag: String,
    #[serde(default)]
    pub stable_tag: String,
    #[serde(default)]
    pub testing_tag: String,
    #[serde(default)]
    pub candidate_tag: String,
    #[serde(default)]
    pub pending_stable_tag: String,
    #[serde(default)]
    pub pending_testing_tag: String,
    #[serde(default)]
    pub pending_signing_tag: Option<String>,
    #[serde(default)]
    pub override_tag: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub mail_template: Option<String>,
    #[serde(default)]
    pub composed_by_bodhi: Option<bool>,
}

/// Creation payload for `POST releases/`, minus the CSRF token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReleaseRequest<'a> {
    pub name: &'a str,
    pub long_name: &'a str,
    pub id_prefix: &'a str,
    pub version: &'a str,
    pub branch: &'a str,
    pub dist_tag: &'a str,
    pub stable_tag: &'a str,
    pub testing_tag: &'a str,
    pub candidate_tag: &'a str,
    pub pending_stable_tag: &'a str,
    pub pending_testing_tag: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_signing_tag: Option<&'a str>,

    pub override_tag: &'a str,
    pub state: ReleaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_template: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composed_by_bodhi: Option<&'a str>,
}
