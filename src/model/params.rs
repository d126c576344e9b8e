//! Argument schema of the `bodhi_release` module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coerce::{ParamKind, ParamSpec, coerce_args};
use super::release::{Release, ReleaseRequest};
use crate::error::ModuleError;
use crate::remote::ConnectOptions;

pub const MODULE_NAME: &str = "bodhi_release";
pub const DEFAULT_URL: &str = "https://bodhi.fedoraproject.org";

const STATE_CHOICES: &[&str] = &["disabled", "pending", "current", "archived"];

const fn required(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Str,
        required: true,
    }
}

const fn optional(name: &'static str, kind: ParamKind) -> ParamSpec {
    ParamSpec {
        name,
        kind,
        required: false,
    }
}

const SCHEMA: &[ParamSpec] = &[
    required("name"),
    required("long_name"),
    required("id_prefix"),
    required("version"),
    required("branch"),
    required("dist_tag"),
    required("stable_tag"),
    required("testing_tag"),
    required("candidate_tag"),
    required("pending_stable_tag"),
    required("pending_testing_tag"),
    optional("pending_signing_tag", ParamKind::Str),
    required("override_tag"),
    optional("state", ParamKind::Choice(STATE_CHOICES)),
    required("user"),
    optional("mail_template", ParamKind::Str),
    optional("composed_by_bodhi", ParamKind::Str),
    optional("url", ParamKind::Str),
    optional("password", ParamKind::Str),
    optional("validate_certs", ParamKind::Bool),
];

/// Lifecycle state of a release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseState {
    Disabled,
    #[default]
    Pending,
    Current,
    Archived,
}

impl ReleaseState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseState::Disabled => "disabled",
            ReleaseState::Pending => "pending",
            ReleaseState::Current => "current",
            ReleaseState::Archived => "archived",
        }
    }
}

impl fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(ReleaseState::Disabled),
            "pending" => Ok(ReleaseState::Pending),
            "current" => Ok(ReleaseState::Current),
            "archived" => Ok(ReleaseState::Archived),
            other => Err(format!(
                "unknown release state {:?} (expected one of: {})",
                other,
                STATE_CHOICES.join(", ")
            )),
        }
    }
}

/// Parameters of one module invocation.
#[derive(Clone, Deserialize)]
pub struct ReleaseParams {
    pub name: String,
    pub long_name: String,
    pub id_prefix: String,
    pub version: String,
    pub branch: String,
    pub dist_tag: String,
    pub stable_tag: String,
    pub testing_tag: String,
    pub candidate_tag: String,
    pub pending_stable_tag: String,
    pub pending_testing_tag: String,

    #[serde(default)]
    pub pending_signing_tag: Option<String>,

    pub override_tag: String,

    #[serde(default)]
    pub state: ReleaseState,

    /// FAS user the release is created as.
    pub user: String,

    #[serde(default)]
    pub mail_template: Option<String>,

    #[serde(default)]
    pub composed_by_bodhi: Option<String>,

    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default = "default_true")]
    pub validate_certs: bool,
}

impl fmt::Debug for ReleaseParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseParams")
            .field("name", &self.name)
            .field("long_name", &self.long_name)
            .field("version", &self.version)
            .field("state", &self.state)
            .field("user", &self.user)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl ReleaseParams {
    /// Parses the module's argument block.
    pub fn from_args(args: &Map<String, Value>) -> Result<Self, ModuleError> {
        let coerced = coerce_args(args, SCHEMA)?;
        serde_json::from_value(Value::Object(coerced)).map_err(|e| {
            ModuleError::InvalidArguments(format!("invalid module arguments: {}", e))
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            base_url: self.url.clone(),
            username: self.user.clone(),
            password: self.password.clone(),
            validate_certs: self.validate_certs,
        }
    }

    /// Field set sent to `POST releases/`.
    pub fn release_request(&self) -> ReleaseRequest<'_> {
        ReleaseRequest {
            name: &self.name,
            long_name: &self.long_name,
            id_prefix: &self.id_prefix,
            version: &self.version,
            branch: &self.branch,
            dist_tag: &self.dist_tag,
            stable_tag: &self.stable_tag,
            testing_tag: &self.testing_tag,
            candidate_tag: &self.candidate_tag,
            pending_stable_tag: &self.pending_stable_tag,
            pending_testing_tag: &self.pending_testing_tag,
            pending_signing_tag: self.pending_signing_tag.as_deref(),
            override_tag: &self.override_tag,
            state: self.state,
            mail_template: self.mail_template.as_deref(),
            composed_by_bodhi: self.composed_by_bodhi.as_deref(),
        }
    }

    /// Names of the requested fields that differ from `existing`.
    pub fn drifted_fields(&self, existing: &Release) -> Vec<&'static str> {
        let mut fields: Vec<(&'static str, &str, &str)> = vec![
            ("long_name", self.long_name.as_str(), existing.long_name.as_str()),
            ("id_prefix", self.id_prefix.as_str(), existing.id_prefix.as_str()),
            ("version", self.version.as_str(), existing.version.as_str()),
            ("branch", self.branch.as_str(), existing.branch.as_str()),
            ("dist_tag", self.dist_tag.as_str(), existing.dist_tag.as_str()),
            ("stable_tag", self.stable_tag.as_str(), existing.stable_tag.as_str()),
            ("testing_tag", self.testing_tag.as_str(), existing.testing_tag.as_str()),
            (
                "candidate_tag",
                self.candidate_tag.as_str(),
                existing.candidate_tag.as_str(),
            ),
            (
                "pending_stable_tag",
                self.pending_stable_tag.as_str(),
                existing.pending_stable_tag.as_str(),
            ),
            (
                "pending_testing_tag",
                self.pending_testing_tag.as_str(),
                existing.pending_testing_tag.as_str(),
            ),
            (
                "override_tag",
                self.override_tag.as_str(),
                existing.override_tag.as_str(),
            ),
            ("state", self.state.as_str(), existing.state.as_str()),
        ];
        if let Some(tag) = &self.pending_signing_tag {
            fields.push((
                "pending_signing_tag",
                tag.as_str(),
                existing.pending_signing_tag.as_deref().unwrap_or_default(),
            ));
        }

        fields
            .into_iter()
            .filter(|(_, wanted, actual)| wanted != actual)
            .map(|(name, _, _)| name)
            .collect()
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "../tests/model/params_tests.rs"]
mod tests;
