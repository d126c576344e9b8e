//! DTOs for Bodhi API responses.

use super::Release;

/// Page of `GET releases/`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ReleasesPage {
    pub releases: Vec<Release>,

    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub rows_per_page: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub(super) struct CsrfResponse {
    pub(super) csrf_token: String,
}

/// Outcome of a creation request that reached the server.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    Created(Release),
    /// The server's `errors` payload, verbatim.
    Rejected(serde_json::Value),
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateReleaseForm<'a> {
    pub(super) csrf_token: &'a str,

    #[serde(flatten)]
    pub(super) release: &'a super::ReleaseRequest<'a>,
}
