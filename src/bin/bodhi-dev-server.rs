//! In-memory stand-in for the release endpoints of a Bodhi server.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json, Router};
use tokio::sync::RwLock;
use tracing::info;

#[path = "bodhi_dev_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "bodhi_dev_server/session.rs"]
mod session;
use self::session::*;
#[path = "bodhi_dev_server/validators.rs"]
mod validators;
use self::validators::*;
#[path = "bodhi_dev_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "bodhi_dev_server/handlers_release.rs"]
mod handlers_release;
use self::handlers_release::*;
#[path = "bodhi_dev_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "bodhi_dev_server/runtime.rs"]
mod runtime;

struct AppState {
    dev_user: String,

    // When set, writes must authenticate as `dev_user` with this password.
    dev_password: Option<String>,

    // Known Koji tags; `None` accepts any tag.
    koji_tags: Option<HashSet<String>>,

    releases: RwLock<Vec<Release>>,

    // session id -> csrf token
    sessions: RwLock<HashMap<String, String>>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct Release {
    name: String,
    long_name: String,
    version: String,
    id_prefix: String,
    branch: String,
    dist_tag: String,
    stable_tag: String,
    testing_tag: String,
    candidate_tag: String,
    pending_stable_tag: String,
    pending_testing_tag: String,

    #[serde(default)]
    pending_signing_tag: Option<String>,

    override_tag: String,
    state: String,

    #[serde(default)]
    mail_template: Option<String>,

    composed_by_bodhi: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
