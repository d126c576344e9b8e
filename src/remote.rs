use anyhow::{Context, Result};

use crate::model::{Release, ReleaseRequest};

mod api;
pub use self::api::ReleaseApi;
mod http_client;
use self::http_client::parse_base_url;

mod types;
pub use self::types::*;
mod csrf;
mod releases;

/// Where and as whom to talk to Bodhi.
#[derive(Clone, Debug)]
pub struct ConnectOptions {
    pub base_url: String,
    pub username: String,
    pub password: Option<String>,
    pub validate_certs: bool,
}

/// Blocking client for the Bodhi REST API.
///
/// The cookie store keeps the session that Bodhi binds CSRF tokens to, so the
/// token and the request using it must go through the same client.
pub struct BodhiClient {
    base_url: reqwest::Url,
    username: String,
    password: Option<String>,
    client: reqwest::blocking::Client,
}

impl BodhiClient {
    pub fn new(options: &ConnectOptions) -> Result<Self> {
        let base_url = parse_base_url(&options.base_url)?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("bodhi-release/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .cookie_store(true)
            .danger_accept_invalid_certs(!options.validate_certs)
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            base_url,
            username: options.username.clone(),
            password: options.password.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
