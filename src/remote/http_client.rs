use super::*;

pub(super) fn parse_base_url(raw: &str) -> Result<reqwest::Url> {
    let mut url =
        reqwest::Url::parse(raw.trim()).with_context(|| format!("invalid bodhi url {:?}", raw))?;
    match url.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("unsupported url scheme {:?} in {:?}", other, raw),
    }
    if url.cannot_be_a_base() {
        anyhow::bail!("bodhi url {:?} cannot be used as a base url", raw);
    }
    // Relative joins only append to a path that ends in '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Returns the `errors` member of a Bodhi response body, if any.
pub(super) fn rejection_errors(body: &serde_json::Value) -> Option<serde_json::Value> {
    body.get("errors").cloned()
}

impl BodhiClient {
    pub(super) fn url(&self, path: &str) -> Result<reqwest::Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("build url for {}", path))
    }

    pub(super) fn authed(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        req.basic_auth(&self.username, self.password.as_deref())
    }

    pub(super) fn unauthorized(&self) -> anyhow::Error {
        anyhow::anyhow!(
            "unauthorized as {} (check the user and password given to the module)",
            self.username
        )
    }

    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(self.unauthorized());
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!(
                "forbidden for {} (the user may lack permission to manage releases)",
                self.username
            );
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
