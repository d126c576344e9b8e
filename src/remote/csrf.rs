use super::*;

impl BodhiClient {
    /// Fetches a CSRF token bound to this client's session cookie.
    pub fn csrf_token(&self) -> Result<String> {
        let resp = self
            .authed(self.client.get(self.url("csrf")?))
            .send()
            .context("csrf token request")?;

        let body: CsrfResponse = self
            .ensure_ok(resp, "csrf token")?
            .json()
            .context("parse csrf token response")?;
        if body.csrf_token.is_empty() {
            anyhow::bail!("bodhi returned an empty csrf token");
        }
        Ok(body.csrf_token)
    }
}
