use super::http_client::rejection_errors;
use super::*;

impl BodhiClient {
    pub fn list_releases_by_name(&self, name: &str) -> Result<Vec<Release>> {
        let resp = self
            .authed(self.client.get(self.url("releases/")?))
            .query(&[("name", name)])
            .send()
            .context("list releases")?;

        let page: ReleasesPage = self
            .ensure_ok(resp, "list releases")?
            .json()
            .context("parse releases")?;
        Ok(page.releases)
    }

    pub fn create_release(
        &self,
        csrf_token: &str,
        request: &ReleaseRequest<'_>,
    ) -> Result<CreateOutcome> {
        let resp = self
            .authed(self.client.post(self.url("releases/")?))
            .form(&CreateReleaseForm {
                csrf_token,
                release: request,
            })
            .send()
            .context("create release")?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(self.unauthorized());
        }

        let body: serde_json::Value = resp
            .json()
            .with_context(|| format!("parse create release response (status {})", status))?;

        if let Some(errors) = rejection_errors(&body) {
            return Ok(CreateOutcome::Rejected(errors));
        }
        if !status.is_success() {
            anyhow::bail!("create release status {}", status);
        }

        let release: Release = serde_json::from_value(body).context("parse created release")?;
        Ok(CreateOutcome::Created(release))
    }
}
