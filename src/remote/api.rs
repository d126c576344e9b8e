use super::*;

/// The part of the Bodhi API the release ensurer needs.
pub trait ReleaseApi {
    fn list_releases_by_name(&self, name: &str) -> Result<Vec<Release>>;

    fn csrf_token(&self) -> Result<String>;

    fn create_release(
        &self,
        csrf_token: &str,
        request: &ReleaseRequest<'_>,
    ) -> Result<CreateOutcome>;
}

impl ReleaseApi for BodhiClient {
    fn list_releases_by_name(&self, name: &str) -> Result<Vec<Release>> {
        BodhiClient::list_releases_by_name(self, name)
    }

    fn csrf_token(&self) -> Result<String> {
        BodhiClient::csrf_token(self)
    }

    fn create_release(
        &self,
        csrf_token: &str,
        request: &ReleaseRequest<'_>,
    ) -> Result<CreateOutcome> {
        BodhiClient::create_release(self, csrf_token, request)
    }
}
