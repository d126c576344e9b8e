//! HTTP route registration for the dev server.

use axum::middleware::{self, Next};
use axum::routing::get;

use super::*;

pub(super) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/csrf", get(csrf))
        .route("/releases/", get(list_releases).post(create_release))
        .route("/releases", get(list_releases).post(create_release))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: axum::extract::Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let resp = next.run(req).await;
    info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}
