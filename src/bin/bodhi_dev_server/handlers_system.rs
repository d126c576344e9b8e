use super::*;

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Hands out the csrf token of the caller's session, opening a session if needed.
pub(super) async fn csrf(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, Response> {
    let mut sessions = state.sessions.write().await;
    if let Some(id) = session_id(&headers)
        && let Some(token) = sessions.get(&id)
    {
        return Ok(Json(serde_json::json!({"csrf_token": token})).into_response());
    }

    let id = random_hex(16).map_err(internal_error)?;
    let token = random_hex(20).map_err(internal_error)?;
    sessions.insert(id.clone(), token.clone());

    Ok((
        [(
            header::SET_COOKIE,
            format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, id),
        )],
        Json(serde_json::json!({"csrf_token": token})),
    )
        .into_response())
}
