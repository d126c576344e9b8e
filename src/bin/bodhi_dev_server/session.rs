use base64::Engine;

use super::*;

pub(super) const SESSION_COOKIE: &str = "bodhi_session";

pub(super) fn random_hex(len: usize) -> Result<String> {
    let mut bytes = vec![0u8; len];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(len * 2);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

pub(super) fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == SESSION_COOKIE)
        .map(|(_, v)| v.to_string())
}

/// Decodes `Authorization: Basic ...` into `(user, password)`.
pub(super) fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));
    Some((user.to_string(), password.to_string()))
}

/// Returns the acting user, or `None` when the request is not logged in.
pub(super) fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let (user, password) = basic_credentials(headers)?;
    if user.is_empty() {
        return None;
    }
    if let Some(expected) = &state.dev_password
        && (user != state.dev_user || &password != expected)
    {
        return None;
    }
    Some(user)
}

/// Whether `token` is the csrf token issued to the request's session.
pub(super) async fn csrf_matches(state: &AppState, headers: &HeaderMap, token: Option<&str>) -> bool {
    let (Some(id), Some(token)) = (session_id(headers), token) else {
        return false;
    };
    let sessions = state.sessions.read().await;
    sessions.get(&id).is_some_and(|t| t == token)
}
