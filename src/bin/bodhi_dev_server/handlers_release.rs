use super::*;

const ROWS_PER_PAGE: usize = 20;

#[derive(Debug, serde::Deserialize)]
pub(super) struct ListReleasesQuery {
    #[serde(default)]
    name: Option<String>,
}

pub(super) async fn list_releases(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListReleasesQuery>,
) -> Json<serde_json::Value> {
    let releases = state.releases.read().await;
    let matching: Vec<&Release> = releases
        .iter()
        .filter(|r| {
            q.name
                .as_deref()
                .is_none_or(|name| r.name.eq_ignore_ascii_case(name))
        })
        .collect();

    let total = matching.len();
    Json(serde_json::json!({
        "releases": matching,
        "page": 1,
        "pages": total.div_ceil(ROWS_PER_PAGE).max(1),
        "rows_per_page": ROWS_PER_PAGE,
        "total": total,
    }))
}

pub(super) async fn create_release(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<CreateReleaseForm>,
) -> Result<Json<Release>, Response> {
    let user = authenticate(&state, &headers).ok_or_else(login_required)?;

    if !csrf_matches(&state, &headers, form.csrf_token.as_deref()).await {
        return Err(bad_request(vec![ErrorEntry::body(
            "csrf_token",
            "CSRF tokens do not match",
        )]));
    }

    let mut releases = state.releases.write().await;
    let release =
        validate_release_form(&form, state.koji_tags.as_ref(), &releases).map_err(bad_request)?;

    info!(release = %release.name, user = %user, "created release");
    releases.push(release.clone());
    Ok(Json(release))
}
