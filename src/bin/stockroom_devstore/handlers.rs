use super::*;

const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn graphql(
    State(state): State<Arc<AppState>>,
    Path(version): Path<String>,
    headers: HeaderMap,
    Json(req): Json<GraphqlRequest>,
) -> Response {
    let token = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if token != Some(state.token.as_str()) {
        return unauthorized();
    }
    if !looks_like_api_version(&version) {
        return not_found();
    }

    let mut store = state.store.write().await;
    let body = execute(&mut store, state.faults, &req);
    tracing::debug!(%version, op = ?classify(&req.query), "graphql request served");
    Json(body).into_response()
}

/// `YYYY-MM` or `unstable`.
fn looks_like_api_version(v: &str) -> bool {
    if v == "unstable" {
        return true;
    }
    let bytes = v.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
}
