use crate::state::ApiState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

/// Gate for the admin routes: the configured access code must arrive
/// in the `X-Admin-Code` header. This is an access code, not an
/// authentication system; there are no sessions or tokens.
pub async fn require_admin_code(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(ADMIN_CODE_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided == Some(state.admin_code.as_str()) {
        next.run(request).await
    } else {
        warn!("Rejected admin request without a valid access code");
        StatusCode::UNAUTHORIZED.into_response()
    }
}
