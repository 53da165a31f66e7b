//! HTTP handlers for the admin listing. These run behind
//! [`require_admin_code`](crate::routes::admin::middleware::require_admin_code).

use crate::routes::admin::interfaces::AdminStats;
use crate::routes::admin::service;
use crate::state::ApiState;
use axum::Json;
use axum::extract::State;
use common_albums::ClientRecord;

/// Full client records, including access codes, for the admin panel.
#[utoipa::path(
    get,
    path = "/admin/clients",
    security(("admin_code" = [])),
    responses(
        (status = 200, description = "All client records.", body = [ClientRecord]),
        (status = 401, description = "Missing or wrong admin code."),
    )
)]
pub async fn admin_clients(State(state): State<ApiState>) -> Json<Vec<ClientRecord>> {
    Json(state.manifest.all_clients())
}

/// Aggregated album counts for the admin dashboard.
#[utoipa::path(
    get,
    path = "/admin/stats",
    security(("admin_code" = [])),
    responses(
        (status = 200, description = "Totals over the manifest.", body = AdminStats),
        (status = 401, description = "Missing or wrong admin code."),
    )
)]
pub async fn admin_stats(State(state): State<ApiState>) -> Json<AdminStats> {
    Json(service::stats(&state.manifest))
}
