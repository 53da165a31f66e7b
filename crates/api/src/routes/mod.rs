pub mod admin;
pub mod clients;
pub mod download;
pub mod preview;
pub mod root;
pub mod scalar_config;

use crate::routes::admin::handlers::{admin_clients, admin_stats};
use crate::routes::admin::middleware::require_admin_code;
use crate::routes::clients::handlers::{
    get_client, get_client_images, list_clients, unlock_client,
};
use crate::routes::download::handlers::download_file;
use crate::routes::preview::handlers::get_preview;
use crate::routes::root::handlers::root;
use crate::routes::scalar_config::get_custom_html;
use crate::state::ApiState;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::{LatencyUnit, trace::TraceLayer};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

// --- API Documentation ---
#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        // Client album handlers
        clients::handlers::list_clients,
        clients::handlers::get_client,
        clients::handlers::get_client_images,
        clients::handlers::unlock_client,
        // Download / preview handlers
        download::handlers::download_file,
        preview::handlers::get_preview,
        // Admin handlers
        admin::handlers::admin_clients,
        admin::handlers::admin_stats,
    ),
    components(
        schemas(
            common_albums::ClientRecord,
            common_albums::ImageRef,
            clients::interfaces::ClientSummary,
            clients::interfaces::UnlockRequest,
            clients::interfaces::UnlockResponse,
            clients::interfaces::ImageSource,
            clients::interfaces::ClientImagesResponse,
            admin::interfaces::AdminStats,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Clients", description = "Public album listing, images and the password gate"),
        (name = "Admin", description = "Album administration behind the admin access code")
    )
)]
struct ApiDoc;

/// A modifier to add the admin access-code header to the `OpenAPI` specification.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_code",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Admin-Code"))),
        );
    }
}

// --- Router Construction ---
pub fn create_router(state: ApiState) -> Router {
    let openapi = ApiDoc::openapi();
    let clients_static = ServeDir::new(state.clients_dir.as_ref().clone());

    Router::new()
        .merge(Scalar::with_url("/docs", openapi.clone()).custom_html(get_custom_html(&openapi)))
        .merge(public_routes())
        .merge(admin_routes(state.clone()))
        .nest_service("/clientes", clients_static)
        .layer(cors_layer(&state))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().on_response(
                tower_http::trace::DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
}

fn public_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/clients", get(list_clients))
        .route("/clients/{id}", get(get_client))
        .route("/clients/{id}/images", get(get_client_images))
        .route("/clients/{id}/unlock", post(unlock_client))
        .route("/download/file", get(download_file))
        .route("/preview", get(get_preview))
}

fn admin_routes(state: ApiState) -> Router<ApiState> {
    Router::new()
        .route("/admin/clients", get(admin_clients))
        .route("/admin/stats", get(admin_stats))
        .route_layer(from_fn_with_state(state, require_admin_code))
}

fn cors_layer(state: &ApiState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-admin-code"),
        ])
}
