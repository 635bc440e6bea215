//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the admin API proxy and the health probe, and stitches
//! them with Leptos SSR rendering under a single Axum router. Compiled WASM,
//! JS and CSS are served from the site root's `/pkg` directory.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use storefront_admin_ui::app::{App, shell};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Proxy and probe routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/admin/{*path}", any(proxy::forward))
        .route("/admin", get(redirect_admin_root))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn redirect_admin_root() -> Redirect {
    Redirect::temporary("/admin/comments")
}

/// Full application: proxy routes, Leptos SSR pages and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let client_config = state.config.client_config();

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, move || provide_context(client_config), {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), client_config)
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
