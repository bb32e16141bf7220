//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the host's own endpoints with Leptos SSR rendering under a single
//! Axum router. Module backends are separate services; nothing here proxies
//! to them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use session::ModuleProfile;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Host endpoints that do not involve the Leptos app.
pub fn host_routes(default_module: ModuleProfile) -> Router {
    let home = default_module.home_route();
    Router::new().route("/healthz", get(healthz)).route(
        "/",
        get(move || {
            let home = home.clone();
            async move { Redirect::temporary(&home) }
        }),
    )
}

/// Host endpoints + Leptos SSR routes + the `/pkg` client bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(default_module: ModuleProfile) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(host_routes(default_module)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
