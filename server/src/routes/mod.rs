//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering, the static `/pkg` bundle, public assets
//! (avatars, logo) from the site root, and a health check under one Axum
//! router. The dashboard cookie guard and request tracing wrap every route;
//! all application data lives behind the remote clinic API, so no state is
//! attached here.

pub mod guard;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR app plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(medicare_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || medicare_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(with_layers(with_static(leptos_router, &site_root_path)))
}

/// `/healthz`, the `/pkg` bundle, and a fallback to files copied from
/// `assets-dir` into the site root.
fn with_static(router: Router, site_root: &Path) -> Router {
    router
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
}

/// Guard, compression, and tracing, outermost last.
fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(guard::require_session))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
