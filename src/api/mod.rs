//! JSON API served under `/api/v1` plus the top-level healthcheck.
//!
//! # Route table
//! ```text
//! public:
//!     GET  /config
//!     GET  /auth/state
//!     POST /auth/callback
//! protected (require_auth):
//!     GET  /models
//!     GET  /vector-dbs
//! anything else under the prefix → 404 / 405 error envelope
//! ```
//!
//! Routes are declared as `(path, method router)` lists and folded into a
//! `Router` once at startup; the table never changes afterwards.

pub mod config_handler;
pub mod healthcheck;
pub mod models;
pub mod oauth;
pub mod vector_dbs;


use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::http::middleware::require_auth;
use crate::http::response::{method_not_allowed, not_found};
use crate::http::server::AppState;

pub const API_PATH_PREFIX: &str = "/api/v1";
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

type RouteTable = Vec<(&'static str, MethodRouter<AppState>)>;

fn public_routes() -> RouteTable {
    vec![
        ("/config", get(config_handler::get_config)),
        ("/auth/state", get(oauth::get_state)),
        ("/auth/callback", post(oauth::callback)),
    ]
}

fn protected_routes() -> RouteTable {
    vec![
        ("/models", get(models::list_models)),
        ("/vector-dbs", get(vector_dbs::list_vector_dbs)),
    ]
}

fn fold(routes: RouteTable) -> Router<AppState> {
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| router.route(path, method_router))
}

/// Router for everything below [`API_PATH_PREFIX`], meant to be nested there.
pub fn api_router(state: AppState) -> Router<AppState> {
    let protected = fold(protected_routes()).route_layer(middleware::from_fn_with_state(state, require_auth));

    fold(public_routes())
        .merge(protected)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
