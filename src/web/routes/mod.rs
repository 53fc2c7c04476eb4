//! Route table. Paths keep the French names of the public site.

use axum::Router;

use super::AppState;

/// Game routes and the home page
pub mod games;
/// Genre routes
pub mod genres;
/// Publisher routes
pub mod publishers;

/// All catalog routes, still expecting [`AppState`].
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(games::router())
        .merge(publishers::router())
        .merge(genres::router())
}
