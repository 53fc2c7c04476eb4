//! Genre routes - read-only listing and per-genre games.

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};

use crate::core::{game, genre};
use crate::web::AppState;
use crate::web::error::WebError;
use crate::web::views;

/// GET /genres - all genres
async fn list_genres(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let genres = genre::list_genres(&state.db).await?;
    Ok(Html(views::genres::list_page(&genres)))
}

/// GET /genres/:genre - games of one genre, by name
async fn genre_games(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, WebError> {
    let games = game::list_games_by_genre(&state.db, &name).await?;
    Ok(Html(views::genres::games_page(&name, &games)))
}

/// Genre routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genres/:genre", get(genre_games))
}
