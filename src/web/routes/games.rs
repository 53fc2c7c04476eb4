//! Game routes - home page and the `/jeux` screens.

use axum::{
    Router,
    extract::State,
    response::{Html, Redirect},
    routing::get,
};

use crate::core::{game, genre, publisher};
use crate::web::AppState;
use crate::web::error::WebError;
use crate::web::extract::{FormBody, IdPath};
use crate::web::forms::GameForm;
use crate::web::views;

/// GET / - featured games
async fn home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let games = game::list_featured_games(&state.db).await?;
    Ok(Html(views::games::featured_page(&games)))
}

/// GET /jeux - all games
async fn list_games(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let games = game::list_games(&state.db).await?;
    Ok(Html(views::games::list_page(&games)))
}

/// GET /jeux/form - empty add form
async fn new_game_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let genres = genre::list_genres(&state.db).await?;
    let publishers = publisher::list_publishers(&state.db).await?;
    Ok(Html(views::games::form_page(None, &genres, &publishers)))
}

/// POST /jeux/form - create a game
async fn create_game(
    State(state): State<AppState>,
    FormBody(form): FormBody<GameForm>,
) -> Result<Redirect, WebError> {
    let input = form
        .into_input()
        .map_err(|e| WebError::creation_failed(&e))?;
    game::create_game(&state.db, input)
        .await
        .map_err(|e| WebError::creation_failed(&e))?;
    Ok(Redirect::to("/jeux"))
}

/// GET /jeux/edit/:id - prefilled edit form
async fn edit_game_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Html<String>, WebError> {
    let details = game::get_game(&state.db, id).await?;
    let genres = genre::list_genres(&state.db).await?;
    let publishers = publisher::list_publishers(&state.db).await?;
    Ok(Html(views::games::form_page(
        Some(&details),
        &genres,
        &publishers,
    )))
}

/// POST /jeux/edit/:id - update a game
async fn update_game(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FormBody(form): FormBody<GameForm>,
) -> Result<Redirect, WebError> {
    tracing::debug!(id, ?form, "Edit game form submitted");
    let input = form.into_input().map_err(|e| WebError::update_failed(&e))?;
    game::update_game(&state.db, id, input)
        .await
        .map_err(|e| WebError::update_failed(&e))?;
    Ok(Redirect::to("/jeux"))
}

/// GET /jeux/:id - detail page
async fn show_game(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Html<String>, WebError> {
    let details = game::get_game(&state.db, id).await?;
    Ok(Html(views::games::detail_page(&details)))
}

/// GET /jeux/delete/:id - delete a game
async fn delete_game(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Redirect, WebError> {
    game::delete_game(&state.db, id).await?;
    Ok(Redirect::to("/jeux"))
}

/// Game routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/jeux", get(list_games))
        .route("/jeux/form", get(new_game_form).post(create_game))
        .route("/jeux/edit/:id", get(edit_game_form).post(update_game))
        .route("/jeux/delete/:id", get(delete_game))
        .route("/jeux/:id", get(show_game))
}
