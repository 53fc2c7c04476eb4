//! Publisher routes - the `/editeurs` screens.

use axum::{
    Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
};

use crate::core::{game, publisher};
use crate::web::AppState;
use crate::web::error::WebError;
use crate::web::extract::{FormBody, IdPath};
use crate::web::forms::PublisherForm;
use crate::web::views;

/// GET /editeurs - all publishers
async fn list_publishers(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let publishers = publisher::list_publishers(&state.db).await?;
    Ok(Html(views::publishers::list_page(&publishers)))
}

/// GET /editeurs/form - empty add form
async fn new_publisher_form() -> Html<String> {
    Html(views::publishers::form_page(None))
}

/// POST /editeurs/form - create a publisher
async fn create_publisher(
    State(state): State<AppState>,
    FormBody(form): FormBody<PublisherForm>,
) -> Result<Redirect, WebError> {
    publisher::create_publisher(&state.db, form.name, form.country)
        .await
        .map_err(|e| WebError::creation_failed(&e))?;
    Ok(Redirect::to("/editeurs"))
}

/// GET /editeurs/edit/:id - prefilled edit form
async fn edit_publisher_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Html<String>, WebError> {
    let existing = publisher::get_publisher(&state.db, id).await?;
    Ok(Html(views::publishers::form_page(Some(&existing))))
}

/// POST /editeurs/edit/:id - rename a publisher
async fn update_publisher(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FormBody(form): FormBody<PublisherForm>,
) -> Result<Redirect, WebError> {
    tracing::debug!(id, ?form, "Edit publisher form submitted");
    publisher::update_publisher(&state.db, id, form.name, form.country)
        .await
        .map_err(|e| WebError::update_failed(&e))?;
    Ok(Redirect::to("/editeurs"))
}

/// GET /editeurs/:editeur - games of one publisher, by name
async fn publisher_games(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, WebError> {
    let games = game::list_games_by_publisher(&state.db, &name).await?;
    Ok(Html(views::publishers::games_page(&name, &games)))
}

/// GET /editeurs/delete/:id - delete a publisher and its games
async fn delete_publisher(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Redirect, WebError> {
    publisher::delete_publisher(&state.db, id).await?;
    Ok(Redirect::to("/editeurs"))
}

/// Publisher routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/editeurs", get(list_publishers))
        .route(
            "/editeurs/form",
            get(new_publisher_form).post(create_publisher),
        )
        .route(
            "/editeurs/edit/:id",
            get(edit_publisher_form).post(update_publisher),
        )
        .route("/editeurs/delete/:id", get(delete_publisher))
        .route("/editeurs/:editeur", get(publisher_games))
}
