use super::{escape, format_date, format_date_for_input, layout};
use crate::core::game::GameDetails;
use crate::entities::{genre, publisher};

/// Renders a grid of game cards, or a placeholder when there are none.
pub(crate) fn game_cards(games: &[GameDetails]) -> String {
    if games.is_empty() {
        return "<p class=\"empty\">Aucun jeu.</p>".to_string();
    }

    let mut html = String::from("<ul class=\"games\">\n");
    for details in games {
        let game = &details.game;
        html.push_str(&format!(
            r#"<li class="game">
<a href="/jeux/{id}"><img src="{image}" alt="{title}"></a>
<h2><a href="/jeux/{id}">{title}</a></h2>
<p><a href="/genres/{genre_url}">{genre}</a> · <a href="/editeurs/{publisher_url}">{publisher}</a></p>
<p class="actions"><a href="/jeux/edit/{id}">Modifier</a> <a href="/jeux/delete/{id}">Supprimer</a></p>
</li>
"#,
            id = game.id,
            image = escape(&game.image),
            title = escape(&game.title),
            genre_url = urlencoding::encode(&details.genre),
            genre = escape(&details.genre),
            publisher_url = urlencoding::encode(&details.publisher),
            publisher = escape(&details.publisher),
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Home page: featured games.
#[must_use]
pub fn featured_page(games: &[GameDetails]) -> String {
    layout("Jeux mis en avant", &game_cards(games))
}

/// All games, with a link to the add form.
#[must_use]
pub fn list_page(games: &[GameDetails]) -> String {
    let content = format!(
        "<p><a class=\"button\" href=\"/jeux/form\">Ajouter un jeu</a></p>\n{}",
        game_cards(games)
    );
    layout("Jeux", &content)
}

/// Detail page of one game.
#[must_use]
pub fn detail_page(details: &GameDetails) -> String {
    let game = &details.game;
    let featured = if game.featured {
        "<p class=\"badge\">Mis en avant</p>\n"
    } else {
        ""
    };
    let content = format!(
        r#"<article class="game-detail">
<img src="{image}" alt="{title}">
{featured}<dl>
<dt>Date de sortie</dt><dd>{date}</dd>
<dt>Genre</dt><dd><a href="/genres/{genre_url}">{genre}</a></dd>
<dt>Éditeur</dt><dd><a href="/editeurs/{publisher_url}">{publisher}</a></dd>
</dl>
<p>{description}</p>
<p class="actions"><a href="/jeux/edit/{id}">Modifier</a> <a href="/jeux/delete/{id}">Supprimer</a></p>
</article>
"#,
        id = game.id,
        image = escape(&game.image),
        title = escape(&game.title),
        date = format_date(&game.release_date),
        genre_url = urlencoding::encode(&details.genre),
        genre = escape(&details.genre),
        publisher_url = urlencoding::encode(&details.publisher),
        publisher = escape(&details.publisher),
        description = escape(&game.description),
    );
    layout(&game.title, &content)
}

/// `<option>` list with the entry equal to `selected` preselected.
fn options<'a>(names: impl Iterator<Item = &'a str>, selected: Option<&str>) -> String {
    let mut html = String::new();
    for name in names {
        let marker = if Some(name) == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>\n",
            value = escape(name)
        ));
    }
    html
}

/// Add form when `existing` is `None`, edit form for that game otherwise.
#[must_use]
pub fn form_page(
    existing: Option<&GameDetails>,
    genres: &[genre::Model],
    publishers: &[publisher::Model],
) -> String {
    let (title, action) = match existing {
        Some(details) => (
            format!("Modifier {}", details.game.title),
            format!("/jeux/edit/{}", details.game.id),
        ),
        None => ("Ajouter un jeu".to_string(), "/jeux/form".to_string()),
    };
    let game = existing.map(|d| &d.game);

    let content = format!(
        r#"<form method="post" action="{action}">
<label>Titre <input type="text" name="titre" value="{titre}" required></label>
<label>Description <textarea name="description">{description}</textarea></label>
<label>Date de sortie <input type="datetime-local" name="date" value="{date}" required></label>
<label>Genre <select name="genre">
{genres}</select></label>
<label>Éditeur <select name="editeur">
{publishers}</select></label>
<label><input type="checkbox" name="misenavant" value="true"{checked}> Mis en avant</label>
<label>Image <input type="text" name="image" value="{image}"></label>
<button type="submit">Enregistrer</button>
</form>
"#,
        titre = game.map(|g| escape(&g.title)).unwrap_or_default(),
        description = game.map(|g| escape(&g.description)).unwrap_or_default(),
        date = game
            .map(|g| format_date_for_input(&g.release_date))
            .unwrap_or_default(),
        genres = options(
            genres.iter().map(|g| g.name.as_str()),
            existing.map(|d| d.genre.as_str())
        ),
        publishers = options(
            publishers.iter().map(|p| p.name.as_str()),
            existing.map(|d| d.publisher.as_str())
        ),
        checked = if game.is_some_and(|g| g.featured) {
            " checked"
        } else {
            ""
        },
        image = game.map(|g| escape(&g.image)).unwrap_or_default(),
    );
    layout(&title, &content)
}
