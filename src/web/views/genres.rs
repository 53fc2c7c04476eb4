use super::{escape, games::game_cards, layout};
use crate::core::game::GameDetails;
use crate::entities::genre;

/// All genres, each linking to its games.
#[must_use]
pub fn list_page(genres: &[genre::Model]) -> String {
    let mut content = String::from("<ul class=\"genres\">\n");
    for genre in genres {
        content.push_str(&format!(
            "<li><a href=\"/genres/{}\">{}</a></li>\n",
            urlencoding::encode(&genre.name),
            escape(&genre.name)
        ));
    }
    content.push_str("</ul>\n");
    layout("Genres", &content)
}

/// Games of one genre.
#[must_use]
pub fn games_page(genre_name: &str, games: &[GameDetails]) -> String {
    layout(&format!("Genre : {genre_name}"), &game_cards(games))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_page_links_each_genre() {
        let genres = vec![
            genre::Model {
                id: 1,
                name: "Action".to_string(),
            },
            genre::Model {
                id: 2,
                name: "Jeu de rôle".to_string(),
            },
        ];
        let html = list_page(&genres);
        assert!(html.contains("<a href=\"/genres/Action\">Action</a>"));
        assert!(html.contains("href=\"/genres/Jeu%20de%20r%C3%B4le\""));
    }

    #[test]
    fn test_games_page_title() {
        let html = games_page("RPG", &[]);
        assert!(html.contains("<h1>Genre : RPG</h1>"));
        assert!(html.contains("Aucun jeu."));
    }
}
