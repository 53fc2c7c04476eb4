use super::{escape, games::game_cards, layout};
use crate::core::game::GameDetails;
use crate::entities::publisher;

/// All publishers with edit and delete links.
#[must_use]
pub fn list_page(publishers: &[publisher::Model]) -> String {
    let mut content = String::from(
        "<p><a class=\"button\" href=\"/editeurs/form\">Ajouter un éditeur</a></p>\n",
    );
    if publishers.is_empty() {
        content.push_str("<p class=\"empty\">Aucun éditeur.</p>\n");
        return layout("Éditeurs", &content);
    }

    content.push_str("<table class=\"publishers\">\n<tr><th>Nom</th><th>Pays</th><th></th></tr>\n");
    for publisher in publishers {
        content.push_str(&format!(
            r#"<tr>
<td><a href="/editeurs/{name_url}">{name}</a></td>
<td>{country}</td>
<td class="actions"><a href="/editeurs/edit/{id}">Modifier</a> <a href="/editeurs/delete/{id}" title="Supprime aussi ses jeux">Supprimer</a></td>
</tr>
"#,
            id = publisher.id,
            name_url = urlencoding::encode(&publisher.name),
            name = escape(&publisher.name),
            country = escape(&publisher.country),
        ));
    }
    content.push_str("</table>\n");
    layout("Éditeurs", &content)
}

/// Add form when `existing` is `None`, edit form for that publisher otherwise.
#[must_use]
pub fn form_page(existing: Option<&publisher::Model>) -> String {
    let (title, action) = match existing {
        Some(p) => (format!("Modifier {}", p.name), format!("/editeurs/edit/{}", p.id)),
        None => ("Ajouter un éditeur".to_string(), "/editeurs/form".to_string()),
    };
    let content = format!(
        r#"<form method="post" action="{action}">
<label>Nom <input type="text" name="nom" value="{name}" required></label>
<label>Pays <input type="text" name="pays" value="{country}"></label>
<button type="submit">Enregistrer</button>
</form>
"#,
        name = existing.map(|p| escape(&p.name)).unwrap_or_default(),
        country = existing.map(|p| escape(&p.country)).unwrap_or_default(),
    );
    layout(&title, &content)
}

/// Games of one publisher.
#[must_use]
pub fn games_page(publisher_name: &str, games: &[GameDetails]) -> String {
    layout(&format!("Éditeur : {publisher_name}"), &game_cards(games))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> publisher::Model {
        publisher::Model {
            id: 4,
            name: "Square Enix".to_string(),
            country: "Japon".to_string(),
        }
    }

    #[test]
    fn test_list_page() {
        let html = list_page(&[sample()]);
        assert!(html.contains("<a href=\"/editeurs/Square%20Enix\">Square Enix</a>"));
        assert!(html.contains("<td>Japon</td>"));
        assert!(html.contains("href=\"/editeurs/delete/4\""));
    }

    #[test]
    fn test_empty_list_page() {
        assert!(list_page(&[]).contains("Aucun éditeur."));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let html = form_page(Some(&sample()));
        assert!(html.contains("action=\"/editeurs/edit/4\""));
        assert!(html.contains("name=\"nom\" value=\"Square Enix\""));
        assert!(html.contains("name=\"pays\" value=\"Japon\""));
    }

    #[test]
    fn test_add_form() {
        let html = form_page(None);
        assert!(html.contains("action=\"/editeurs/form\""));
        assert!(html.contains("name=\"nom\" value=\"\""));
    }
}
