//! HTML rendering for the catalog pages.
//!
//! Every page is a plain function from core results to a `String`; handlers wrap the
//! result in `axum::response::Html`. All user-provided text goes through [`escape`].

/// Game pages: home, listing, detail and the add/edit form
pub mod games;
/// Genre pages
pub mod genres;
/// Publisher pages
pub mod publishers;

use chrono::{DateTime, Utc};

/// Escapes text for use in HTML element content and quoted attribute values.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a timestamp for an `<input type="datetime-local">` value.
#[must_use]
pub fn format_date_for_input(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M").to_string()
}

/// Formats a timestamp for display.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Wraps page content in the shared layout (head, navigation bar, title).
#[must_use]
pub fn layout(title: &str, content: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Ludothèque</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<header>
<nav>
<a href="/">Accueil</a>
<a href="/jeux">Jeux</a>
<a href="/editeurs">Éditeurs</a>
<a href="/genres">Genres</a>
</nav>
</header>
<main>
<h1>{title}</h1>
{content}
</main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("Zelda"), "Zelda");
    }

    #[test]
    fn test_link_segments_are_percent_encoded() {
        assert_eq!(urlencoding::encode("RPG"), "RPG");
        assert_eq!(urlencoding::encode("Square Enix"), "Square%20Enix");
        assert_eq!(urlencoding::encode("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(urlencoding::encode("Éditeur"), "%C3%89diteur");
    }

    #[test]
    fn test_date_formats() {
        let date = Utc.with_ymd_and_hms(2017, 3, 3, 9, 5, 0).unwrap();
        assert_eq!(format_date_for_input(&date), "2017-03-03T09:05");
        assert_eq!(format_date(&date), "03/03/2017");
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("<script>", "<p>ok</p>");
        assert!(page.contains("<h1>&lt;script&gt;</h1>"));
        assert!(page.contains("<p>ok</p>"));
    }
}
