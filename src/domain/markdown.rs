//! Markdown rendering for digest sections.

use crate::domain::settings::Placeholders;
use crate::domain::{CountryVisit, MediaCategory, MediaItem};

/// Make a title safe for link text: `&` becomes "and", brackets are escaped.
pub fn escape_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            '&' => out.push_str("and"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_link(title: &str, url: &str) -> String {
    format!("* [{}]({})", escape_title(title), url)
}

/// One link line per item plus a trailing blank line, or the category placeholder.
pub fn format_media_section(
    items: &[MediaItem],
    category: MediaCategory,
    placeholders: &Placeholders,
) -> String {
    if items.is_empty() {
        return format!("{}\n\n", placeholders.for_category(category));
    }
    let mut md = String::new();
    for item in items {
        md.push_str(&format_link(&item.title, &item.url));
        md.push('\n');
    }
    md.push('\n');
    md
}

pub fn format_country_section(countries: &[CountryVisit], placeholders: &Placeholders) -> String {
    if countries.is_empty() {
        return format!("{}\n\n", placeholders.countries);
    }
    countries
        .iter()
        .map(|c| format!("{} {}\n\n", c.flag, c.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_title() {
        assert_eq!(escape_title("Tom & Jerry"), "Tom and Jerry");
        assert_eq!(escape_title("[REC]"), "\\[REC\\]");
        assert_eq!(escape_title("Plain"), "Plain");
    }

    #[test]
    fn test_format_link() {
        assert_eq!(
            format_link("Fast & Furious", "https://letterboxd.com/film/fast/"),
            "* [Fast and Furious](https://letterboxd.com/film/fast/)"
        );
    }

    #[test]
    fn test_format_media_section() {
        let items = vec![
            MediaItem::new("Dune", "https://oku.club/book/dune"),
            MediaItem::new("Emma", "https://oku.club/book/emma"),
        ];
        let md = format_media_section(&items, MediaCategory::Books, &Placeholders::default());
        assert_eq!(
            md,
            "* [Dune](https://oku.club/book/dune)\n* [Emma](https://oku.club/book/emma)\n\n"
        );
    }

    #[test]
    fn test_empty_sections_use_category_placeholder() {
        let p = Placeholders {
            movies: "m".to_string(),
            books: "b".to_string(),
            shows: "s".to_string(),
            games: "g".to_string(),
            countries: "c".to_string(),
        };
        assert_eq!(format_media_section(&[], MediaCategory::Movies, &p), "m\n\n");
        assert_eq!(format_media_section(&[], MediaCategory::Books, &p), "b\n\n");
        assert_eq!(format_media_section(&[], MediaCategory::Shows, &p), "s\n\n");
        assert_eq!(format_media_section(&[], MediaCategory::Games, &p), "g\n\n");
        assert_eq!(format_country_section(&[], &p), "c\n\n");
    }

    #[test]
    fn test_default_placeholders_are_distinct() {
        let p = Placeholders::default();
        let all = [&p.movies, &p.books, &p.shows, &p.games];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_format_country_section() {
        let countries = vec![
            CountryVisit {
                name: "France".to_string(),
                code: "FR".to_string(),
                flag: "🇫🇷".to_string(),
            },
            CountryVisit {
                name: "Japan".to_string(),
                code: "JP".to_string(),
                flag: "🇯🇵".to_string(),
            },
        ];
        assert_eq!(
            format_country_section(&countries, &Placeholders::default()),
            "🇫🇷 France\n\n🇯🇵 Japan\n\n"
        );
    }
}
