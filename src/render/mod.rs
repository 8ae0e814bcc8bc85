//! Card output: terminal text, JSON, and printable HTML.
//!
//! Renderers only read cards. The center square is drawn from
//! `Card::free_space` when present and from the `"FREE"` label otherwise.

pub mod cursor;
pub mod html;
pub mod json;
pub mod text;

pub use cursor::CardCursor;
pub use html::ImageSource;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        };
        f.write_str(name)
    }
}

/// Render cards in the chosen format.
pub fn render_cards<M, T>(cards: &[Card<M, T>], format: OutputFormat) -> serde_json::Result<String>
where
    M: ImageSource + Serialize,
    T: std::fmt::Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(text::render_cards(cards)),
        OutputFormat::Json => json::render_cards(cards),
        OutputFormat::Html => Ok(html::render_document(cards)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_cards, CardRng, FreeSpaceImage, ThemeColor, WordPool};

    #[test]
    fn test_render_cards_dispatch() {
        let pool = WordPool::new((1..=24).map(|i| format!("w{i}")));
        let mut rng = CardRng::new(4);
        let cards = generate_cards(
            &pool,
            1,
            None::<FreeSpaceImage>,
            ThemeColor::default(),
            &mut rng,
        )
        .unwrap();

        assert!(render_cards(&cards, OutputFormat::Text).unwrap().starts_with("Card 1 of 1"));
        assert!(render_cards(&cards, OutputFormat::Json).unwrap().starts_with('['));
        assert!(render_cards(&cards, OutputFormat::Html).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Html.to_string(), "html");
    }
}
