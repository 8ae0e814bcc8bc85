//! Printable HTML output.
//!
//! Produces one standalone document with every card on its own page. The
//! theme colors the `B I N G O` header and the cell borders. When a card
//! carries a free space image, the center cell shows it under a darkened
//! `FREE` overlay.

use std::fmt::{Display, Write};

use crate::cards::{is_free_index, Card, FreeSpaceImage, FREE_LABEL};

/// Something that can be used as an `<img src>`.
pub trait ImageSource {
    fn src(&self) -> &str;
}

impl ImageSource for FreeSpaceImage {
    fn src(&self) -> &str {
        self.uri()
    }
}

impl ImageSource for String {
    fn src(&self) -> &str {
        self
    }
}

impl ImageSource for &str {
    fn src(&self) -> &str {
        self
    }
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; }
.card { width: 650px; margin: 2rem auto; page-break-after: always; }
.card:last-child { page-break-after: auto; }
.grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.5rem; }
.letter { font-weight: bold; font-size: 2.25rem; text-align: center; }
.cell { aspect-ratio: 1; border: 2px solid; border-radius: 4px; display: flex;
  align-items: center; justify-content: center; padding: 0.5rem; position: relative;
  font-size: 0.875rem; font-weight: 500; text-align: center; line-height: 1.2; }
.free img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.free .overlay { position: absolute; inset: 0; display: flex; align-items: center;
  justify-content: center; background-color: rgba(0, 0, 0, 0.3); color: white; font-weight: bold; }
@media print { .card { margin: 0 auto; } }
";

/// Render all cards into one HTML document.
#[must_use]
pub fn render_document<M, T>(cards: &[Card<M, T>]) -> String
where
    M: ImageSource,
    T: Display,
{
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Bingo Cards</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    for card in cards {
        render_card_into(&mut out, card);
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Render a single card as a `<section>`.
#[must_use]
pub fn render_card<M, T>(card: &Card<M, T>) -> String
where
    M: ImageSource,
    T: Display,
{
    let mut out = String::new();
    render_card_into(&mut out, card);
    out
}

fn render_card_into<M, T>(out: &mut String, card: &Card<M, T>)
where
    M: ImageSource,
    T: Display,
{
    let color = escape(&card.theme().to_string());

    out.push_str("<section class=\"card\">\n<div class=\"grid\">\n");
    for letter in ['B', 'I', 'N', 'G', 'O'] {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "<div class=\"letter\" style=\"color: {color}\">{letter}</div>");
    }

    for (index, square) in card.squares().iter().enumerate() {
        match card.free_space() {
            Some(marker) if is_free_index(index) => {
                let _ = writeln!(
                    out,
                    "<div class=\"cell free\" style=\"border-color: {color}\">\
                     <img src=\"{}\" alt=\"Free Space\">\
                     <span class=\"overlay\">{FREE_LABEL}</span></div>",
                    escape(marker.src()),
                );
            }
            _ => {
                let _ = writeln!(
                    out,
                    "<div class=\"cell\" style=\"border-color: {color}\"><span>{}</span></div>",
                    escape(square),
                );
            }
        }
    }
    out.push_str("</div>\n</section>\n");
}

/// Escape text for HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
