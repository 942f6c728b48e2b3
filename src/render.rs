//! Output documents for a deck of cards.
//!
//! The HTML page carries its own print stylesheet; two default sized cards
//! fit on one A4 page.

use std::fmt::Write;

use crate::card::{Cell, Grid};
use crate::BingoError;

/// Text shown in the bonus cell.
pub const BONUS_LABEL: &str = "Bingo!";
/// Text shown in a cell without a word.
pub const EMPTY_LABEL: &str = "-";

const STYLE: &str = "\
    <style>
      @media print {
        html,
        body {
          margin: 0;
        }
      }

      h1 {
        font-size: 6mm;
      }

      table {
        border-color: #666666;
        border-spacing: 0;
        border-style: solid;
        border-width: 0 0.25mm 0.25mm 0;
        margin-bottom: 1cm;
      }
      td {
        border-color: #666666;
        border-style: solid;
        border-width: 0.25mm 0 0 0.25mm;
        font-size: 4mm;
        height: 2cm;
        text-align: center;
        width: 3cm;
      }
      td strong {
        font-size: 120%;
        text-transform: uppercase;
      }
    </style>
";

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn cell_markup(cell: &Cell) -> String {
    match cell {
        Cell::Normal(word) => escape_html(word),
        Cell::Bonus => format!("<strong>{BONUS_LABEL}</strong>"),
        Cell::Empty => EMPTY_LABEL.to_string(),
    }
}

/// Render all cards into one self-contained HTML document.
///
/// Output depends only on `grids` and `title`.
pub fn render_html(grids: &[Grid], title: &str) -> Result<String, BingoError> {
    let title = escape_html(title);
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "  <head>")?;
    writeln!(out, "    <meta charset=\"utf-8\"/>")?;
    out.push_str(STYLE);
    writeln!(out, "    <title>{title}</title>")?;
    writeln!(out, "  </head>")?;
    write!(out, "  <body>")?;

    for grid in grids {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "    <h1>{title}</h1>")?;
        write!(out, "    <table cellspacing=\"0\">")?;
        for row in grid.rows() {
            write!(out, "\n      <tr>")?;
            for cell in row {
                write!(out, "\n        <td>{}</td>", cell_markup(cell))?;
            }
            write!(out, "\n      </tr>")?;
        }
        write!(out, "\n    </table>")?;
    }

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "  </body>")?;
    write!(out, "</html>")?;
    Ok(out)
}

/// Render all cards as a pretty printed JSON array of grids.
pub fn render_json(grids: &[Grid]) -> Result<String, BingoError> {
    Ok(serde_json::to_string_pretty(grids)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'ok'"#),
            "&lt;b&gt;&#34;R&amp;D&#34;&lt;/b&gt; &#39;ok&#39;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_html("Paradigmenwechsel ü"), "Paradigmenwechsel ü");
    }

    #[test]
    fn cell_labels() {
        assert_eq!(cell_markup(&Cell::Empty), "-");
        assert_eq!(cell_markup(&Cell::Bonus), "<strong>Bingo!</strong>");
        assert_eq!(cell_markup(&Cell::Normal("a<b".into())), "a&lt;b");
    }

    #[test]
    fn no_cards_still_a_document() {
        let html = render_html(&[], "Bingo").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(!html.contains("<table"));
    }
}
