//! HTML preview renderer.

use crate::renderer::{RenderOptions, Renderer};
use pagedraft_core::elements::{Element, ElementContent, TextStyle};
use std::fmt::Write;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a document as a flat HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new() -> Self {
        Self
    }

    fn paragraph(out: &mut String, text: &str, style: &TextStyle) {
        out.push_str("<p style=\"");
        for (i, (name, value)) in style.css_declarations().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}:{};", name, escape_html(value));
        }
        let _ = write!(out, "\">{}</p>", escape_html(text));
    }

    fn table(out: &mut String, rows: &[Vec<String>]) {
        out.push_str("<table>");
        for row in rows {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", escape_html(cell));
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
    }

    fn list(out: &mut String, tag: &str, items: &[String]) {
        let _ = write!(out, "<{}>", tag);
        for item in items {
            let _ = write!(out, "<li>{}</li>", escape_html(item));
        }
        let _ = write!(out, "</{}>", tag);
    }

    fn image(out: &mut String, src: &str, element: &Element) {
        if src.is_empty() {
            return;
        }
        let _ = write!(
            out,
            "<img src=\"{}\" width=\"{}\" height=\"{}\">",
            escape_html(src),
            element.width,
            element.height
        );
    }
}

impl Renderer for HtmlRenderer {
    fn render_element(&self, element: &Element, options: &RenderOptions) -> String {
        let mut out = String::new();
        match &element.content {
            ElementContent::Text(text) => Self::paragraph(&mut out, text, &element.style),
            ElementContent::Table(rows) => Self::table(&mut out, rows),
            ElementContent::UnorderedList(items) => Self::list(&mut out, "ul", items),
            ElementContent::OrderedList(_) | ElementContent::Image(_) if options.legacy_kinds => {
                log::debug!("Skipping {} element {} in legacy mode", element.kind(), element.id());
            }
            ElementContent::OrderedList(items) => Self::list(&mut out, "ol", items),
            ElementContent::Image(src) => Self::image(&mut out, src, element),
        }
        out
    }
}
