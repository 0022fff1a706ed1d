//! PageDraft Render Library
//!
//! Renderer abstraction and the HTML preview renderer for PageDraft documents.

mod html;
mod renderer;

pub use html::{HtmlRenderer, escape_html};
pub use renderer::{RenderContext, RenderOptions, RenderResult, Renderer, RendererError};
