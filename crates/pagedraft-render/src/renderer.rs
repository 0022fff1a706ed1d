//! Renderer trait abstraction.

use pagedraft_core::canvas::CanvasDocument;
use pagedraft_core::elements::Element;
use std::str::FromStr;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Unknown render mode: {0}")]
    UnknownMode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Output options shared by all renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render image and ordered-list elements as empty output, as the earliest
    /// preview format did. Content is still HTML-escaped.
    pub legacy_kinds: bool,
}

impl RenderOptions {
    /// Options with every element kind rendered.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Options reproducing the legacy preview format.
    pub fn legacy() -> Self {
        Self { legacy_kinds: true }
    }
}

impl FromStr for RenderOptions {
    type Err = RendererError;

    /// Parse a render mode name: `standard` or `legacy`.
    fn from_str(s: &str) -> RenderResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "legacy" => Ok(Self::legacy()),
            _ => Err(RendererError::UnknownMode(s.to_string())),
        }
    }
}

/// Context for a single render pass.
pub struct RenderContext<'a> {
    /// The document to render.
    pub document: &'a CanvasDocument,
    /// Output options.
    pub options: RenderOptions,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with standard options.
    pub fn new(document: &'a CanvasDocument) -> Self {
        Self {
            document,
            options: RenderOptions::default(),
        }
    }

    /// Set the output options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

/// Trait for output backends.
///
/// Rendering is a pure function of the document; implementations never mutate it.
pub trait Renderer: Send + Sync {
    /// Render one element.
    fn render_element(&self, element: &Element, options: &RenderOptions) -> String;

    /// Render the whole document: every element in collection order, concatenated.
    fn render(&self, ctx: &RenderContext) -> String {
        ctx.document
            .elements()
            .map(|element| self.render_element(element, &ctx.options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_str() {
        assert_eq!("legacy".parse::<RenderOptions>().unwrap(), RenderOptions::legacy());
        assert_eq!(" Standard ".parse::<RenderOptions>().unwrap(), RenderOptions::standard());
        assert!(matches!(
            "fancy".parse::<RenderOptions>(),
            Err(RendererError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_context_defaults_to_standard() {
        let doc = CanvasDocument::new();
        let ctx = RenderContext::new(&doc);
        assert!(!ctx.options.legacy_kinds);
        let ctx = ctx.with_options(RenderOptions::legacy());
        assert!(ctx.options.legacy_kinds);
    }
}
