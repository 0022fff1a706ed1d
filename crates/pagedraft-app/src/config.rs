//! Editor configuration.

use crate::error::{AppError, AppResult};
use pagedraft_core::InteractionConfig;
use pagedraft_render::RenderOptions;

/// Environment variable overriding the minimum resize width.
pub const ENV_MIN_WIDTH: &str = "PAGEDRAFT_MIN_WIDTH";
/// Environment variable selecting the render mode (`standard` or `legacy`).
pub const ENV_RENDER_MODE: &str = "PAGEDRAFT_RENDER_MODE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub interaction: InteractionConfig,
    pub render: RenderOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Drag and Drop Editor".to_string(),
            canvas_width: 800,
            canvas_height: 600,
            interaction: InteractionConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

impl AppConfig {
    /// Set the window or page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the canvas size in pixels.
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the smallest width a resize can produce.
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.interaction.min_width = min_width;
        self
    }

    /// Set the preview render options.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Defaults with overrides from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup, such as the environment.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(value) = lookup(ENV_MIN_WIDTH) {
            let min_width = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or_else(|| AppError::InvalidConfig {
                    key: ENV_MIN_WIDTH.to_string(),
                    value: value.clone(),
                })?;
            self.interaction.min_width = min_width;
        }
        if let Some(value) = lookup(ENV_RENDER_MODE) {
            self.render = value.parse()?;
        }
        log::debug!("Using config {:?}", self);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.interaction.min_width, 1.0);
        assert!(!config.render.legacy_kinds);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[(ENV_MIN_WIDTH, "12.5"), (ENV_RENDER_MODE, "legacy")]))
            .unwrap();
        assert_eq!(config.interaction.min_width, 12.5);
        assert!(config.render.legacy_kinds);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = AppConfig::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(matches!(
            AppConfig::default().with_overrides(lookup(&[(ENV_MIN_WIDTH, "-3")])),
            Err(AppError::InvalidConfig { .. })
        ));
        assert!(matches!(
            AppConfig::default().with_overrides(lookup(&[(ENV_RENDER_MODE, "fancy")])),
            Err(AppError::Render(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_title("Draft")
            .with_canvas_size(1024, 768)
            .with_min_width(5.0)
            .with_render_options(RenderOptions::legacy());
        assert_eq!(config.title, "Draft");
        assert_eq!((config.canvas_width, config.canvas_height), (1024, 768));
        assert_eq!(config.interaction.min_width, 5.0);
        assert!(config.render.legacy_kinds);
    }
}
