//! PageDraft Application
//!
//! The editor shell: toolbar and property panel actions, pointer routing,
//! and preview/source export for native and WASM front ends.

mod config;
mod editor;
mod error;
mod toolbar;

pub use config::{AppConfig, ENV_MIN_WIDTH, ENV_RENDER_MODE};
pub use editor::{Editor, ExportEvent, ExportObserver};
pub use error::{AppError, AppResult};
pub use toolbar::{EditorAction, Toolbar, ToolbarButton};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebEditor;
