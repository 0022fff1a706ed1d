//! Toolbar buttons and the actions the editor shell dispatches.

use pagedraft_core::{ElementKind, ListKind, StyleProperty};

/// A toolbar button.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    pub label: &'static str,
    pub action: EditorAction,
}

impl ToolbarButton {
    pub const fn new(label: &'static str, action: EditorAction) -> Self {
        Self { label, action }
    }
}

/// Registry of the toolbar buttons.
pub struct Toolbar;

impl Toolbar {
    /// Sidebar buttons that add elements.
    ///
    /// Ordered lists are created by switching an unordered list.
    pub fn buttons() -> Vec<ToolbarButton> {
        vec![
            ToolbarButton::new("Add Text", EditorAction::AddElement(ElementKind::Text)),
            ToolbarButton::new("Add Image", EditorAction::AddElement(ElementKind::Image)),
            ToolbarButton::new("Add Table", EditorAction::AddElement(ElementKind::Table)),
            ToolbarButton::new(
                "Add Unordered List",
                EditorAction::AddElement(ElementKind::UnorderedList),
            ),
        ]
    }

    /// Top bar export buttons.
    pub fn export_buttons() -> Vec<ToolbarButton> {
        vec![
            ToolbarButton::new("Preview", EditorAction::Preview),
            ToolbarButton::new("See Source Code", EditorAction::ShowSource),
        ]
    }
}

/// Actions a presentation layer can ask the editor to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Add an element with defaults.
    AddElement(ElementKind),
    /// Render the preview and notify observers.
    Preview,
    /// Serialize the source dump and notify observers.
    ShowSource,
    /// Replace the selected text element's content.
    UpdateTextContent(String),
    /// Change one style property of the selected text element.
    UpdateTextStyle(StyleProperty, String),
    /// Replace the selected list's items from a newline-separated block.
    UpdateListItems(String),
    /// Switch the selected list's flavour.
    SetListKind(ListKind),
    /// Abort the active drag or resize.
    CancelGesture,
}
