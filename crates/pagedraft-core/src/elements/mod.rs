//! Element definitions for the canvas.

mod id;
mod style;

pub use id::{ElementId, IdAllocator, MAX_ELEMENT_ID};
pub use style::{FONT_FAMILIES, FontStyle, StyleProperty, TextAlign, TextStyle};

use crate::error::{DocumentError, DocumentResult};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder content of a new text element.
pub const DEFAULT_TEXT: &str = "Edit me!";
/// Initial position of every new element.
pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);
/// Initial width of every new element.
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Initial height of non-table elements.
pub const DEFAULT_HEIGHT: f64 = 30.0;
/// Initial height of table elements.
pub const DEFAULT_TABLE_HEIGHT: f64 = 100.0;

/// Discriminant selecting an element's content shape and rendering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    Image,
    Table,
    UnorderedList,
    OrderedList,
}

impl ElementKind {
    /// Name used in the source dump.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Table => "table",
            ElementKind::UnorderedList => "unordered-list",
            ElementKind::OrderedList => "ordered-list",
        }
    }

    /// All element kinds.
    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Text,
            ElementKind::Image,
            ElementKind::Table,
            ElementKind::UnorderedList,
            ElementKind::OrderedList,
        ]
    }

    /// Whether this is one of the list kinds.
    pub fn is_list(&self) -> bool {
        matches!(self, ElementKind::UnorderedList | ElementKind::OrderedList)
    }

    /// Whether content of kind `other` has the same shape as content of this kind.
    pub fn is_compatible_with(&self, other: ElementKind) -> bool {
        *self == other || (self.is_list() && other.is_list())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownKind(s.to_string()))
    }
}

/// The two list flavours a list element can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl From<ListKind> for ElementKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => ElementKind::UnorderedList,
            ListKind::Ordered => ElementKind::OrderedList,
        }
    }
}

/// Element payload. The variant is the element's kind, so content always
/// has the shape its kind requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
pub enum ElementContent {
    /// A single string of text.
    Text(String),
    /// Image source reference.
    Image(String),
    /// Rows of cell strings; rows may have different lengths.
    Table(Vec<Vec<String>>),
    /// Bulleted items.
    UnorderedList(Vec<String>),
    /// Numbered items.
    OrderedList(Vec<String>),
}

impl ElementContent {
    /// Default content for a newly added element of the given kind.
    pub fn default_for(kind: ElementKind) -> Self {
        let items = || vec!["Item 1".to_string(), "Item 2".to_string(), "Item 3".to_string()];
        match kind {
            ElementKind::Text => ElementContent::Text(DEFAULT_TEXT.to_string()),
            ElementKind::Image => ElementContent::Image(String::new()),
            ElementKind::Table => ElementContent::Table(vec![Vec::new()]),
            ElementKind::UnorderedList => ElementContent::UnorderedList(items()),
            ElementKind::OrderedList => ElementContent::OrderedList(items()),
        }
    }

    /// Build list content of the given flavour.
    pub fn list(kind: ListKind, items: Vec<String>) -> Self {
        match kind {
            ListKind::Unordered => ElementContent::UnorderedList(items),
            ListKind::Ordered => ElementContent::OrderedList(items),
        }
    }

    /// The kind this content belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Table(_) => ElementKind::Table,
            ElementContent::UnorderedList(_) => ElementKind::UnorderedList,
            ElementContent::OrderedList(_) => ElementKind::OrderedList,
        }
    }

    /// Text content, if this is a text element.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ElementContent::Text(s) => Some(s),
            _ => None,
        }
    }

    /// List items, if this is a list of either flavour.
    pub fn list_items(&self) -> Option<&[String]> {
        match self {
            ElementContent::UnorderedList(items) | ElementContent::OrderedList(items) => {
                Some(items)
            }
            _ => None,
        }
    }

    /// Table rows, if this is a table.
    pub fn table_rows(&self) -> Option<&[Vec<String>]> {
        match self {
            ElementContent::Table(rows) => Some(rows),
            _ => None,
        }
    }

    /// Re-tag list content as another list flavour, keeping the items.
    /// Returns `None` for non-list content.
    pub fn into_list(self, kind: ListKind) -> Option<Self> {
        match self {
            ElementContent::UnorderedList(items) | ElementContent::OrderedList(items) => {
                Some(Self::list(kind, items))
            }
            _ => None,
        }
    }
}

/// Split a newline-delimited block into list items, dropping empty lines.
pub fn parse_list_items(block: &str) -> Vec<String> {
    block
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One placed object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    /// Kind tag and payload.
    #[serde(flatten)]
    pub content: ElementContent,
    /// Left edge in canvas-local pixels.
    pub x: f64,
    /// Top edge in canvas-local pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Text presentation attributes.
    pub style: TextStyle,
}

impl Element {
    /// Create an element with the defaults for `kind`.
    pub(crate) fn new(id: ElementId, kind: ElementKind) -> Self {
        let height = match kind {
            ElementKind::Table => DEFAULT_TABLE_HEIGHT,
            _ => DEFAULT_HEIGHT,
        };
        Self {
            id,
            content: ElementContent::default_for(kind),
            x: DEFAULT_POSITION.x,
            y: DEFAULT_POSITION.y,
            width: DEFAULT_WIDTH,
            height,
            style: TextStyle::default(),
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the element kind.
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Check if a canvas point lies inside this element.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Merge a patch into this element.
    ///
    /// Nothing is applied if the patch carries content of an incompatible kind.
    pub fn apply(&mut self, patch: ElementPatch) -> DocumentResult<()> {
        if let Some(content) = &patch.content {
            let expected = self.kind();
            let found = content.kind();
            if !expected.is_compatible_with(found) {
                return Err(DocumentError::KindMismatch { expected, found });
            }
        }

        let ElementPatch {
            x,
            y,
            width,
            height,
            content,
            style,
        } = patch;
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(style) = style {
            self.style = style;
        }
        Ok(())
    }
}

/// A partial set of element fields to merge with [`Element::apply`].
///
/// `style` replaces the whole style; callers changing one style field read the
/// current style first (see [`TextStyle::with_property`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<ElementContent>,
    pub style: Option<TextStyle>,
}

impl ElementPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both coordinates of the top-left corner.
    pub fn position(mut self, position: Point) -> Self {
        self.x = Some(position.x);
        self.y = Some(position.y);
        self
    }

    /// Set the left edge.
    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Replace the content.
    pub fn content(mut self, content: ElementContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: ElementKind) -> Element {
        Element::new(ElementId::from_raw(1), kind)
    }

    #[test]
    fn test_text_defaults() {
        let el = element(ElementKind::Text);
        assert_eq!(el.content, ElementContent::Text("Edit me!".to_string()));
        assert_eq!(el.position(), Point::new(50.0, 50.0));
        assert_eq!(el.size(), Size::new(200.0, 30.0));
        assert_eq!(el.style, TextStyle::default());
    }

    #[test]
    fn test_table_defaults() {
        let el = element(ElementKind::Table);
        assert_eq!(el.content, ElementContent::Table(vec![vec![]]));
        assert_eq!(el.size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn test_image_defaults() {
        let el = element(ElementKind::Image);
        assert_eq!(el.content, ElementContent::Image(String::new()));
        assert_eq!(el.size(), Size::new(200.0, 30.0));
    }

    #[test]
    fn test_list_defaults() {
        for kind in [ElementKind::UnorderedList, ElementKind::OrderedList] {
            let el = element(kind);
            assert_eq!(el.kind(), kind);
            assert_eq!(
                el.content.list_items().unwrap(),
                &["Item 1".to_string(), "Item 2".to_string(), "Item 3".to_string()]
            );
        }
    }

    #[test]
    fn test_apply_rejects_kind_mismatch() {
        let mut el = element(ElementKind::Text);
        let patch = ElementPatch::new()
            .x(10.0)
            .content(ElementContent::Table(vec![]));
        let err = el.apply(patch).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::KindMismatch {
                expected: ElementKind::Text,
                found: ElementKind::Table
            }
        ));
        // Nothing applied
        assert_eq!(el.x, 50.0);
    }

    #[test]
    fn test_apply_allows_list_flavour_switch() {
        let mut el = element(ElementKind::UnorderedList);
        let items = el.content.clone().into_list(ListKind::Ordered).unwrap();
        el.apply(ElementPatch::new().content(items)).unwrap();
        assert_eq!(el.kind(), ElementKind::OrderedList);
        assert_eq!(el.content.list_items().unwrap().len(), 3);
    }

    #[test]
    fn test_style_replaced_wholesale() {
        let mut el = element(ElementKind::Text);
        let style = TextStyle {
            color: "#fff".to_string(),
            ..TextStyle::default()
        };
        el.apply(ElementPatch::new().style(style.clone())).unwrap();
        assert_eq!(el.style, style);
    }

    #[test]
    fn test_parse_list_items_drops_empty_lines() {
        assert_eq!(
            parse_list_items("one\n\ntwo\n"),
            vec!["one".to_string(), "two".to_string()]
        );
        assert!(parse_list_items("").is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ElementKind::UnorderedList.to_string(), "unordered-list");
        assert_eq!("ordered-list".parse::<ElementKind>().unwrap(), ElementKind::OrderedList);
        assert!("video".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let el = element(ElementKind::Text);
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["kind"], "text");
        assert_eq!(json["content"], "Edit me!");
        assert_eq!(json["width"], 200.0);
        assert_eq!(json["style"]["fontFamily"], "Arial");
    }

    #[test]
    fn test_hit_test() {
        let el = element(ElementKind::Text);
        assert!(el.hit_test(Point::new(60.0, 60.0)));
        assert!(!el.hit_test(Point::new(10.0, 10.0)));
    }
}
