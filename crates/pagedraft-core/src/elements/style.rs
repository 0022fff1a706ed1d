//! Text presentation attributes attached to every element.

use crate::error::{DocumentError, DocumentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// CSS keyword for this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    /// All alignments, in panel order.
    pub fn all() -> &'static [TextAlign] {
        &[TextAlign::Left, TextAlign::Center, TextAlign::Right]
    }
}

impl FromStr for TextAlign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(()),
        }
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// CSS keyword for this font style.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }

    /// All font styles, in panel order.
    pub fn all() -> &'static [FontStyle] {
        &[FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique]
    }
}

impl FromStr for FontStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique),
            _ => Err(()),
        }
    }
}

/// Font families offered by the property panel.
pub const FONT_FAMILIES: &[&str] = &["Arial", "Georgia", "Times New Roman", "Verdana"];

/// One field of [`TextStyle`], addressable by name from the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    FontSize,
    Color,
    TextAlign,
    FontFamily,
    FontStyle,
    LineHeight,
    MarginBottom,
}

impl StyleProperty {
    /// All properties in declaration order.
    pub fn all() -> &'static [StyleProperty] {
        &[
            StyleProperty::FontSize,
            StyleProperty::Color,
            StyleProperty::TextAlign,
            StyleProperty::FontFamily,
            StyleProperty::FontStyle,
            StyleProperty::LineHeight,
            StyleProperty::MarginBottom,
        ]
    }

    /// Field name as it appears in the source dump.
    pub fn field_name(&self) -> &'static str {
        match self {
            StyleProperty::FontSize => "fontSize",
            StyleProperty::Color => "color",
            StyleProperty::TextAlign => "textAlign",
            StyleProperty::FontFamily => "fontFamily",
            StyleProperty::FontStyle => "fontStyle",
            StyleProperty::LineHeight => "lineHeight",
            StyleProperty::MarginBottom => "marginBottom",
        }
    }

    /// CSS property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::FontSize => "font-size",
            StyleProperty::Color => "color",
            StyleProperty::TextAlign => "text-align",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontStyle => "font-style",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::MarginBottom => "margin-bottom",
        }
    }

    /// Whether a bare number entered for this property is a pixel length.
    fn is_pixel_length(&self) -> bool {
        matches!(self, StyleProperty::FontSize | StyleProperty::MarginBottom)
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for StyleProperty {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::all()
            .iter()
            .copied()
            .find(|p| p.field_name() == s || p.css_name() == s)
            .ok_or_else(|| DocumentError::UnknownStyleProperty(s.to_string()))
    }
}

/// Text presentation attributes.
///
/// Present on every element but only meaningful for text. Replaced as a whole
/// by document updates; use [`TextStyle::with_property`] to change one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: String,
    pub color: String,
    pub text_align: TextAlign,
    pub font_family: String,
    pub font_style: FontStyle,
    pub line_height: String,
    pub margin_bottom: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: "16px".to_string(),
            color: "#000".to_string(),
            text_align: TextAlign::Left,
            font_family: "Arial".to_string(),
            font_style: FontStyle::Normal,
            line_height: "1.5".to_string(),
            margin_bottom: "0".to_string(),
        }
    }
}

impl TextStyle {
    /// Current value of a property as a string.
    pub fn get(&self, property: StyleProperty) -> &str {
        match property {
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::Color => &self.color,
            StyleProperty::TextAlign => self.text_align.as_str(),
            StyleProperty::FontFamily => &self.font_family,
            StyleProperty::FontStyle => self.font_style.as_str(),
            StyleProperty::LineHeight => &self.line_height,
            StyleProperty::MarginBottom => &self.margin_bottom,
        }
    }

    /// Copy of this style with exactly one property replaced.
    ///
    /// Bare numbers for `fontSize` and `marginBottom` get a `px` unit, the way
    /// the panel's number inputs are formatted.
    pub fn with_property(&self, property: StyleProperty, value: &str) -> DocumentResult<Self> {
        let invalid = || DocumentError::InvalidStyleValue {
            property: property.to_string(),
            value: value.to_string(),
        };

        let mut style = self.clone();
        let field = match property {
            StyleProperty::TextAlign => {
                style.text_align = value.parse().map_err(|_| invalid())?;
                return Ok(style);
            }
            StyleProperty::FontStyle => {
                style.font_style = value.parse().map_err(|_| invalid())?;
                return Ok(style);
            }
            StyleProperty::FontSize => &mut style.font_size,
            StyleProperty::Color => &mut style.color,
            StyleProperty::FontFamily => &mut style.font_family,
            StyleProperty::LineHeight => &mut style.line_height,
            StyleProperty::MarginBottom => &mut style.margin_bottom,
        };
        *field = if property.is_pixel_length() && value.parse::<f64>().is_ok() {
            format!("{}px", value)
        } else {
            value.to_string()
        };
        Ok(style)
    }

    /// CSS declarations in rendering order.
    pub fn css_declarations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        StyleProperty::all()
            .iter()
            .map(move |&p| (p.css_name(), self.get(p)))
    }
}
