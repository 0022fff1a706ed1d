//! Error types for document operations.

use crate::elements::{ElementId, ElementKind};
use thiserror::Error;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while mutating or (de)serializing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Source dump could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Two elements in a source dump share an identifier.
    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    /// An identifier is above the representable range.
    #[error("Element id {0} is out of range")]
    IdOutOfRange(ElementId),

    /// New content does not have the shape required by the element's kind.
    #[error("Content of kind {found} cannot replace content of kind {expected}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    /// A style value is not valid for the given property.
    #[error("Invalid value {value:?} for style property {property}")]
    InvalidStyleValue { property: String, value: String },

    /// Unknown style property name.
    #[error("Unknown style property: {0}")]
    UnknownStyleProperty(String),

    /// Unknown element kind name.
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),
}
