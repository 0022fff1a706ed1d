//! Source dump: the document as a pretty-printed JSON array of elements.

use crate::canvas::CanvasDocument;
use crate::elements::Element;
use crate::error::DocumentResult;

/// Serialize every element, in order, with all stored fields.
pub fn to_source_dump(document: &CanvasDocument) -> DocumentResult<String> {
    let elements: Vec<&Element> = document.elements().collect();
    Ok(serde_json::to_string_pretty(&elements)?)
}

/// Rebuild a document from a source dump, preserving element order.
///
/// Fails on malformed input, repeated identifiers, or identifiers above
/// [`MAX_ELEMENT_ID`](crate::elements::MAX_ELEMENT_ID).
pub fn from_source_dump(json: &str) -> DocumentResult<CanvasDocument> {
    let elements: Vec<Element> = serde_json::from_str(json)?;
    let mut document = CanvasDocument::new();
    for element in elements {
        document.insert(element)?;
    }
    log::debug!("Loaded {} elements from source dump", document.len());
    Ok(document)
}
