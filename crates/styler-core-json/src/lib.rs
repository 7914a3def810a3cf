#![warn(missing_docs)]
//! `styler-core-json` - JSON payload bridging for `styler-core`.
//!
//! The editing surface is a host UI speaking JSON. This crate parses the small payload shapes
//! that cross that boundary into core types, and emits documents back out. It intentionally
//! avoids derive-based wire structs: payloads are bridged through `serde_json::Value` with
//! small parse helpers, and malformed *requests* are dropped rather than erroring (a style
//! request is a droppable user gesture), while malformed *documents* report a [`WireError`].
//!
//! # Payload shapes
//!
//! Style request:
//!
//! ```json
//! { "kind": "foreground", "value": "#dc322f", "range": { "start": 3, "end": 6 } }
//! ```
//!
//! Document (an array of nodes; children nest recursively):
//!
//! ```json
//! [
//!   { "text": "Hi " },
//!   { "kind": "bold", "value": "", "children": [ { "text": "there" } ] },
//!   { "break": true }
//! ]
//! ```

use serde_json::{Value, json};
use styler_core::{Document, Style, StyleKind, StyleNode, TextRange};
use thiserror::Error;

/// A parsed style request from the editor surface: the `(range, kind, value)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRequest {
    /// The style to apply (value already normalized per kind).
    pub style: Style,
    /// The selected character range.
    pub range: TextRange,
}

fn parse_range(value: &Value) -> Option<TextRange> {
    let start = value.get("start")?.as_u64()? as usize;
    let end = value.get("end")?.as_u64()? as usize;
    Some(TextRange::new(start, end))
}

/// Parse a style request payload. Returns `None` for any malformed or unrecognized payload.
pub fn parse_style_request(value: &Value) -> Option<StyleRequest> {
    let kind = StyleKind::from_name(value.get("kind")?.as_str()?)?;
    let range = parse_range(value.get("range")?)?;
    let color = value.get("value").and_then(Value::as_str).unwrap_or("");
    Some(StyleRequest {
        style: Style::new(kind, color),
        range,
    })
}

/// Errors from parsing a document payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The payload (or a `children` field) is not an array of nodes.
    #[error("document payload must be an array of nodes")]
    NotAnArray,
    /// A node object matches none of the known shapes.
    #[error("node at index {index} is not a recognized text, break, or styled node")]
    UnknownNode {
        /// Index of the node within its parent array.
        index: usize,
    },
    /// A styled node names a kind outside the closed set.
    #[error("node at index {index} has unknown style kind `{kind}`")]
    UnknownKind {
        /// Index of the node within its parent array.
        index: usize,
        /// The rejected kind name.
        kind: String,
    },
}

fn node_to_value(node: &StyleNode) -> Value {
    match node {
        StyleNode::Leaf(text) => json!({ "text": text }),
        StyleNode::Break => json!({ "break": true }),
        StyleNode::Styled { style, children } => json!({
            "kind": style.kind().as_str(),
            "value": style.value(),
            "children": children.iter().map(node_to_value).collect::<Vec<Value>>(),
        }),
    }
}

/// Emit a document as a JSON node array for the editor surface.
pub fn document_to_value(document: &Document) -> Value {
    Value::Array(document.nodes().iter().map(node_to_value).collect())
}

fn node_from_value(value: &Value, index: usize) -> Result<StyleNode, WireError> {
    if let Some(text) = value.get("text").and_then(Value::as_str) {
        return Ok(StyleNode::leaf(text));
    }
    if value.get("break").and_then(Value::as_bool) == Some(true) {
        return Ok(StyleNode::Break);
    }
    if let Some(kind_name) = value.get("kind").and_then(Value::as_str) {
        let kind = StyleKind::from_name(kind_name).ok_or_else(|| WireError::UnknownKind {
            index,
            kind: kind_name.to_string(),
        })?;
        let color = value.get("value").and_then(Value::as_str).unwrap_or("");
        let children = value
            .get("children")
            .map(nodes_from_value)
            .transpose()?
            .unwrap_or_default();
        return Ok(StyleNode::styled(Style::new(kind, color), children));
    }
    Err(WireError::UnknownNode { index })
}

fn nodes_from_value(value: &Value) -> Result<Vec<StyleNode>, WireError> {
    let items = value.as_array().ok_or(WireError::NotAnArray)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| node_from_value(item, index))
        .collect()
}

/// Parse a document payload. Unlike style requests, a malformed document is an error the
/// surface must hear about.
pub fn document_from_value(value: &Value) -> Result<Document, WireError> {
    Ok(Document::from_nodes(nodes_from_value(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_request() {
        let payload = json!({
            "kind": "foreground",
            "value": "#dc322f",
            "range": { "start": 3, "end": 6 },
        });
        assert_eq!(
            parse_style_request(&payload),
            Some(StyleRequest {
                style: Style::foreground("#dc322f"),
                range: TextRange::new(3, 6),
            })
        );
    }

    #[test]
    fn test_parse_style_request_without_value() {
        let payload = json!({ "kind": "bold", "range": { "start": 0, "end": 2 } });
        let request = parse_style_request(&payload).unwrap();
        assert_eq!(request.style, Style::bold());
    }

    #[test]
    fn test_malformed_requests_are_dropped() {
        for payload in [
            json!({}),
            json!({ "kind": "italic", "range": { "start": 0, "end": 1 } }),
            json!({ "kind": "bold" }),
            json!({ "kind": "bold", "range": { "start": 0 } }),
            json!(["bold", 0, 1]),
        ] {
            assert_eq!(parse_style_request(&payload), None, "payload: {payload}");
        }
    }

    #[test]
    fn test_document_round_trip() {
        let document = Document::from_nodes(vec![
            StyleNode::leaf("Hi "),
            StyleNode::styled(
                Style::background("#002b36"),
                vec![
                    StyleNode::styled(Style::bold(), vec![StyleNode::leaf("there")]),
                    StyleNode::Break,
                ],
            ),
        ]);
        let value = document_to_value(&document);
        assert_eq!(document_from_value(&value).unwrap(), document);
    }

    #[test]
    fn test_document_errors_are_reported() {
        assert_eq!(
            document_from_value(&json!({ "text": "not an array" })),
            Err(WireError::NotAnArray)
        );
        assert_eq!(
            document_from_value(&json!([{ "glyph": "x" }])),
            Err(WireError::UnknownNode { index: 0 })
        );
        assert_eq!(
            document_from_value(&json!([{ "kind": "blink", "children": [] }])),
            Err(WireError::UnknownKind {
                index: 0,
                kind: "blink".to_string(),
            })
        );
    }
}
