//! Style tree → ANSI string serialization.
//!
//! Every style wrapper produces its own fully self-contained escape pair:
//! `ESC[<code>m` + serialized children + `ESC[0m`. Codes of nested wrappers are never
//! combined into one escape, so nesting produces nested pairs, each independently valid for
//! the chat client's escape-sequence parser. Leaves emit their text literally; hard breaks
//! emit `'\n'`.

use crate::sgr::style_code;
use std::fmt::Write;
use styler_core::{Document, StyleNode};

/// Serialize a single node (and its sub-tree) to an ANSI string.
pub fn serialize(node: &StyleNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize a whole document: each top-level node serialized in order and concatenated, as
/// if under a style-less root.
pub fn serialize_document(document: &Document) -> String {
    let mut out = String::new();
    for node in document.nodes() {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &StyleNode, out: &mut String) {
    match node {
        StyleNode::Leaf(text) => out.push_str(text),
        StyleNode::Break => out.push('\n'),
        StyleNode::Styled { style, children } => {
            // Infallible for String destinations.
            let _ = write!(out, "\u{1b}[{}m", style_code(style));
            for child in children {
                write_node(child, out);
            }
            out.push_str("\u{1b}[0m");
        }
    }
}

/// Wrap a serialized payload in the ```` ```ansi ```` fenced block the chat client renders.
pub fn fenced(payload: &str) -> String {
    format!("```ansi\n{payload}\n```")
}
