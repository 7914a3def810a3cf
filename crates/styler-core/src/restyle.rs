//! The restyle operation: strip prior styling, then wrap once.
//!
//! Restyling a selection is two explicit passes:
//!
//! 1. [`flatten`] recursively unwraps every style wrapper found anywhere within the selection
//!    (regardless of kind), splicing its children up one level. Leaves and breaks pass through
//!    in reading order.
//! 2. [`apply_style`] wraps the flattened sequence in exactly one new wrapper.
//!
//! Overlapping styles therefore compose only by nesting in the order operations are applied
//! over time: re-coloring part of a bold run removes the bold from that part. Layered styling
//! is produced by applying styles to the same range in sequence, each wrapping the previous
//! result.
//!
//! Both functions are pure value transforms; the caller (see
//! [`Document::apply_to_range`](crate::tree::Document::apply_to_range)) is responsible for
//! extracting the selection from the document and splicing the result back.

use crate::tree::{Style, StyleNode};

/// Recursively unwrap every style wrapper in `nodes`, splicing children in place.
///
/// The returned sequence contains only [`StyleNode::Leaf`] and [`StyleNode::Break`] nodes, in
/// the original reading order.
pub fn flatten(nodes: Vec<StyleNode>) -> Vec<StyleNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            StyleNode::Styled { children, .. } => out.extend(flatten(children)),
            leaf_or_break => out.push(leaf_or_break),
        }
    }
    out
}

/// Restyle a selection: flatten `target`, then wrap it in a single new `style` wrapper.
///
/// The returned node replaces the entire selected range. Text content and ordering within the
/// selection are preserved; exactly one level of styling remains, with no residual wrappers
/// beneath it. Total over any node sequence, including an empty one.
pub fn apply_style(target: Vec<StyleNode>, style: Style) -> StyleNode {
    StyleNode::styled(style, flatten(target))
}
