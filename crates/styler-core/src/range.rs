//! Character ranges and the range-extraction adapter.
//!
//! The editing surface reports selections as half-open character-offset ranges over the
//! document's plain text (a hard break counts as one character).
//! [`Document::apply_to_range`] is the adapter between such a range and the pure restyle
//! operation: it splits boundary nodes so the range maps onto a whole sub-tree, hands that
//! sub-tree to [`apply_style`](crate::restyle::apply_style), and splices the single restyled
//! wrapper back in place. Everything outside the range keeps its content, ordering, and
//! styling bit-exact.
//!
//! Range boundaries snap outward to grapheme-cluster boundaries, so a selection can never
//! split an emoji or combining sequence across a style wrapper.

use crate::restyle::apply_style;
use crate::text::{byte_for_char, snap_range_to_graphemes};
use crate::tree::{Document, Style, StyleNode};

/// A half-open character-offset range (`start..end`) over a document's plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    /// Range start offset (inclusive), in Unicode scalar values.
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values.
    pub end: usize,
}

impl TextRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range is collapsed (covers no characters).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Errors from range-based operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The range end precedes its start.
    Inverted {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },
    /// The range extends past the end of the document.
    OutOfBounds {
        /// Requested end offset.
        end: usize,
        /// Document character count.
        len: usize,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::Inverted { start, end } => {
                write!(f, "inverted range: start {start} is past end {end}")
            }
            RangeError::OutOfBounds { end, len } => {
                write!(f, "range end {end} is past document end {len}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Split a node sequence at a character offset into `(left, right)`.
///
/// A leaf spanning the offset is split into two leaves; a wrapper spanning it is split
/// structurally, each side keeping its own clone of the wrapper. Empty fragments are dropped.
fn split_nodes(nodes: Vec<StyleNode>, offset: usize) -> (Vec<StyleNode>, Vec<StyleNode>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut pos = 0usize;

    for node in nodes {
        let len = node.char_count();
        if pos + len <= offset {
            pos += len;
            left.push(node);
        } else if pos >= offset {
            pos += len;
            right.push(node);
        } else {
            let inner = offset - pos;
            pos += len;
            match node {
                StyleNode::Leaf(text) => {
                    let byte = byte_for_char(&text, inner);
                    let (head, tail) = text.split_at(byte);
                    if !head.is_empty() {
                        left.push(StyleNode::leaf(head));
                    }
                    if !tail.is_empty() {
                        right.push(StyleNode::leaf(tail));
                    }
                }
                // A break is one character, so an integral offset can only fall on its
                // boundary, never inside it.
                StyleNode::Break => right.push(StyleNode::Break),
                StyleNode::Styled { style, children } => {
                    let (head, tail) = split_nodes(children, inner);
                    if !head.is_empty() {
                        left.push(StyleNode::styled(style.clone(), head));
                    }
                    if !tail.is_empty() {
                        right.push(StyleNode::styled(style, tail));
                    }
                }
            }
        }
    }

    (left, right)
}

impl Document {
    /// Apply `style` to the characters in `range`, resolving overlaps with any styling already
    /// present there.
    ///
    /// The range is snapped outward to grapheme-cluster boundaries, the covered sub-tree is
    /// extracted (splitting boundary leaves and wrappers), restyled via
    /// [`apply_style`](crate::restyle::apply_style), and spliced back at the selection
    /// boundaries. Content outside the range is untouched.
    ///
    /// A collapsed range is a caller-enforced precondition and returns `Ok` without touching
    /// the document.
    pub fn apply_to_range(&mut self, range: TextRange, style: Style) -> Result<(), RangeError> {
        if range.start > range.end {
            return Err(RangeError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        let len = self.char_count();
        if range.end > len {
            return Err(RangeError::OutOfBounds {
                end: range.end,
                len,
            });
        }
        if range.is_empty() {
            return Ok(());
        }

        let text = self.plain_text();
        let (start, end) = snap_range_to_graphemes(&text, range.start, range.end);

        let (before, rest) = split_nodes(self.take_nodes(), start);
        let (selection, after) = split_nodes(rest, end - start);

        let mut nodes = before;
        nodes.push(apply_style(selection, style));
        nodes.extend(after);
        self.set_nodes(nodes);
        Ok(())
    }
}
