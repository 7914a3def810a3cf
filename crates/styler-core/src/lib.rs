#![warn(missing_docs)]
//! Styler Core - Headless Styled-Text Engine
//!
//! # Overview
//!
//! `styler-core` models a block of chat text as a tree of plain-text leaves wrapped by style
//! nodes (bold, underline, foreground color, background color) and owns the range-resolution
//! algorithm that restyles an arbitrary sub-range of already-styled text. It does not render
//! anything itself: the host provides the editing surface and consumes either the render
//! preview (styled runs) or a serialized form (see `styler-core-ansi`).
//!
//! # Core Features
//!
//! - **Style Tree**: Explicit, owned tree of text leaves, hard line breaks, and style wrappers
//! - **Range Restyling**: Apply a style to any character range; prior styling within the range
//!   is stripped before the single new wrapper is added, so restyling never double-wraps
//! - **Grapheme Safety**: Range boundaries snap outward to grapheme-cluster boundaries, so a
//!   selection never splits an emoji or combining sequence
//! - **Editing Session**: Version tracking and change notifications around a single document
//! - **Render Preview**: Flattened styled runs with terminal-cell widths for host renderers
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editing Session (state + notifications)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Preview (styled runs for host renderers)   │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Range Adapter (extract / restyle / splice) │  ← Selection Handling
//! ├─────────────────────────────────────────────┤
//! │  Restyle (flatten, then wrap)               │  ← Overlap Resolution
//! ├─────────────────────────────────────────────┤
//! │  Style Tree (leaves, breaks, wrappers)      │  ← Document Model
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use styler_core::{Style, StylerSession, TextRange};
//!
//! let mut session = StylerSession::with_text("make me pretty");
//!
//! // Bold the word "me" (characters 5..7).
//! session.apply(TextRange::new(5, 7), Style::bold()).unwrap();
//!
//! // Recolor the same word; the bold wrapper is stripped first, so the
//! // range ends up colored but no longer bold.
//! session
//!     .apply(TextRange::new(5, 7), Style::foreground("#dc322f"))
//!     .unwrap();
//!
//! assert_eq!(session.document().plain_text(), "make me pretty");
//! assert_eq!(session.version(), 2);
//! ```
//!
//! # Module Description
//!
//! - [`tree`] - Style tree data model ([`Document`], [`StyleNode`], [`Style`])
//! - [`restyle`] - The two-pass flatten-then-wrap restyle operation
//! - [`range`] - Character ranges and the extract/splice range adapter
//! - [`session`] - Editing session with versioning and change notifications
//! - [`preview`] - Headless render snapshot (styled runs per line)
//!
//! # Unicode Support
//!
//! - Character offsets are Unicode scalar values (`char`), a hard line break counts as one
//! - Range boundaries never split grapheme clusters (CJK, emoji, ZWJ sequences)
//! - Preview run widths account for double-width characters via `unicode-width`

pub mod preview;
pub mod range;
pub mod restyle;
pub mod session;
mod text;
pub mod tree;

pub use preview::{PreviewLine, StyledRun, preview};
pub use range::{RangeError, TextRange};
pub use restyle::{apply_style, flatten};
pub use session::{
    DocumentState, StateChange, StateChangeCallback, StateChangeType, StylerSession,
};
pub use tree::{Document, PLACEHOLDER_TEXT, Style, StyleKind, StyleNode};
