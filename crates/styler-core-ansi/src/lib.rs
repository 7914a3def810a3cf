#![warn(missing_docs)]
//! `styler-core-ansi` - ANSI SGR serialization for `styler-core` documents.
//!
//! This crate turns a style tree into a single string of nested terminal escape sequences
//! (ANSI SGR), wrapped in a ```` ```ansi ```` fenced block that chat clients render with
//! colors. Serialization is a pure, total read of the document: it never fails and never
//! mutates.
//!
//! The color mapping is the fixed 8-swatch table of the chat client (see [`sgr`]); color
//! values outside the table silently degrade to a documented default code rather than
//! erroring.
//!
//! ```rust
//! use styler_core::{Style, StylerSession, TextRange};
//! use styler_core_ansi::serialize_document;
//!
//! let mut session = StylerSession::with_text("Hi there");
//! session.apply(TextRange::new(3, 8), Style::bold()).unwrap();
//!
//! assert_eq!(
//!     serialize_document(session.document()),
//!     "Hi \u{1b}[1mthere\u{1b}[0m"
//! );
//! ```

pub mod export;
pub mod serialize;
pub mod sgr;

pub use export::{ExportError, ExportSink, export_document};
pub use serialize::{fenced, serialize, serialize_document};
pub use sgr::{
    BACKGROUND_SWATCHES, BOLD, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, FOREGROUND_SWATCHES,
    UNDERLINE, background_code, foreground_code, style_code,
};
