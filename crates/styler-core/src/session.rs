//! Editing session: state, versioning, and change notifications.
//!
//! # Overview
//!
//! A [`StylerSession`] owns the single [`Document`] of an editing session and is the intended
//! entry point for hosts. It wraps the range adapter with the session-level policies the
//! document model itself does not carry:
//!
//! - **Lifecycle**: a session starts in the placeholder state and returns to it only via
//!   [`reset`](StylerSession::reset); any styling or text replacement marks it edited
//! - **Precondition handling**: a collapsed selection is a silent no-op, not an error
//! - **Version Tracking**: every successful mutation increments the version exactly once
//! - **Change Notifications**: subscribers are notified once per successful mutation
//!
//! Sessions are single-threaded and synchronous: each host action runs to completion before
//! the next is processed, so no locking is involved.
//!
//! # Example
//!
//! ```rust
//! use styler_core::{Style, StylerSession, TextRange};
//!
//! let mut session = StylerSession::with_text("Hello there");
//!
//! session.subscribe(|change| {
//!     println!("changed: {:?}", change.change_type);
//! });
//!
//! session.apply(TextRange::new(6, 11), Style::bold()).unwrap();
//! assert_eq!(session.document_state().char_count, 11);
//! ```

use crate::range::{RangeError, TextRange};
use crate::tree::{Document, Style};

/// State change type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// The document text was replaced by the host.
    DocumentModified,
    /// A style was applied to a range.
    StyleChanged,
    /// The document was reset to the placeholder state.
    DocumentReset,
}

/// A single state change notification.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// What changed.
    pub change_type: StateChangeType,
    /// Session version after the change.
    pub version: u64,
}

/// State change callback function type.
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Document state snapshot.
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Total character count (breaks count as one).
    pub char_count: usize,
    /// Total node count across the style tree, wrappers included.
    pub node_count: usize,
    /// Whether the session is still in the placeholder state.
    pub is_placeholder: bool,
    /// Session version (incremented after each successful mutation).
    pub version: u64,
}

/// Owns a [`Document`] for the duration of an editing session.
///
/// The session is the only writer of its document; readers (preview, serialization) borrow it
/// via [`document`](StylerSession::document). The document has exactly two lifecycle states:
/// placeholder (initial / post-reset) and edited, with reset the only transition back.
pub struct StylerSession {
    document: Document,
    version: u64,
    edited: bool,
    callbacks: Vec<StateChangeCallback>,
}

impl StylerSession {
    /// Create a session in the placeholder state.
    pub fn new() -> Self {
        Self {
            document: Document::placeholder(),
            version: 0,
            edited: false,
            callbacks: Vec::new(),
        }
    }

    /// Create a session whose document holds `text`, already marked edited.
    pub fn with_text(text: &str) -> Self {
        Self {
            document: Document::from_text(text),
            version: 0,
            edited: true,
            callbacks: Vec::new(),
        }
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Session version; incremented once per successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the session has been edited since creation or the last reset.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Apply `style` to `range`.
    ///
    /// A collapsed range is treated as "no active selection": the call returns `Ok` without
    /// mutating the document, bumping the version, or notifying subscribers. Range errors
    /// leave the session untouched.
    pub fn apply(&mut self, range: TextRange, style: Style) -> Result<(), RangeError> {
        if range.is_empty() {
            return Ok(());
        }
        self.document.apply_to_range(range, style)?;
        self.edited = true;
        self.notify(StateChangeType::StyleChanged);
        Ok(())
    }

    /// Replace the document with unstyled `text` (the host pushing its buffer in).
    pub fn set_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.edited = true;
        self.notify(StateChangeType::DocumentModified);
    }

    /// Discard all content and styling and restore the placeholder document.
    ///
    /// Total over any document, however deeply styled.
    pub fn reset(&mut self) {
        self.document = Document::placeholder();
        self.edited = false;
        self.notify(StateChangeType::DocumentReset);
    }

    /// Get the current document state snapshot.
    pub fn document_state(&self) -> DocumentState {
        DocumentState {
            char_count: self.document.char_count(),
            node_count: self.document.node_count(),
            is_placeholder: !self.edited,
            version: self.version,
        }
    }

    /// Subscribe to state changes. Every successful mutation notifies all subscribers once.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn notify(&mut self, change_type: StateChangeType) {
        self.version += 1;
        let change = StateChange {
            change_type,
            version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl Default for StylerSession {
    fn default() -> Self {
        Self::new()
    }
}
