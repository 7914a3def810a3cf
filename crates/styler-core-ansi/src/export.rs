//! Export boundary to the clipboard collaborator.
//!
//! The host owns the actual platform clipboard; this module owns the seam: serialize the
//! document, fence it, and hand the payload to an [`ExportSink`] exactly once. Transport
//! failure is the one user-visible error of the system; it is reported to the caller without
//! retry, and the document is left untouched either way.

use crate::serialize::{fenced, serialize_document};
use styler_core::Document;
use thiserror::Error;

/// Error returned when the export transport rejects the payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The platform clipboard (or other transport) rejected the write.
    #[error("export transport rejected the payload: {0}")]
    Transport(String),
}

/// Destination for an exported payload (typically the platform clipboard).
pub trait ExportSink {
    /// Deliver the final fenced payload. Called at most once per export.
    fn deliver(&mut self, payload: &str) -> Result<(), ExportError>;
}

/// Any `String` can collect the payload directly, mainly for tests and non-clipboard hosts.
impl ExportSink for String {
    fn deliver(&mut self, payload: &str) -> Result<(), ExportError> {
        self.clear();
        self.push_str(payload);
        Ok(())
    }
}

/// Serialize `document`, wrap it in the ```` ```ansi ```` fence, and deliver it to `sink`.
///
/// No retry is attempted on failure.
pub fn export_document<S>(document: &Document, sink: &mut S) -> Result<(), ExportError>
where
    S: ExportSink + ?Sized,
{
    let payload = fenced(&serialize_document(document));
    sink.deliver(&payload)
}
