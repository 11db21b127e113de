use tracing::{debug, warn};

use crate::tag::{NdefTagProtocol, TagTechnology, TransportError};

/// Outcome of one write transaction, terminal and never retried
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, uniffi::Enum)]
pub enum WriteDisposition {
    #[display("wrote NDEF message to tag")]
    Written,

    #[display("tag is read only")]
    ReadOnly,

    #[display("message needs {required} bytes, tag holds {available}")]
    InsufficientCapacity { required: u32, available: u32 },

    #[display("tag does not support NDEF")]
    Unsupported,

    #[display("transport failed: {error}")]
    TransportFailed { error: TransportError },
}

/// Writes one encoded NDEF message per tag presentation
#[derive(Debug, Clone)]
pub struct NfcWriter;

impl Default for NfcWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl NfcWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `message` to the presented tag, dispatching on the technology
    /// set reported for this presentation. First match wins: a tag exposing
    /// both technologies takes the direct write path. A tag exposing neither
    /// is unsupported and no connection is opened.
    pub fn write(
        &self,
        tag: &dyn NdefTagProtocol,
        technologies: &[TagTechnology],
        message: &[u8],
    ) -> WriteDisposition {
        debug!(?technologies, bytes = message.len(), "starting tag write transaction");

        let disposition = if technologies.contains(&TagTechnology::NdefReadWrite) {
            self.write_ndef(tag, message)
        } else if technologies.contains(&TagTechnology::NdefFormatable) {
            self.format_ndef(tag, message)
        } else {
            WriteDisposition::Unsupported
        };

        debug!(%disposition, "tag write transaction finished");

        disposition
    }

    fn write_ndef(&self, tag: &dyn NdefTagProtocol, message: &[u8]) -> WriteDisposition {
        let session = TagSession::new(tag);

        match Self::write_connected(&session, message) {
            Ok(disposition) => disposition,
            Err(error) => WriteDisposition::TransportFailed { error },
        }
    }

    fn write_connected(
        session: &TagSession<'_>,
        message: &[u8],
    ) -> Result<WriteDisposition, TransportError> {
        session.tag.connect()?;

        if !session.tag.is_writable() {
            return Ok(WriteDisposition::ReadOnly);
        }

        let required = message.len() as u32;
        let available = session.tag.max_message_size();
        if available < required {
            return Ok(WriteDisposition::InsufficientCapacity { required, available });
        }

        session.tag.write_message(message.to_vec())?;

        Ok(WriteDisposition::Written)
    }

    fn format_ndef(&self, tag: &dyn NdefTagProtocol, message: &[u8]) -> WriteDisposition {
        let session = TagSession::new(tag);

        match Self::format_connected(&session, message) {
            Ok(disposition) => disposition,
            Err(error) => WriteDisposition::TransportFailed { error },
        }
    }

    // an unformatted tag reports neither writability nor capacity reliably,
    // the combined format-and-write is the whole transaction
    fn format_connected(
        session: &TagSession<'_>,
        message: &[u8],
    ) -> Result<WriteDisposition, TransportError> {
        session.tag.connect()?;
        session.tag.format_and_write(message.to_vec())?;

        Ok(WriteDisposition::Written)
    }
}

/// Scoped tag connection, closed on every exit path. A close failure never
/// replaces the disposition the transaction already determined.
struct TagSession<'a> {
    tag: &'a dyn NdefTagProtocol,
}

impl<'a> TagSession<'a> {
    fn new(tag: &'a dyn NdefTagProtocol) -> Self {
        Self { tag }
    }
}

impl Drop for TagSession<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.tag.close() {
            warn!(%error, "failed to close tag connection");
        }
    }
}
