use std::fmt::Debug;

// Callback interface the host platform implements for one tag presentation.
// The core borrows the handle for a single transaction and never keeps it.
#[uniffi::export(callback_interface)]
pub trait NdefTagProtocol: Send + Sync + Debug + 'static {
    /// Open the connection to the tag
    fn connect(&self) -> Result<(), TransportError>;

    /// Whether the tag accepts writes, cached by the platform at discovery
    fn is_writable(&self) -> bool;

    /// Largest message the tag can hold, in bytes
    fn max_message_size(&self) -> u32;

    /// Commit an encoded NDEF message to an already formatted tag
    fn write_message(&self, message: Vec<u8>) -> Result<(), TransportError>;

    /// Format a blank tag and write the message as one operation
    fn format_and_write(&self, message: Vec<u8>) -> Result<(), TransportError>;

    /// Release the connection
    fn close(&self) -> Result<(), TransportError>;
}

/// Read/write technologies the platform reports for a presented tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, uniffi::Enum)]
pub enum TagTechnology {
    /// Already NDEF formatted, supports direct writes
    #[display("NDEF")]
    NdefReadWrite,

    /// Blank or foreign format, must be formatted to NDEF first
    #[display("NDEF Formatable")]
    NdefFormatable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, uniffi::Error)]
pub enum TransportError {
    #[error("tag I/O failed: {0}")]
    Io(String),

    #[error("tag rejected NDEF message: {0}")]
    InvalidFormat(String),

    #[error("tag left the field: {0}")]
    TagLost(String),
}
