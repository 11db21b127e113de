pub mod ffi;
pub(crate) mod logging;
pub mod nfc_writer;
pub mod tag;

pub use nfc_writer::{NfcWriter, WriteDisposition};
pub use tag::{NdefTagProtocol, TagTechnology, TransportError};

uniffi::setup_scaffolding!();
