use etch_macros::impl_default_for;
use etch_util::result_ext::ResultExt as _;
use tracing::debug;

use crate::{
    nfc_writer::{NfcWriter, WriteDisposition},
    tag::{NdefTagProtocol, TagTechnology},
};

impl_default_for!(FfiNfcWriter);

#[derive(Debug, uniffi::Object)]
pub struct FfiNfcWriter(NfcWriter);

#[uniffi::export]
impl FfiNfcWriter {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self(NfcWriter::new())
    }

    /// Write an already encoded message to the presented tag
    #[uniffi::method]
    pub fn write_message(
        &self,
        tag: Box<dyn NdefTagProtocol>,
        technologies: Vec<TagTechnology>,
        message: Vec<u8>,
    ) -> WriteDisposition {
        self.0.write(tag.as_ref(), &technologies, &message)
    }

    /// Encode `text` as a Text Record message and write it in one call,
    /// the way a discovery callback hands off a freshly presented tag
    #[uniffi::method]
    pub fn write_text(
        &self,
        tag: Box<dyn NdefTagProtocol>,
        technologies: Vec<TagTechnology>,
        text: String,
        language_code: String,
    ) -> Result<WriteDisposition, WriteTextError> {
        let message = etch_ndef::encoder::encode_text_message(&text, &language_code)
            .map_err_str(WriteTextError::InvalidPayload)?;

        debug!(message = %hex::encode(&message), "encoded text record message");

        Ok(self.0.write(tag.as_ref(), &technologies, &message))
    }

    /// Short operator-facing status line for a disposition
    #[uniffi::method]
    pub fn status_message(&self, disposition: WriteDisposition) -> String {
        disposition.to_string()
    }
}

/// Encoding failures are caller bugs, not tag dispositions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum WriteTextError {
    #[error("invalid text payload: {0}")]
    InvalidPayload(String),
}

#[uniffi::export]
pub fn init_logging() {
    crate::logging::init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TransportError;

    // never touched, encoding fails before any tag interaction
    #[derive(Debug)]
    struct InertTag;

    impl NdefTagProtocol for InertTag {
        fn connect(&self) -> Result<(), TransportError> {
            unreachable!("tag must not be touched")
        }

        fn is_writable(&self) -> bool {
            unreachable!("tag must not be touched")
        }

        fn max_message_size(&self) -> u32 {
            unreachable!("tag must not be touched")
        }

        fn write_message(&self, _message: Vec<u8>) -> Result<(), TransportError> {
            unreachable!("tag must not be touched")
        }

        fn format_and_write(&self, _message: Vec<u8>) -> Result<(), TransportError> {
            unreachable!("tag must not be touched")
        }

        fn close(&self) -> Result<(), TransportError> {
            unreachable!("tag must not be touched")
        }
    }

    #[test]
    fn write_text_rejects_invalid_language_code_before_touching_the_tag() {
        let writer = FfiNfcWriter::new();

        let result = writer.write_text(
            Box::new(InertTag),
            vec![TagTechnology::NdefReadWrite],
            "hello".to_string(),
            "a".repeat(64),
        );

        assert!(matches!(result, Err(WriteTextError::InvalidPayload(_))));
    }

    #[test]
    fn status_messages_are_short_and_human_readable() {
        let writer = FfiNfcWriter::new();

        assert_eq!(
            writer.status_message(WriteDisposition::Written),
            "wrote NDEF message to tag"
        );
        assert_eq!(
            writer.status_message(WriteDisposition::Unsupported),
            "tag does not support NDEF"
        );
        assert_eq!(
            writer.status_message(WriteDisposition::InsufficientCapacity {
                required: 30,
                available: 8
            }),
            "message needs 30 bytes, tag holds 8"
        );
    }
}
