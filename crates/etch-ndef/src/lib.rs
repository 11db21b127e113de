uniffi::setup_scaffolding!();

pub mod encoder;
pub mod ffi;
pub mod header;
pub mod ndef_type;
pub mod payload;
pub mod record;

/// Record type marker of the well-known Text Record
pub const TEXT_RECORD_TYPE: &[u8] = b"T";

/// The status byte reserves 6 bits for the language code length
pub const MAX_LANGUAGE_CODE_LENGTH: usize = 63;

/// Largest payload representable with the 1-byte short-record length
pub const MAX_SHORT_RECORD_PAYLOAD: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum EncodeError {
    #[error("language code is {length} bytes, at most 63 fit the status byte")]
    LanguageCodeTooLong { length: u32 },

    #[error("language code must be ascii: {language_code}")]
    LanguageCodeNotAscii { language_code: String },
}
