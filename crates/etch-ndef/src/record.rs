use crate::{
    EncodeError, TEXT_RECORD_TYPE,
    header::NdefHeader,
    ndef_type::NdefType,
    payload::{NdefPayload, TextPayload},
};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: NdefPayload,
}

impl NdefRecord {
    /// Text Record carrying `text` in `language_code`, the sole record of its message
    pub fn text(text: &str, language_code: &str) -> Result<Self, EncodeError> {
        let payload = TextPayload::new(text, language_code)?;

        Ok(Self::single(
            NdefType::WellKnown,
            TEXT_RECORD_TYPE.to_vec(),
            NdefPayload::Text(payload),
        ))
    }

    /// Single-record message with an empty record id
    pub fn single(type_name_format: NdefType, type_: Vec<u8>, payload: NdefPayload) -> Self {
        let header =
            NdefHeader::for_single_record(type_name_format, type_.len() as u8, payload.byte_len());

        Self {
            header,
            type_,
            id: None,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_record_is_well_known_single_record() {
        let record = NdefRecord::text("Hello", "en").unwrap();

        assert!(record.header.message_begin);
        assert!(record.header.message_end);
        assert!(!record.header.chunked);
        assert!(record.header.short_record);
        assert!(!record.header.has_id_length);
        assert_eq!(record.header.type_name_format, NdefType::WellKnown);
        assert_eq!(record.header.type_length, 1);
        assert_eq!(record.header.payload_length, 8);
        assert_eq!(record.type_, b"T");
        assert_eq!(record.id, None);
    }

    #[test]
    fn payload_over_one_byte_length_clears_short_record() {
        let record = NdefRecord::text(&"x".repeat(300), "en").unwrap();
        assert!(!record.header.short_record);
        assert_eq!(record.header.payload_length, 303);
    }

    #[test]
    fn invalid_language_code_is_a_caller_error() {
        assert!(NdefRecord::text("Hello", &"a".repeat(64)).is_err());
    }
}
