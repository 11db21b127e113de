use crate::{MAX_SHORT_RECORD_PAYLOAD, ndef_type::NdefType};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for the sole record of a message: begin and end both set, no id,
    /// short form whenever the payload length fits a single byte
    pub fn for_single_record(type_name_format: NdefType, type_length: u8, payload_length: u32) -> Self {
        Self {
            message_begin: true,
            message_end: true,
            chunked: false,
            short_record: payload_length <= MAX_SHORT_RECORD_PAYLOAD as u32,
            has_id_length: false,
            type_name_format,
            type_length,
            payload_length,
            id_length: None,
        }
    }
}
