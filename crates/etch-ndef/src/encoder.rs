use tracing::trace;

use crate::{EncodeError, header::NdefHeader, record::NdefRecord};

/// Build and serialize a Text Record message in one step
pub fn encode_text_message(text: &str, language_code: &str) -> Result<Vec<u8>, EncodeError> {
    let record = NdefRecord::text(text, language_code)?;
    let bytes = encode_message(&record);

    trace!(bytes = bytes.len(), language_code, "encoded text record message");

    Ok(bytes)
}

/// Serialize a single-record NDEF message, byte-exact
pub fn encode_message(record: &NdefRecord) -> Vec<u8> {
    let payload = record.payload.to_bytes();
    debug_assert_eq!(payload.len() as u32, record.header.payload_length);

    // header byte, type length, payload length (1 or 4 bytes), id length
    let mut bytes = Vec::with_capacity(7 + record.type_.len() + payload.len());
    encode_header(&record.header, &mut bytes);

    bytes.extend_from_slice(&record.type_);
    if let Some(id) = &record.id {
        bytes.extend_from_slice(id);
    }
    bytes.extend_from_slice(&payload);

    bytes
}

fn encode_header(header: &NdefHeader, bytes: &mut Vec<u8>) {
    bytes.push(header_byte(header));
    bytes.push(header.type_length);

    if header.short_record {
        bytes.push(header.payload_length as u8);
    } else {
        bytes.extend_from_slice(&header.payload_length.to_be_bytes());
    }

    if let Some(id_length) = header.id_length {
        bytes.push(id_length);
    }
}

fn header_byte(header: &NdefHeader) -> u8 {
    let mut byte = header.type_name_format.bits();

    if header.message_begin {
        byte |= 1 << 7;
    }
    if header.message_end {
        byte |= 1 << 6;
    }
    if header.chunked {
        byte |= 1 << 5;
    }
    if header.short_record {
        byte |= 1 << 4;
    }
    if header.has_id_length {
        byte |= 1 << 3;
    }

    byte
}
