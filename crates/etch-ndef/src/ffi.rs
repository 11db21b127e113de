use crate::EncodeError;

#[uniffi::export]
pub fn encode_text_message(text: String, language_code: String) -> Result<Vec<u8>, EncodeError> {
    crate::encoder::encode_text_message(&text, &language_code)
}

/// Byte count a tag must hold for this message, for hosts that show capacity
/// requirements before a tag is presented
#[uniffi::export]
pub fn text_message_size(text: String, language_code: String) -> Result<u32, EncodeError> {
    let bytes = crate::encoder::encode_text_message(&text, &language_code)?;
    Ok(bytes.len() as u32)
}
