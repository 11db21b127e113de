use crate::{EncodeError, MAX_LANGUAGE_CODE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum NdefPayload {
    Text(TextPayload),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TextPayload {
    pub language: String,
    pub text: String,
}

impl TextPayload {
    /// Validated text payload, `language_code` is an IANA/ISO subtag
    pub fn new(text: &str, language_code: &str) -> Result<Self, EncodeError> {
        if language_code.len() > MAX_LANGUAGE_CODE_LENGTH {
            return Err(EncodeError::LanguageCodeTooLong {
                length: language_code.len() as u32,
            });
        }

        if !language_code.is_ascii() {
            return Err(EncodeError::LanguageCodeNotAscii {
                language_code: language_code.to_string(),
            });
        }

        Ok(Self {
            language: language_code.to_string(),
            text: text.to_string(),
        })
    }

    /// Bit 7 is always zero, the text is UTF-8; the low 6 bits carry the
    /// language code byte length
    pub fn status_byte(&self) -> u8 {
        self.language.len() as u8
    }
}

impl NdefPayload {
    pub fn byte_len(&self) -> u32 {
        match self {
            NdefPayload::Text(text) => 1 + text.language.len() as u32 + text.text.len() as u32,
            NdefPayload::Data(data) => data.len() as u32,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            NdefPayload::Text(text) => {
                let mut bytes = Vec::with_capacity(self.byte_len() as usize);
                bytes.push(text.status_byte());
                bytes.extend_from_slice(text.language.as_bytes());
                bytes.extend_from_slice(text.text.as_bytes());
                bytes
            }
            NdefPayload::Data(data) => data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_byte_is_language_code_length() {
        let payload = TextPayload::new("hello", "en-US").unwrap();
        assert_eq!(payload.status_byte(), 5);
    }

    #[test]
    fn text_payload_concatenates_without_separators() {
        let payload = NdefPayload::Text(TextPayload::new("hi", "en").unwrap());
        assert_eq!(payload.to_bytes(), vec![0x02, b'e', b'n', b'h', b'i']);
        assert_eq!(payload.byte_len(), 5);
    }

    #[test]
    fn empty_language_code_is_legal() {
        let payload = TextPayload::new("hi", "").unwrap();
        assert_eq!(payload.status_byte(), 0);
    }
}
