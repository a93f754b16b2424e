use std::fmt;

use pdw_types::{PdwError, PdwResult, PDW_WORD_BYTES};
use serde::{Deserialize, Serialize};

/// Закодированное слово PDW: ровно 28 байт, старший байт первым.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedWord {
    bytes: [u8; PDW_WORD_BYTES],
}

impl EncodedWord {
    pub fn new(bytes: [u8; PDW_WORD_BYTES]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; PDW_WORD_BYTES] {
        &self.bytes
    }

    /// Байты в виде 8-символьных битовых строк
    pub fn to_bit_strings(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{b:08b}")).collect()
    }

    /// Шестнадцатеричная строка без разделителей
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl TryFrom<&[u8]> for EncodedWord {
    type Error = PdwError;

    fn try_from(bytes: &[u8]) -> PdwResult<Self> {
        let bytes: [u8; PDW_WORD_BYTES] = bytes.try_into().map_err(|_| PdwError::WordLength {
            found: bytes.len(),
            expected: PDW_WORD_BYTES,
        })?;

        Ok(Self { bytes })
    }
}

impl AsRef<[u8]> for EncodedWord {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
