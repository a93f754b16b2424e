//! Сборка слова из битовых строк полей.
//!
//! Поля передаются в порядке схемы, а склеиваются в обратном: последнее
//! поле схемы становится старшими битами слова, первое — младшими.

use log::trace;
use pdw_types::{PdwError, PdwResult};

use crate::codec::encode_field_checked;

/// Склеивает битовые строки полей в обратном порядке.
pub fn concat_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let len = fields.iter().map(|f| f.as_ref().len()).sum();
    let mut word = String::with_capacity(len);

    for field in fields.iter().rev() {
        word.push_str(field.as_ref());
    }

    word
}

/// Режет битовую строку слева направо на группы по 8 бит.
///
/// Неполная последняя группа — ошибка, а не молчаливое отбрасывание.
pub fn split_bytes(bits: &str) -> PdwResult<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(PdwError::NonByteAlignedWord { bits: bits.len() });
    }

    bits.as_bytes()
        .chunks_exact(8)
        .map(|group| {
            group.iter().try_fold(0u8, |byte, &c| match c {
                b'0' => Ok(byte << 1),
                b'1' => Ok((byte << 1) | 1),
                _ => Err(PdwError::InvalidBitString(format!(
                    "unexpected character {:?}",
                    c as char
                ))),
            })
        })
        .collect()
}

/// Склеивает поля и возвращает байты слова.
pub fn pack<S: AsRef<str>>(fields: &[S]) -> PdwResult<Vec<u8>> {
    let word = concat_fields(fields);
    trace!("packed word ({} bits): {word}", word.len());
    split_bytes(&word)
}

/// Кодирует пары `(value, width)` и упаковывает их в слово.
pub fn pack_fields(fields: &[(u64, u32)]) -> PdwResult<Vec<u8>> {
    let bits = fields
        .iter()
        .map(|&(value, width)| encode_field_checked(value, width))
        .collect::<PdwResult<Vec<_>>>()?;

    pack(&bits)
}
