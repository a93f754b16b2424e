//! Перевод одного целого в битовую строку фиксированной ширины.

use pdw_types::{FieldSpec, PdwError, PdwResult};

/// Количество значащих бит в `value` (для нуля — 0).
pub fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Двоичное представление `value`, дополненное нулями слева до `width`.
///
/// Строка не обрезается: если `value` требует больше `width` бит, результат
/// длиннее `width`. Для упаковки слова используйте [`encode_field_checked`]
/// или [`encode_spec`].
///
/// ```
/// use pdw_core::encode_field;
/// assert_eq!(encode_field(5, 4), "0101");
/// assert_eq!(encode_field(256, 8).len(), 9);
/// ```
pub fn encode_field(
    value: u64,
    width: u32,
) -> String {
    format!("{value:0w$b}", w = width as usize)
}

/// То же, что [`encode_field`], но с проверкой ширины.
pub fn encode_field_checked(
    value: u64,
    width: u32,
) -> PdwResult<String> {
    if width == 0 || width > u64::BITS {
        return Err(PdwError::InvalidFieldWidth(width));
    }

    if bit_length(value) > width {
        return Err(PdwError::FieldOverflow {
            field: "value",
            value,
            width,
        });
    }

    Ok(encode_field(value, width))
}

/// Кодирует значение поля схемы, сохраняя имя поля в ошибке.
pub fn encode_spec(
    spec: &FieldSpec,
    value: u64,
) -> PdwResult<String> {
    spec.check(value)?;
    encode_field_checked(value, spec.width)
}
