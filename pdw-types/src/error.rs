use thiserror::Error;

/// Результат для операций кодирования PDW
pub type PdwResult<T> = std::result::Result<T, PdwError>;

/// Типы ошибок кодирования PDW.
#[derive(Debug, Error)]
pub enum PdwError {
    /// Значение не помещается в ширину поля
    #[error("Field overflow: {field} = {value} does not fit in {width} bits")]
    FieldOverflow {
        field: &'static str,
        value: u64,
        width: u32,
    },

    /// Недопустимая ширина поля (0 или больше 64)
    #[error("Invalid field width: {0}")]
    InvalidFieldWidth(u32),

    /// Длина слова не кратна 8 битам
    #[error("Packed word is not byte aligned: {bits} bits")]
    NonByteAlignedWord { bits: usize },

    /// Неверное количество байт в слове
    #[error("Invalid word length: found {found} bytes, expected {expected}")]
    WordLength { found: usize, expected: usize },

    /// Некорректное физическое значение на входе
    #[error("Invalid {field}: {reason}")]
    InvalidPhysicalInput { field: &'static str, reason: String },

    /// В битовой строке встретился символ, отличный от '0' и '1'
    #[error("Invalid bit string: {0}")]
    InvalidBitString(String),

    /// Ошибка конфигурации
    #[error("Config error: {0}")]
    Config(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка разбора JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PdwError {
    /// Удобные конструкторы
    pub fn invalid_input<S: Into<String>>(
        field: &'static str,
        reason: S,
    ) -> Self {
        Self::InvalidPhysicalInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn config<S: Into<String>>(s: S) -> Self {
        Self::Config(s.into())
    }
}
