//! Схема полей Pulse Descriptor Word.
//!
//! Порядок объявления в [`PDW_SCHEMA`] канонический: первое поле попадает в
//! младшие биты упакованного слова, последнее в старшие.

use std::fmt;

use crate::{PdwError, PdwResult};

/// Общая длина слова в битах
pub const PDW_WORD_BITS: usize = 224;

/// Общая длина слова в байтах
pub const PDW_WORD_BYTES: usize = PDW_WORD_BITS / 8;

/// Количество полей в схеме
pub const PDW_FIELD_COUNT: usize = 15;

/// Значение `pdw_format` по умолчанию
pub const DEFAULT_PDW_FORMAT: u8 = 1;

/// Поле PDW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Field {
    PdwFormat = 0,
    MarkedOperation = 1,
    Frequency = 2,
    Phase = 3,
    PulseStartTime = 4,
    PulseWidth = 5,
    RelativePower = 6,
    Markers = 7,
    PulseMode = 8,
    PhaseControl = 9,
    BandAdjust = 10,
    ChirpControl = 11,
    FreqPhaseCoding = 12,
    ChirpRate = 13,
    FreqBandMap = 14,
}

/// Описание поля: имя и фиксированная ширина в битах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub width: u32,
}

const SCHEMA: [FieldSpec; PDW_FIELD_COUNT] = [
    FieldSpec::new(Field::PdwFormat, "pdw_format", 3),
    FieldSpec::new(Field::MarkedOperation, "marked_operation", 2),
    FieldSpec::new(Field::Frequency, "frequency", 47),
    FieldSpec::new(Field::Phase, "phase", 12),
    FieldSpec::new(Field::PulseStartTime, "pulse_start_time", 64),
    FieldSpec::new(Field::PulseWidth, "pulse_width", 32),
    FieldSpec::new(Field::RelativePower, "relative_power", 15),
    FieldSpec::new(Field::Markers, "markers", 12),
    FieldSpec::new(Field::PulseMode, "pulse_mode", 2),
    FieldSpec::new(Field::PhaseControl, "phase_control", 1),
    FieldSpec::new(Field::BandAdjust, "band_adjust", 2),
    FieldSpec::new(Field::ChirpControl, "chirp_control", 3),
    FieldSpec::new(Field::FreqPhaseCoding, "freq_phase_coding", 9),
    FieldSpec::new(Field::ChirpRate, "chirp_rate", 17),
    FieldSpec::new(Field::FreqBandMap, "freq_band_map", 3),
];

/// Схема PDW в каноническом порядке.
pub static PDW_SCHEMA: [FieldSpec; PDW_FIELD_COUNT] = SCHEMA;

const fn schema_bits() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < SCHEMA.len() {
        total += SCHEMA[i].width as usize;
        i += 1;
    }
    total
}

// Упаковка без потерь возможна только при выравнивании на байт.
const _: () = assert!(schema_bits() == PDW_WORD_BITS);
const _: () = assert!(PDW_WORD_BITS % 8 == 0);

impl FieldSpec {
    pub const fn new(
        field: Field,
        name: &'static str,
        width: u32,
    ) -> Self {
        Self { field, name, width }
    }

    /// Максимальное значение, которое помещается в поле
    pub fn max_value(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// Проверяет, что `value` помещается в ширину поля.
    pub fn check(
        &self,
        value: u64,
    ) -> PdwResult<u64> {
        if value > self.max_value() {
            return Err(PdwError::FieldOverflow {
                field: self.name,
                value,
                width: self.width,
            });
        }

        Ok(value)
    }
}

impl Field {
    /// Все поля в каноническом порядке
    pub const ALL: [Field; PDW_FIELD_COUNT] = [
        Field::PdwFormat,
        Field::MarkedOperation,
        Field::Frequency,
        Field::Phase,
        Field::PulseStartTime,
        Field::PulseWidth,
        Field::RelativePower,
        Field::Markers,
        Field::PulseMode,
        Field::PhaseControl,
        Field::BandAdjust,
        Field::ChirpControl,
        Field::FreqPhaseCoding,
        Field::ChirpRate,
        Field::FreqBandMap,
    ];

    /// Позиция поля в схеме
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn spec(&self) -> &'static FieldSpec {
        &PDW_SCHEMA[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn width(&self) -> u32 {
        self.spec().width
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
