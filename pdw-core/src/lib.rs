//! Библиотека кодирования PDW
//!
//! Pulse Descriptor Word — запись фиксированной длины (224 бита, 28 байт),
//! описывающая один обнаруженный радиоимпульс: частоту, фазу, время,
//! мощность и флаги модуляции.
//!
//! # Быстрый старт
//!
//! ```
//! use pdw_core::{PdwRecord, PulseDescriptor};
//!
//! let desc = PulseDescriptor {
//!     frequency_hz: 1.0e9,
//!     pulse_start_time: 100_000_000,
//!     pulse_width: 500_000,
//!     ..PulseDescriptor::default()
//! };
//! let word = PdwRecord::new(&desc)?.encode()?;
//! assert_eq!(word.as_bytes().len(), 28);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod codec;
pub mod config;
pub mod encoders;
pub mod record;
pub mod word;

pub use assembler::*;
pub use codec::*;
pub use config::*;
pub use encoders::*;
pub use pdw_types::{
    Field, FieldSpec, PdwError, PdwResult, PhasePolicy, DEFAULT_PDW_FORMAT, PDW_FIELD_COUNT,
    PDW_SCHEMA, PDW_WORD_BITS, PDW_WORD_BYTES,
};
pub use record::*;
pub use word::*;
