//! Запись PDW: входные физические величины и упакованное слово.

use std::path::Path;

use log::{debug, warn};
use pdw_types::{
    Field, FieldSpec, PdwResult, DEFAULT_PDW_FORMAT, PDW_FIELD_COUNT, PDW_SCHEMA,
};
use serde::{Deserialize, Serialize};

use crate::{
    assembler::pack,
    codec::encode_spec,
    config::EncoderConfig,
    encoders::{
        chirp_rate_identity, encode_frequency, encode_phase, encode_relative_power,
        select_markers, PowerCode,
    },
    word::EncodedWord,
};

/// Параметры одного импульса в физических единицах.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseDescriptor {
    pub marked_operation: u8,
    /// Частота, Гц
    pub frequency_hz: f64,
    /// Фаза, градусы
    pub phase_deg: f64,
    pub pulse_start_time: u64,
    pub pulse_width: u32,
    /// Относительная мощность, дБ
    pub relative_power_db: f64,
    /// Метки маркеров, `"ALL"` или `"NONE"`
    pub markers: String,
    pub pulse_mode: u8,
    pub phase_control: u8,
    pub band_adjust: u8,
    pub chirp_control: u8,
    pub freq_phase_coding: u16,
    pub chirp_rate: u32,
    pub freq_band_map: u8,
    pub pdw_format: u8,
}

impl Default for PulseDescriptor {
    fn default() -> Self {
        Self {
            marked_operation: 0,
            frequency_hz: 0.0,
            phase_deg: 0.0,
            pulse_start_time: 0,
            pulse_width: 0,
            relative_power_db: 0.0,
            markers: "NONE".to_string(),
            pulse_mode: 0,
            phase_control: 0,
            band_adjust: 0,
            chirp_control: 0,
            freq_phase_coding: 0,
            chirp_rate: 0,
            freq_band_map: 0,
            pdw_format: DEFAULT_PDW_FORMAT,
        }
    }
}

impl PulseDescriptor {
    pub fn from_json(s: &str) -> PdwResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> PdwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Запись PDW с целыми значениями всех 15 полей.
///
/// Значения вычисляются один раз при создании и проверяются на ширину поля,
/// после чего запись не меняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdwRecord {
    values: [u64; PDW_FIELD_COUNT],
    power: PowerCode,
}

impl PdwRecord {
    /// Создаёт запись с настройками по умолчанию.
    pub fn new(desc: &PulseDescriptor) -> PdwResult<Self> {
        Self::with_config(desc, &EncoderConfig::default())
    }

    pub fn with_config(
        desc: &PulseDescriptor,
        config: &EncoderConfig,
    ) -> PdwResult<Self> {
        let frequency = encode_frequency(desc.frequency_hz)?;
        let phase = encode_phase(desc.phase_deg, config.phase_policy)?;

        let power = encode_relative_power(desc.relative_power_db)?;
        if power.is_clamped() {
            debug!(
                "relative power {} dB out of range ({power:?}), encoded as 0",
                desc.relative_power_db
            );
        }

        let markers = select_markers(&desc.markers);
        if config.warn_unknown_markers && !markers.ignored.is_empty() {
            warn!(
                "markers {:?}: ignoring unknown labels {:?}",
                desc.markers, markers.ignored
            );
        }

        let mut values = [0u64; PDW_FIELD_COUNT];
        let mut set = |field: Field, value: u64| values[field.index()] = value;

        set(Field::PdwFormat, desc.pdw_format.into());
        set(Field::MarkedOperation, desc.marked_operation.into());
        set(Field::Frequency, frequency);
        set(Field::Phase, phase);
        set(Field::PulseStartTime, desc.pulse_start_time);
        set(Field::PulseWidth, desc.pulse_width.into());
        set(Field::RelativePower, power.value().into());
        set(Field::Markers, markers.mask.into());
        set(Field::PulseMode, desc.pulse_mode.into());
        set(Field::PhaseControl, desc.phase_control.into());
        set(Field::BandAdjust, desc.band_adjust.into());
        set(Field::ChirpControl, desc.chirp_control.into());
        set(Field::FreqPhaseCoding, desc.freq_phase_coding.into());
        set(Field::ChirpRate, chirp_rate_identity(desc.chirp_rate.into()));
        set(Field::FreqBandMap, desc.freq_band_map.into());

        for spec in &PDW_SCHEMA {
            spec.check(values[spec.field.index()])?;
        }

        Ok(Self { values, power })
    }

    /// Значение поля
    pub fn value(
        &self,
        field: Field,
    ) -> u64 {
        self.values[field.index()]
    }

    /// Поля в порядке схемы вместе со значениями
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, u64)> + '_ {
        PDW_SCHEMA
            .iter()
            .map(move |spec| (spec, self.values[spec.field.index()]))
    }

    /// Как была закодирована относительная мощность
    pub fn power_code(&self) -> PowerCode {
        self.power
    }

    /// Упаковывает поля в 28-байтовое слово.
    pub fn encode(&self) -> PdwResult<EncodedWord> {
        let bits = self
            .fields()
            .map(|(spec, value)| encode_spec(spec, value))
            .collect::<PdwResult<Vec<_>>>()?;

        let bytes = pack(&bits)?;
        EncodedWord::try_from(bytes.as_slice())
    }
}
