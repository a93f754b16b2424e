//! Пример: кодирование одного PDW
//!
//! Демонстрирует:
//! - заполнение PulseDescriptor физическими величинами
//! - создание PdwRecord и упаковку в 28-байтовое слово
//! - вывод слова в шестнадцатеричном и двоичном виде

use pdw_core::{EncoderConfig, PdwRecord, PhasePolicy, PulseDescriptor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Импульс: 9.4 ГГц, 45°, 1 мкс, -3 дБ, маркеры 1, 5 и A ---
    let desc = PulseDescriptor {
        marked_operation: 1,
        frequency_hz: 9.4e9,
        phase_deg: 45.0,
        pulse_start_time: 1_704_067_200_000_000_000,
        pulse_width: 1_000,
        relative_power_db: -3.0,
        markers: "15a".to_string(),
        pulse_mode: 2,
        chirp_control: 1,
        ..PulseDescriptor::default()
    };

    let config = EncoderConfig::default().with_phase_policy(PhasePolicy::Wrap);
    let record = PdwRecord::with_config(&desc, &config)?;

    for (spec, value) in record.fields() {
        println!("{:>18} ({:>2} bit): {value}", spec.name, spec.width);
    }

    let word = record.encode()?;
    println!("hex: {word}");
    println!("bin: {}", word.to_bit_strings().join(" "));

    Ok(())
}
