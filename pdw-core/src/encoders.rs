//! Преобразования физических величин в целые значения полей.
//!
//! Все функции независимы друг от друга и не имеют состояния.

use pdw_types::{PdwError, PdwResult, PhasePolicy};

/// Шагов частоты на 1 Гц (фиксированная точка 2^10)
pub const FREQUENCY_STEPS_PER_HZ: f64 = 1024.0;

/// Шагов фазы на полный оборот (12-битное поле)
pub const PHASE_STEPS_PER_TURN: i64 = 4096;

/// Смещение экспоненты относительной мощности
pub const POWER_EXPONENT_BIAS: i32 = -26;

/// Бит мантиссы относительной мощности
pub const POWER_MANTISSA_BITS: u32 = 10;

/// Число допустимых значений экспоненты (5 бит)
pub const POWER_EXPONENT_RANGE: i32 = 32;

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0; // 2^64

/// Метки маркеров; метка с индексом `i` соответствует биту `1 << i`
pub const MARKER_LABELS: [char; 12] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C',
];

/// Маска «все маркеры»
pub const ALL_MARKERS: u16 = (1 << MARKER_LABELS.len()) - 1;

/// Частота в Гц → `floor(hz * 1024 + 0.5)`.
///
/// Верхней границы нет: значение, не помещающееся в 47 бит, отклоняется
/// при сборке записи.
pub fn encode_frequency(hz: f64) -> PdwResult<u64> {
    if !hz.is_finite() {
        return Err(PdwError::invalid_input(
            "frequency",
            format!("not a finite number: {hz}"),
        ));
    }
    if hz < 0.0 {
        return Err(PdwError::invalid_input(
            "frequency",
            format!("must not be negative: {hz} Hz"),
        ));
    }

    scaled_to_u64("frequency", (hz * FREQUENCY_STEPS_PER_HZ + 0.5).floor())
}

/// Неотрицательное целое `f64` → `u64` без насыщения на 2^64.
fn scaled_to_u64(
    field: &'static str,
    scaled: f64,
) -> PdwResult<u64> {
    if scaled >= U64_LIMIT {
        return Err(PdwError::invalid_input(
            field,
            format!("encoded value {scaled:e} exceeds 64 bits"),
        ));
    }

    Ok(scaled as u64)
}

/// Фаза в градусах → `floor(deg * 4096 / 360 + 0.5)`.
///
/// С [`PhasePolicy::Overflow`] 360° даёт 4096 (не помещается в 12 бит), а
/// отрицательный угол отклоняется. С [`PhasePolicy::Wrap`] результат берётся
/// по модулю 4096.
pub fn encode_phase(
    degrees: f64,
    policy: PhasePolicy,
) -> PdwResult<u64> {
    if !degrees.is_finite() {
        return Err(PdwError::invalid_input(
            "phase",
            format!("not a finite number: {degrees}"),
        ));
    }

    let steps = (degrees * PHASE_STEPS_PER_TURN as f64 / 360.0 + 0.5).floor();
    if !steps.is_finite() {
        return Err(PdwError::invalid_input(
            "phase",
            format!("angle {degrees}° is out of range"),
        ));
    }

    match policy {
        PhasePolicy::Overflow => {
            if steps < 0.0 {
                return Err(PdwError::invalid_input(
                    "phase",
                    format!("negative angle {degrees}° with overflow policy"),
                ));
            }
            scaled_to_u64("phase", steps)
        }
        PhasePolicy::Wrap => Ok(steps.rem_euclid(PHASE_STEPS_PER_TURN as f64) as u64),
    }
}

/// Результат кодирования относительной мощности.
///
/// Значения вне диапазона экспоненты не считаются ошибкой: оба края
/// сворачиваются в 0, но остаются различимыми для вызывающего кода.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCode {
    /// 5 бит экспоненты (старшие) + 10 бит мантиссы
    InRange(u16),
    /// Отношение меньше 2^-26
    BelowRange,
    /// Отношение не меньше 2^6
    AboveRange,
}

impl PowerCode {
    /// Значение поля `relative_power`
    pub fn value(&self) -> u16 {
        match self {
            PowerCode::InRange(v) => *v,
            PowerCode::BelowRange | PowerCode::AboveRange => 0,
        }
    }

    pub fn is_clamped(&self) -> bool {
        !matches!(self, PowerCode::InRange(_))
    }
}

/// Относительная мощность в дБ → 15-битное число с плавающей точкой.
///
/// `linear = 10^(dB/10) = m * 2^e`, `0.5 <= m < 1`; экспонента
/// `e - bias - 1` должна лежать в `0..32`, иначе результат сворачивается в 0.
pub fn encode_relative_power(db: f64) -> PdwResult<PowerCode> {
    if db.is_nan() {
        return Err(PdwError::invalid_input("relative_power", "not a number"));
    }

    let linear = 10f64.powf(db / 10.0);

    if linear == 0.0 {
        return Ok(PowerCode::BelowRange);
    }
    if linear.is_infinite() {
        return Ok(PowerCode::AboveRange);
    }

    let (_, e) = frexp(linear);
    let exponent = e - POWER_EXPONENT_BIAS - 1;

    if exponent >= POWER_EXPONENT_RANGE {
        return Ok(PowerCode::AboveRange);
    }
    if exponent < 0 {
        return Ok(PowerCode::BelowRange);
    }

    let scale = (1u32 << POWER_MANTISSA_BITS) as f64;
    let mantissa = ((linear * 2f64.powi(-POWER_EXPONENT_BIAS - exponent) - 1.0) * scale).floor();
    let code = ((exponent as u16) << POWER_MANTISSA_BITS) + mantissa as u16;

    Ok(PowerCode::InRange(code))
}

/// Разложение `x = m * 2^e`, `0.5 <= |m| < 1` для конечного ненулевого `x`.
fn frexp(x: f64) -> (f64, i32) {
    const EXP_MASK: u64 = 0x7ff << 52;

    let bits = x.to_bits();
    let raw_exp = ((bits & EXP_MASK) >> 52) as i32;

    if raw_exp == 0 {
        // субнормальное: нормализуем умножением на 2^64
        let (m, e) = frexp(x * 2f64.powi(64));
        return (m, e - 64);
    }

    let m = f64::from_bits((bits & !EXP_MASK) | (1022u64 << 52));
    (m, raw_exp - 1022)
}

/// Разбор строки маркеров.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkerSelection {
    /// Битовая маска выбранных маркеров
    pub mask: u16,
    /// Символы, не являющиеся метками (без повторов, в порядке появления)
    pub ignored: Vec<char>,
}

/// Разбирает строку маркеров без учёта регистра.
///
/// `"ALL"` и `"NONE"` выбирают все маркеры или ни одного; иначе строка
/// трактуется как множество меток `1`–`9`, `A`–`C`.
pub fn select_markers(text: &str) -> MarkerSelection {
    let upper = text.to_uppercase();

    match upper.as_str() {
        "ALL" => {
            return MarkerSelection {
                mask: ALL_MARKERS,
                ignored: Vec::new(),
            }
        }
        "NONE" => return MarkerSelection::default(),
        _ => {}
    }

    let mut selection = MarkerSelection::default();

    for c in upper.chars() {
        match MARKER_LABELS.iter().position(|&label| label == c) {
            Some(i) => selection.mask |= 1 << i,
            None if !selection.ignored.contains(&c) => selection.ignored.push(c),
            None => {}
        }
    }

    selection
}

/// Строка маркеров → битовая маска (неизвестные символы отбрасываются).
pub fn encode_markers(text: &str) -> u16 {
    select_markers(text).mask
}

/// Скорость ЛЧМ передаётся как есть: перевод единиц ещё не определён.
pub fn chirp_rate_identity(value: u64) -> u64 {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency() {
        assert_eq!(encode_frequency(1_000_000_000.0).unwrap(), 1_024_000_000_000);
        assert_eq!(encode_frequency(0.0).unwrap(), 0);
        // round-half-up: 0.5/1024 Гц → 0.5 → 1
        assert_eq!(encode_frequency(0.5 / 1024.0).unwrap(), 1);
        assert_eq!(encode_frequency(1.25).unwrap(), 1280);
    }

    #[test]
    fn test_frequency_invalid() {
        assert!(encode_frequency(-1.0).is_err());
        assert!(encode_frequency(f64::NAN).is_err());
        assert!(encode_frequency(f64::INFINITY).is_err());
    }

    #[test]
    fn test_phase_overflow_policy() {
        let p = PhasePolicy::Overflow;
        assert_eq!(encode_phase(0.0, p).unwrap(), 0);
        assert_eq!(encode_phase(180.0, p).unwrap(), 2048);
        assert_eq!(encode_phase(90.0, p).unwrap(), 1024);
        // 360° не помещается в 12 бит
        assert_eq!(encode_phase(360.0, p).unwrap(), 4096);
        assert!(encode_phase(-90.0, p).is_err());
        assert!(encode_phase(f64::NAN, p).is_err());
    }

    #[test]
    fn test_phase_wrap_policy() {
        let p = PhasePolicy::Wrap;
        assert_eq!(encode_phase(360.0, p).unwrap(), 0);
        assert_eq!(encode_phase(180.0, p).unwrap(), 2048);
        assert_eq!(encode_phase(-90.0, p).unwrap(), 3072);
        assert_eq!(encode_phase(540.0, p).unwrap(), 2048);
    }

    #[test]
    fn test_phase_wrap_large_angles() {
        let p = PhasePolicy::Wrap;
        // floor(1e20 * 4096 / 360 + 0.5) кратно 4096
        assert_eq!(encode_phase(1e20, p).unwrap(), 0);
        assert_eq!(encode_phase(-1e20, p).unwrap(), 0);
        assert_eq!(encode_phase(360.0 * 1e9 + 90.0, p).unwrap(), 1024);
        assert!(encode_phase(f64::MAX, p).is_err());
    }

    #[test]
    fn test_scaled_values_beyond_64_bits() {
        let err = encode_frequency(1e17).unwrap_err();
        assert!(matches!(
            err,
            PdwError::InvalidPhysicalInput {
                field: "frequency",
                ..
            }
        ));
        assert!(err.to_string().contains("exceeds 64 bits"));

        assert!(matches!(
            encode_phase(1e20, PhasePolicy::Overflow),
            Err(PdwError::InvalidPhysicalInput { field: "phase", .. })
        ));
        // чуть ниже 2^64 ещё проходит
        assert!(encode_frequency(1.0e16).is_ok());
    }

    #[test]
    fn test_relative_power_in_range() {
        assert_eq!(
            encode_relative_power(0.0).unwrap(),
            PowerCode::InRange(26624)
        );
        // 10 дБ = 10 = 0.625 * 2^4 → экспонента 29, мантисса 256
        assert_eq!(encode_relative_power(10.0).unwrap().value(), 29 * 1024 + 256);
        // -10 дБ = 0.1 = 0.8 * 2^-3 → экспонента 22, мантисса 614
        assert_eq!(encode_relative_power(-10.0).unwrap().value(), 22 * 1024 + 614);
        assert_eq!(encode_relative_power(3.0).unwrap().value(), 27643);
    }

    #[test]
    fn test_relative_power_clamps_to_zero() {
        let high = encode_relative_power(20.0).unwrap();
        assert_eq!(high, PowerCode::AboveRange);
        assert_eq!(high.value(), 0);
        assert!(high.is_clamped());

        let low = encode_relative_power(-80.0).unwrap();
        assert_eq!(low, PowerCode::BelowRange);
        assert_eq!(low.value(), 0);

        assert_eq!(
            encode_relative_power(f64::NEG_INFINITY).unwrap(),
            PowerCode::BelowRange
        );
        assert_eq!(
            encode_relative_power(f64::INFINITY).unwrap(),
            PowerCode::AboveRange
        );
        assert!(encode_relative_power(f64::NAN).is_err());
    }

    #[test]
    fn test_relative_power_range_edges() {
        // 2^-26 — наименьшее представимое отношение
        let db_min = 10.0 * 2f64.powi(-26).log10();
        assert_eq!(encode_relative_power(db_min + 1e-9).unwrap().value(), 0);
        assert!(!encode_relative_power(db_min + 1e-9).unwrap().is_clamped());
        // чуть ниже 2^6 ещё в диапазоне, экспонента 31
        let db_max = 10.0 * 2f64.powi(6).log10();
        let code = encode_relative_power(db_max - 1e-9).unwrap();
        assert_eq!(code.value() >> 10, 31);
    }

    #[test]
    fn test_frexp() {
        assert_eq!(frexp(1.0), (0.5, 1));
        assert_eq!(frexp(10.0), (0.625, 4));
        assert_eq!(frexp(0.75), (0.75, 0));
        let (m, e) = frexp(f64::MIN_POSITIVE / 4.0);
        assert_eq!(m, 0.5);
        assert_eq!(e, -1023);
    }

    #[test]
    fn test_markers() {
        assert_eq!(encode_markers("NONE"), 0);
        assert_eq!(encode_markers("ALL"), 4095);
        assert_eq!(encode_markers("all"), encode_markers("ALL"));
        assert_eq!(encode_markers("none"), 0);
        assert_eq!(encode_markers("15a"), 1 + 16 + 512);
        assert_eq!(encode_markers("a51"), encode_markers("15A"));
        assert_eq!(encode_markers("1111"), 1);
        assert_eq!(encode_markers("Z"), 0);
        assert_eq!(encode_markers("C"), 2048);
        assert_eq!(encode_markers(""), 0);
    }

    #[test]
    fn test_markers_ignored_chars() {
        let sel = select_markers("1z2zx");
        assert_eq!(sel.mask, 0b11);
        assert_eq!(sel.ignored, vec!['Z', 'X']);

        // " ALL" — не ключевое слово; 'A' считается меткой
        let sel = select_markers(" ALL");
        assert_eq!(sel.mask, 512);
        assert_eq!(sel.ignored, vec![' ', 'L']);
    }

    #[test]
    fn test_chirp_rate_identity() {
        assert_eq!(chirp_rate_identity(0), 0);
        assert_eq!(chirp_rate_identity(131_071), 131_071);
    }
}
