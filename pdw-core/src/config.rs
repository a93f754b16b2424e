use std::path::Path;

use pdw_types::{PdwResult, PhasePolicy};
use serde::{Deserialize, Serialize};

/// Настройки кодировщика.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Поведение фазы на границе 360°
    pub phase_policy: PhasePolicy,
    /// Писать предупреждение об отброшенных символах маркеров
    pub warn_unknown_markers: bool,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl EncoderConfig {
    pub fn from_json(s: &str) -> PdwResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Загружает конфигурацию из JSON файла.
    pub fn load<P: AsRef<Path>>(path: P) -> PdwResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn with_phase_policy(
        mut self,
        policy: PhasePolicy,
    ) -> Self {
        self.phase_policy = policy;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            phase_policy: PhasePolicy::Overflow,
            warn_unknown_markers: true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.phase_policy, PhasePolicy::Overflow);
        assert!(config.warn_unknown_markers);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EncoderConfig::from_json(r#"{ "phase_policy": "wrap" }"#).unwrap();
        assert_eq!(config.phase_policy, PhasePolicy::Wrap);
        assert!(config.warn_unknown_markers);

        assert!(EncoderConfig::from_json(r#"{ "phase_policy": "circle" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{ "phase_policy": "overflow", "warn_unknown_markers": false }}"#
        )
        .unwrap();

        let config = EncoderConfig::load(tmp.path()).unwrap();
        assert_eq!(config.phase_policy, PhasePolicy::Overflow);
        assert!(!config.warn_unknown_markers);

        assert!(EncoderConfig::load("/nonexistent/pdw.json").is_err());
    }
}
