use serde::{Deserialize, Serialize};

use crate::PdwError;

/// Поведение фазы на границе 360°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhasePolicy {
    /// 360° → 4096, не помещается в 12 бит и отклоняется при сборке записи
    #[default]
    Overflow,
    /// Фаза по модулю полного оборота: 360° → 0, -90° → 3072
    Wrap,
}

impl std::fmt::Display for PhasePolicy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            PhasePolicy::Overflow => write!(f, "overflow"),
            PhasePolicy::Wrap => write!(f, "wrap"),
        }
    }
}

impl std::str::FromStr for PhasePolicy {
    type Err = PdwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overflow" | "reject" => Ok(PhasePolicy::Overflow),
            "wrap" | "modulo" => Ok(PhasePolicy::Wrap),
            _ => Err(PdwError::config(format!(
                "Unknown phase policy '{s}'. Use: overflow, wrap"
            ))),
        }
    }
}
