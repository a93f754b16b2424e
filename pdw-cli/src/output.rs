use pdw_core::{EncodedWord, PdwRecord};
use pdw_types::{PdwError, PdwResult};
use serde::Serialize;

/// Формат вывода слова
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Шестнадцатеричная строка
    Hex,
    /// Группы по 8 бит
    Bin,
    /// JSON: значения полей и байты
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = PdwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "bin" | "binary" => Ok(OutputFormat::Bin),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PdwError::config(format!(
                "Unknown output format '{s}'. Use: hex, bin, json"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldReport {
    name: &'static str,
    width: u32,
    value: u64,
}

#[derive(Debug, Serialize)]
struct WordReport<'a> {
    fields: Vec<FieldReport>,
    bytes: &'a [u8],
    hex: String,
}

/// Форматирует слово для печати.
pub fn render(
    record: &PdwRecord,
    word: &EncodedWord,
    format: OutputFormat,
) -> PdwResult<String> {
    match format {
        OutputFormat::Hex => Ok(word.to_hex()),
        OutputFormat::Bin => Ok(word.to_bit_strings().join(" ")),
        OutputFormat::Json => {
            let report = WordReport {
                fields: record
                    .fields()
                    .map(|(spec, value)| FieldReport {
                        name: spec.name,
                        width: spec.width,
                        value,
                    })
                    .collect(),
                bytes: word.as_bytes(),
                hex: word.to_hex(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use pdw_core::PulseDescriptor;

    use super::*;

    #[test]
    fn test_output_format_fromstr() {
        assert_eq!("HEX".parse::<OutputFormat>().unwrap(), OutputFormat::Hex);
        assert_eq!("binary".parse::<OutputFormat>().unwrap(), OutputFormat::Bin);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render() {
        let record = PdwRecord::new(&PulseDescriptor::default()).unwrap();
        let word = record.encode().unwrap();

        let hex = render(&record, &word, OutputFormat::Hex).unwrap();
        assert_eq!(hex.len(), 56);

        let bin = render(&record, &word, OutputFormat::Bin).unwrap();
        assert_eq!(bin.split(' ').count(), 28);

        let json = render(&record, &word, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["fields"].as_array().unwrap().len(), 15);
        assert_eq!(parsed["fields"][0]["name"], "pdw_format");
        assert_eq!(parsed["bytes"].as_array().unwrap().len(), 28);
    }
}
