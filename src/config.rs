// File: src/config.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("empty key in phonetic_overrides")]
    EmptyKey,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("value for key {key} is not Devanagari: {value}")]
    UnmappedValue { key: String, value: String },
}

/// User additions to the phonetic input scheme.
///
/// ```json
/// { "phonetic_overrides": { "ksh": "क्ष", "w": "व" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Phonetic key to the Devanagari it types. Replaces a built-in key of
    /// the same spelling.
    pub phonetic_overrides: BTreeMap<String, String>,
}

impl ConverterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&json)
    }

    /// Checks key and value shape. Whether a value maps onto Devanagari
    /// units is checked when the overrides are applied to the tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in &self.phonetic_overrides {
            if key.is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            if !key.is_ascii() {
                return Err(ConfigError::NonAsciiKey(key.clone()));
            }
            if value.is_empty() {
                return Err(ConfigError::EmptyValue(key.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Converter;

    #[test]
    fn parse_valid_json() {
        let json = r#"{"phonetic_overrides": {"w": "व", "ksh": "क्ष"}}"#;
        let config = ConverterConfig::from_json(json).unwrap();
        assert_eq!(config.phonetic_overrides.len(), 2);
        assert_eq!(config.phonetic_overrides["w"], "व");
    }

    #[test]
    fn missing_table_is_empty() {
        let config = ConverterConfig::from_json("{}").unwrap();
        assert!(config.phonetic_overrides.is_empty());
    }

    #[test]
    fn error_bad_json() {
        let err = ConverterConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_non_ascii_key() {
        let err = ConverterConfig::from_json(r#"{"phonetic_overrides": {"क": "क"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonAsciiKey(k) if k == "क"));
    }

    #[test]
    fn error_empty_key_and_value() {
        let err = ConverterConfig::from_json(r#"{"phonetic_overrides": {"": "क"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKey));
        let err = ConverterConfig::from_json(r#"{"phonetic_overrides": {"k": ""}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyValue(k) if k == "k"));
    }

    #[test]
    fn error_value_outside_devanagari() {
        let config = ConverterConfig::from_json(r#"{"phonetic_overrides": {"w": "w"}}"#).unwrap();
        let err = Converter::with_config(&config).err().unwrap();
        assert!(matches!(err, ConfigError::UnmappedValue { ref key, .. } if key == "w"));
    }

    #[test]
    fn error_missing_file() {
        let err = ConverterConfig::load(Path::new("/nonexistent/akshar.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn override_adds_key() {
        let config = ConverterConfig::from_json(r#"{"phonetic_overrides": {"w": "व"}}"#).unwrap();
        let converter = Converter::with_config(&config).unwrap();
        assert_eq!(converter.english_to_unicode("wan"), "वन");
    }
}
