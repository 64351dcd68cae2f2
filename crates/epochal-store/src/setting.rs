//! Setting names and value types.
//!
//! A setting is addressed as `name[:type]`. Without a type suffix the
//! setting is a plain string.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{Result, StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingType {
    #[default]
    String,
    /// Colon-separated byte pairs, e.g. `de:ad:be:ef`.
    Hex,
    Int,
    Uint,
    Uuid,
}

impl SettingType {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingType::String => "string",
            SettingType::Hex => "hex",
            SettingType::Int => "int",
            SettingType::Uint => "uint",
            SettingType::Uuid => "uuid",
        }
    }

    /// Check `value` against this type and return its canonical form.
    pub fn normalize(self, value: &str) -> Result<String> {
        let invalid = |reason: &str| StoreError::InvalidValue {
            kind: self.as_str().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            SettingType::String => Ok(value.to_string()),
            SettingType::Hex => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(String::new());
                }
                let mut bytes = Vec::new();
                for pair in trimmed.split(':') {
                    if pair.len() != 2 {
                        return Err(invalid("expected two hex digits per byte"));
                    }
                    let byte = u8::from_str_radix(pair, 16)
                        .map_err(|_| invalid("not a hex digit"))?;
                    bytes.push(format!("{byte:02x}"));
                }
                Ok(bytes.join(":"))
            }
            SettingType::Int => value
                .trim()
                .parse::<i64>()
                .map(|v| v.to_string())
                .map_err(|e| invalid(&e.to_string())),
            SettingType::Uint => {
                let trimmed = value.trim();
                let parsed = match trimmed
                    .strip_prefix("0x")
                    .or_else(|| trimmed.strip_prefix("0X"))
                {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => trimmed.parse::<u64>(),
                };
                parsed
                    .map(|v| v.to_string())
                    .map_err(|e| invalid(&e.to_string()))
            }
            SettingType::Uuid => Uuid::parse_str(value.trim())
                .map(|u| u.hyphenated().to_string())
                .map_err(|e| invalid(&e.to_string())),
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(SettingType::String),
            "hex" => Ok(SettingType::Hex),
            "int" => Ok(SettingType::Int),
            "uint" => Ok(SettingType::Uint),
            "uuid" => Ok(SettingType::Uuid),
            other => Err(StoreError::InvalidData(format!(
                "unknown setting type '{other}'"
            ))),
        }
    }
}

/// A setting name with its (possibly defaulted) type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingName {
    pub name: String,
    pub kind: SettingType,
}

impl SettingName {
    pub fn new(name: &str, kind: SettingType) -> Result<Self> {
        if name.is_empty() {
            return Err(StoreError::InvalidData("empty setting name".to_string()));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')))
        {
            return Err(StoreError::InvalidData(format!(
                "setting name '{name}' contains '{bad}'"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            kind,
        })
    }
}

impl FromStr for SettingName {
    type Err = StoreError;

    /// Parse `name` or `name:type`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((name, kind)) => SettingName::new(name, kind.parse()?),
            None => SettingName::new(s, SettingType::default()),
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.kind)
    }
}
