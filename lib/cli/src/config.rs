use clap::ValueEnum;
use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

fn default_value_separator() -> String {
    String::from(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Radix {
    #[value(name = "decimal")]
    Decimal,
    #[value(name = "hex")]
    Hex,
}

impl Default for Radix {
    fn default() -> Self {
        Self::Decimal
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Radix used when printing decoded values.
    #[serde(default)]
    pub radix: Radix,
    #[serde(default = "enabled")]
    pub uppercase: bool,
    #[serde(rename = "byteSeparator", default)]
    pub byte_separator: String,
    #[serde(rename = "valueSeparator", default = "default_value_separator")]
    pub value_separator: String,
}

impl OutputConfig {
    pub fn from_json(json: &str) -> serde_json::Result<OutputConfig> {
        serde_json::from_str(json)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            radix: Radix::default(),
            uppercase: enabled(),
            byte_separator: String::new(),
            value_separator: default_value_separator(),
        }
    }
}
