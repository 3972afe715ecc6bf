// Target temperature entered in the setpoint form
use serde::Serialize;

pub const MISSING_TARGET_MESSAGE: &str = "Please enter a valid target temperature.";

/// A non-empty value taken from the `target_temp` input.
///
/// The backend does the numeric validation, so a value that does not parse as
/// a number is still forwarded as text and rejected there.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetTemperature {
    raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TargetValue {
    Number(f64),
    Text(String),
}

impl TargetTemperature {
    pub fn from_input(input: &str) -> Option<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> TargetValue {
        match self.raw.parse::<f64>() {
            Ok(number) if number.is_finite() => TargetValue::Number(number),
            _ => TargetValue::Text(self.raw.clone()),
        }
    }
}
