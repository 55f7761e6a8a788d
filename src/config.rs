use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Captions for the three positions of the action button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonLabels {
    pub next: String,
    pub pay: String,
    pub confirm: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            next: "Далее".to_string(),
            pay: "Оплатить".to_string(),
            confirm: "Подтвердить".to_string(),
        }
    }
}

/// Tunable constants of a checkout session.
///
/// Every field has a default, so a config file only needs to name the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// How long the processing modal stays up before the receipt is shown.
    pub processing_delay_ms: u64,
    /// Suffix appended to every formatted amount.
    pub currency: String,
    /// Phone number the draft starts with.
    pub default_phone: String,
    /// Amount text the draft starts with, parsed like user input.
    pub default_amount: String,
    /// Stored cards, in display order. The first one is selected at start.
    pub cards: Vec<String>,
    pub labels: ButtonLabels,
    pub processing_icon: String,
    pub success_icon: String,
    /// Cancel the pending receipt when the processing modal is dismissed early.
    pub cancel_on_dismiss: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 1500,
            currency: "TJS".to_string(),
            default_phone: "061329999".to_string(),
            default_amount: "1".to_string(),
            cards: vec!["DBC****9460".to_string(), "KRT****2231".to_string()],
            labels: ButtonLabels::default(),
            processing_icon: "images/payment-pending.jpeg".to_string(),
            success_icon: "images/payment-success.jpeg".to_string(),
            cancel_on_dismiss: false,
        }
    }
}

impl FlowConfig {
    /// Loads a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn default_card(&self) -> String {
        self.cards.first().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_original_front_end() {
        let config = FlowConfig::default();
        assert_eq!(config.processing_delay(), Duration::from_millis(1500));
        assert_eq!(config.currency, "TJS");
        assert_eq!(config.default_card(), "DBC****9460");
        assert!(!config.cancel_on_dismiss);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: FlowConfig =
            serde_json::from_str(r#"{"currency": "USD", "labels": {"pay": "Pay"}}"#).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.labels.pay, "Pay");
        assert_eq!(config.labels.next, "Далее");
        assert_eq!(config.processing_delay_ms, 1500);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"processing_delay_ms": 250, "cancel_on_dismiss": true}}"#).unwrap();

        let config = FlowConfig::from_path(file.path()).unwrap();
        assert_eq!(config.processing_delay(), Duration::from_millis(250));
        assert!(config.cancel_on_dismiss);
    }

    #[test]
    fn test_from_path_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            FlowConfig::from_path(file.path()),
            Err(crate::error::FlowError::ConfigError(_))
        ));
    }

    #[test]
    fn test_empty_card_list_has_blank_default() {
        let config = FlowConfig {
            cards: Vec::new(),
            ..FlowConfig::default()
        };
        assert_eq!(config.default_card(), "");
    }
}
