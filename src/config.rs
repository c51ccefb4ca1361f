//! Engine configuration.

use crate::engine::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Static description an engine is constructed from.
///
/// `states` maps each state identifier to opaque metadata. The engine only
/// enumerates its keys, in the order they were configured. `initial` is not
/// checked against `states`.
///
/// # Example
///
/// ```rust
/// use daycycle::config::FsmConfig;
///
/// let config = FsmConfig::from_json(
///     r#"{ "initial": "normal", "states": { "normal": {}, "busy": {} } }"#,
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), ["normal", "busy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsmConfig {
    pub initial: String,
    #[serde(default)]
    pub states: Map<String, Value>,
}

impl FsmConfig {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: Map::new(),
        }
    }

    /// Add a state with its metadata, keeping insertion order.
    pub fn with_state(mut self, name: impl Into<String>, metadata: Value) -> Self {
        self.states.insert(name.into(), metadata);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// A JSON `null` document yields `Ok(None)`; the caller decides whether
    /// an absent configuration is an error.
    pub fn from_json(json: &str) -> Result<Option<Self>, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Configured state identifiers, in configured order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn metadata(&self, state: &str) -> Option<&Value> {
        self.states.get(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_initial_and_states() {
        let config = FsmConfig::from_json(
            r#"{
                "initial": "normal",
                "states": { "normal": {}, "busy": { "label": "Busy" }, "hungry": {}, "sleeping": {} }
            }"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(config.initial, "normal");
        assert_eq!(
            config.state_names().collect::<Vec<_>>(),
            ["normal", "busy", "hungry", "sleeping"]
        );
        assert_eq!(config.metadata("busy"), Some(&json!({ "label": "Busy" })));
    }

    #[test]
    fn states_default_to_empty() {
        let config = FsmConfig::from_json(r#"{ "initial": "normal" }"#)
            .unwrap()
            .unwrap();
        assert_eq!(config.state_names().count(), 0);
    }

    #[test]
    fn null_document_is_absent() {
        assert_eq!(FsmConfig::from_json("null").unwrap(), None);
    }

    #[test]
    fn missing_initial_is_parse_error() {
        let result = FsmConfig::from_json(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn builder_style_keeps_order() {
        let config = FsmConfig::new("sleeping")
            .with_state("sleeping", json!(null))
            .with_state("normal", json!({ "awake": true }));

        assert_eq!(
            config.state_names().collect::<Vec<_>>(),
            ["sleeping", "normal"]
        );
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = FsmConfig::new("normal").with_state("normal", json!({}));
        let json = config.to_json().unwrap();
        let parsed = FsmConfig::from_json(&json).unwrap().unwrap();
        assert_eq!(config, parsed);
    }
}
