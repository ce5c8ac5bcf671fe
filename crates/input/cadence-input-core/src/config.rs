//! Configuration for controllers and sequence triggers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// A disabled controller ignores `update` calls entirely.
    pub enabled: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Consecutive cycles the next step may stay unfired before the sequence
    /// starts over. `None` waits forever.
    pub max_gap: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let ctrl: ControllerConfig = serde_json::from_str("{}").unwrap();
        assert!(ctrl.enabled);
        let seq: SequenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(seq.max_gap, None);
        let seq: SequenceConfig = serde_json::from_str(r#"{ "max_gap": 3 }"#).unwrap();
        assert_eq!(seq.max_gap, Some(3));
    }
}
