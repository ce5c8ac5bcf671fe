//! Error types for trigger management and command binding

use serde::{Deserialize, Serialize};

use crate::ids::TriggerId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InputError {
    /// No handler is registered under this command name
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    /// The controller does not own this trigger
    #[error("Trigger not found: {id}")]
    TriggerNotFound { id: TriggerId },
}

impl InputError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "command",
            Self::TriggerNotFound { .. } => "trigger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_categories() {
        let err = InputError::UnknownCommand {
            name: "save".into(),
        };
        assert_eq!(err.to_string(), "Unknown command 'save'");
        assert_eq!(err.category(), "command");

        let err = InputError::TriggerNotFound { id: TriggerId(7) };
        assert_eq!(err.to_string(), "Trigger not found: trigger#7");
        assert_eq!(err.category(), "trigger");
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let err = InputError::TriggerNotFound { id: TriggerId(2) };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"TriggerNotFound":{"id":2}}"#);
        let back: InputError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
