//! Per-turn result types

/// What happened during one turn of the conversation
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Nothing was heard; the user was asked to repeat
    NoInput,
    /// A plugin claimed the text and handled it
    Matched { plugin: String, text: String },
    /// No plugin claimed the text; the user was asked to repeat
    Unmatched { text: String },
    /// The matched plugin failed; the user got an apology
    HandlerFailed { plugin: String, error: anyhow::Error },
    /// The input source is exhausted; nothing was said
    Closed,
}

impl DispatchOutcome {
    /// Name of the plugin that ran, if any
    pub fn plugin(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Matched { plugin, .. } | DispatchOutcome::HandlerFailed { plugin, .. } => {
                Some(plugin)
            }
            DispatchOutcome::NoInput
            | DispatchOutcome::Unmatched { .. }
            | DispatchOutcome::Closed => None,
        }
    }

    /// Whether the turn fell back to a reprompt
    pub fn is_reprompt(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::NoInput | DispatchOutcome::Unmatched { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_accessor() {
        let matched = DispatchOutcome::Matched {
            plugin: "clock".to_string(),
            text: "time".to_string(),
        };
        assert_eq!(matched.plugin(), Some("clock"));
        assert!(!matched.is_reprompt());

        let failed = DispatchOutcome::HandlerFailed {
            plugin: "clock".to_string(),
            error: anyhow::anyhow!("boom"),
        };
        assert_eq!(failed.plugin(), Some("clock"));

        assert_eq!(DispatchOutcome::NoInput.plugin(), None);
        assert!(DispatchOutcome::Unmatched {
            text: "play music".to_string()
        }
        .is_reprompt());
        assert!(!DispatchOutcome::Closed.is_reprompt());
        assert_eq!(DispatchOutcome::Closed.plugin(), None);
    }
}
