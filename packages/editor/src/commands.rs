//! Commands a host can send to an [`EditSession`](crate::EditSession).
//!
//! Every session operation has a command, so the tokio runtime and the wasm
//! binding can forward host input without knowing the session API.

use crate::mutations::Assignment;
use headline_model::{Effect, WordFlag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Write a value at a settings path
    Update { path: String, value: Assignment },
    /// Replace the headline text; ignored while a word is selected
    CommitText { text: String },
    SelectWord { index: usize },
    ClearSelection,
    ToggleWordFlag { index: usize, flag: WordFlag },
    SetWordColor { index: usize, color: String },
    ResetWord { index: usize },
    AddGradientColor,
    RemoveGradientColor { index: usize },
    SetGradientColor { index: usize, color: String },
    ToggleEffect { effect: Effect },
    ToggleLetterAnimation,
    /// Replay the preview entrance
    RefreshAnimation,
    /// Fire the revert timer if it is due
    Tick,
    /// Replace the settings with an exported snapshot
    Import { json: String },
    /// Return to the configured defaults
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_commands_use_tagged_json() {
        let command: Command = serde_json::from_value(json!({
            "type": "toggleWordFlag",
            "index": 2,
            "flag": "underline"
        }))
        .unwrap();
        assert_eq!(
            command,
            Command::ToggleWordFlag {
                index: 2,
                flag: WordFlag::Underline
            }
        );

        let command: Command = serde_json::from_value(json!({
            "type": "update",
            "path": "gradient.direction",
            "value": { "set": "up" }
        }))
        .unwrap();
        assert_eq!(
            command,
            Command::Update {
                path: "gradient.direction".into(),
                value: Assignment::Set(json!("up")),
            }
        );

        assert_eq!(serde_json::to_value(Command::Tick).unwrap(), json!({ "type": "tick" }));
    }

    #[test]
    fn test_remove_assignment() {
        let command: Command = serde_json::from_value(json!({
            "type": "update",
            "path": "wordStyling.1",
            "value": "remove"
        }))
        .unwrap();

        assert_eq!(
            command,
            Command::Update {
                path: "wordStyling.1".into(),
                value: Assignment::Remove,
            }
        );
    }
}
