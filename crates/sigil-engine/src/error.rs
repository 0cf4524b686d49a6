use crate::sequence::generator::SequenceError;

/// Errors surfaced by the game session and its configuration.
///
/// None of these are meant for the player: they flag a broken host setup
/// (bad config, unknown glyph names from the page) or a debug trigger used
/// outside debug mode.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The configuration cannot describe a playable game.
    #[error("Invalid game config: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },

    /// Sequence generation broke its contract.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A debug trigger was used while debug mode is off.
    #[error("Debug command `{command}` is only available with debug mode enabled")]
    DebugDisabled {
        /// The rejected command.
        command: &'static str,
    },

    /// The page sent a glyph name the catalog does not know.
    #[error("Unknown symbol `{name}`")]
    UnknownSymbol {
        /// Name as received.
        name: String,
    },

    /// Config JSON could not be parsed.
    #[error("Failed to parse game config: {0}")]
    Config(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
