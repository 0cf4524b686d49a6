use serde::Serialize;
use crate::catalog::{Symbol, Theme};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    /// Waiting for the first click.
    Init,
    /// Clicks feed the input window.
    Playing,
    /// End animation running; clicks ignored.
    Finished,
    /// Optional pause before returning to `Init`; clicks ignored.
    Resetting,
}

impl GameState {
    /// Wire code used by the event protocol.
    pub fn code(self) -> u32 {
        match self {
            GameState::Init => 0,
            GameState::Playing => 1,
            GameState::Finished => 2,
            GameState::Resetting => 3,
        }
    }

    /// Whether clicks are accepted in this state.
    pub fn accepts_clicks(self) -> bool {
        matches!(self, GameState::Init | GameState::Playing)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn code(self) -> u32 {
        match self {
            Outcome::Won => 1,
            Outcome::Lost => 2,
        }
    }
}

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Not `init` or `playing`: nothing changed.
    Ignored,
    /// First click, the game moved from `init` to `playing`.
    Started,
    /// Appended to the input; the game continues.
    Accepted,
    /// Appended and ended the game.
    Finished(Outcome),
}

/// Everything the page needs to draw the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub display_sequence: Vec<Symbol>,
    pub highlighted_indices: Vec<usize>,
    pub active_theme: Option<Theme>,
    pub game_state: GameState,
    pub outcome: Option<Outcome>,
    /// Length of the closest match (lit match dots).
    pub matched_len: usize,
    pub attempts: u32,
    /// The game widget is opened up (playing, finished, or enough wins to
    /// show the score plot).
    pub expanded: bool,
    /// Next correct symbol. Only populated in debug mode.
    pub hint: Option<Symbol>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_init_and_playing_accept_clicks() {
        assert!(GameState::Init.accepts_clicks());
        assert!(GameState::Playing.accepts_clicks());
        assert!(!GameState::Finished.accepts_clicks());
        assert!(!GameState::Resetting.accepts_clicks());
    }

    #[test]
    fn display_state_serializes_camel_case() {
        let view = DisplayState {
            display_sequence: vec![Symbol::Gold, Symbol::Salt, Symbol::Moon],
            highlighted_indices: vec![1],
            active_theme: Some(Theme::GreenLine),
            game_state: GameState::Finished,
            outcome: Some(Outcome::Won),
            matched_len: 3,
            attempts: 4,
            expanded: true,
            hint: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["displaySequence"][2], "moon");
        assert_eq!(json["activeTheme"], "green-line");
        assert_eq!(json["gameState"], "finished");
        assert_eq!(json["highlightedIndices"][0], 1);
    }
}
