use serde::{Deserialize, Serialize};
use crate::api::types::DisplayState;
use crate::catalog::{Symbol, Theme};
use crate::error::GameError;

/// Configuration for a game session, provided by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of target, input and display sequences (default: 3).
    pub seq_len: usize,
    /// Counted clicks before the game is lost (default: 10).
    pub games_to_lose: u32,
    /// Base animation tick in milliseconds (default: 250).
    pub anim_speed_ms: f64,
    /// Pause between the end animation and the next session. Zero skips the
    /// resetting phase entirely (default: 0).
    pub reset_delay_ms: f64,
    /// Symbols the generator may draw from (default: the whole catalog).
    pub alphabet: Vec<Symbol>,
    /// Themes with a secret sequence, in tie-break order (default: all).
    pub themes: Vec<Theme>,
    /// Draw new target sequences whenever a session starts (default: true).
    pub regenerate_targets: bool,
    /// Enables debug triggers and the next-symbol hint (default: false).
    pub debug: bool,
    /// Seed for the session RNG (default: 42).
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seq_len: 3,
            games_to_lose: 10,
            anim_speed_ms: 250.0,
            reset_delay_ms: 0.0,
            alphabet: Symbol::ALL.to_vec(),
            themes: Theme::ALL.to_vec(),
            regenerate_targets: true,
            debug: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) config from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.seq_len == 0 {
            return Err(GameError::invalid_config("seq_len must be at least 1"));
        }
        if has_duplicates(&self.alphabet) {
            return Err(GameError::invalid_config("alphabet lists a symbol twice"));
        }
        if self.alphabet.len() < self.seq_len {
            return Err(GameError::invalid_config(format!(
                "alphabet has {} symbols, seq_len needs {} distinct ones",
                self.alphabet.len(),
                self.seq_len
            )));
        }
        if self.themes.is_empty() {
            return Err(GameError::invalid_config("at least one theme is required"));
        }
        if has_duplicates(&self.themes) {
            return Err(GameError::invalid_config("themes lists a theme twice"));
        }
        if self.games_to_lose == 0 {
            return Err(GameError::invalid_config("games_to_lose must be at least 1"));
        }
        if !(self.anim_speed_ms > 0.0) {
            return Err(GameError::invalid_config("anim_speed_ms must be positive"));
        }
        if !(self.reset_delay_ms >= 0.0) {
            return Err(GameError::invalid_config("reset_delay_ms must not be negative"));
        }
        Ok(())
    }
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items.iter().enumerate().any(|(i, a)| items[i + 1..].contains(a))
}

/// The environment the game runs in.
///
/// The session never touches page state itself: theme switching and
/// rendering go through this trait.
pub trait Host {
    /// Make `theme` the active page style, deactivating all others.
    fn apply_theme(&mut self, theme: Theme);

    /// Called after every recomputation with the full view state.
    fn render(&mut self, _view: &DisplayState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "games_to_lose": 15, "debug": true }"#).unwrap();
        assert_eq!(config.games_to_lose, 15);
        assert!(config.debug);
        assert_eq!(config.seq_len, 3);
        assert_eq!(config.alphabet.len(), 10);
    }

    #[test]
    fn json_uses_catalog_names() {
        let config = GameConfig::from_json(
            r#"{ "alphabet": ["gold", "salt", "moon", "wax"], "themes": ["green-leaf"] }"#,
        )
        .unwrap();
        assert_eq!(config.alphabet, vec![Symbol::Gold, Symbol::Salt, Symbol::Moon, Symbol::Wax]);
        assert_eq!(config.themes, vec![Theme::GreenLeaf]);
    }

    #[test]
    fn rejects_small_alphabet() {
        let config = GameConfig {
            alphabet: vec![Symbol::Gold, Symbol::Salt],
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_duplicates_and_zero_budget() {
        let dup = GameConfig {
            alphabet: vec![Symbol::Gold, Symbol::Gold, Symbol::Salt, Symbol::Moon],
            ..GameConfig::default()
        };
        assert!(dup.validate().is_err());

        let no_budget = GameConfig { games_to_lose: 0, ..GameConfig::default() };
        assert!(no_budget.validate().is_err());

        let no_themes = GameConfig { themes: Vec::new(), ..GameConfig::default() };
        assert!(no_themes.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
