pub mod api;
pub mod animation;
pub mod bridge;
pub mod catalog;
pub mod core;
pub mod error;
pub mod sequence;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, Host};
pub use api::types::{ClickResult, DisplayState, GameState, Outcome};
pub use catalog::{Symbol, Theme};
pub use crate::core::history::{GameHistory, GameRecord};
pub use crate::core::rng::Rng;
pub use crate::core::session::Session;
pub use error::GameError;
pub use sequence::{
    best_match, find_matches, generate_sequence, match_target, theme_sequences, InputWindow,
    Match, SequenceError, TargetMap,
};
pub use animation::{AnimationEvent, Animator, PhaseSpec, TimerId, TimerQueue};
pub use bridge::protocol::{encode_changes, highlight_mask, GameEvent, EVENT_FLOATS};
