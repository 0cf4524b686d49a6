//! Symbol sequences: generation, target maps, the rolling input window and
//! prefix matching.

pub mod generator;
pub mod matcher;
pub mod targets;
pub mod window;

pub use generator::{generate_sequence, theme_sequences, SequenceError};
pub use matcher::{best_match, find_matches, match_target, Match};
pub use targets::TargetMap;
pub use window::InputWindow;
