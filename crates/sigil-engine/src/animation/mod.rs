// animation/mod.rs
//
// Win/loss feedback: a fixed pipeline of timed highlight phases driven by a
// virtual timer queue. Independent of the game rules: the session only starts it,
// advances it and listens for the single completion event.

pub mod phase;
pub mod pipeline;
pub mod timers;

pub use phase::{PhaseKind, PhaseRun, PhaseSpec};
pub use pipeline::{AnimationEvent, Animator};
pub use timers::{TimerId, TimerQueue};
