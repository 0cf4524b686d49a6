/// Event wire format shared with the page script.
/// Must stay in sync with the JavaScript reader.
///
/// Each event is 4 floats:
/// ```text
/// STATE      a = state code     b = outcome code (0 = none)
/// THEME      a = theme index
/// HIGHLIGHT  a = bitmask of highlighted display indices
/// DISPLAY    a, b, c = symbol codes of the first three display slots (-1 = empty)
/// ```
///
/// Events are only emitted for fields that changed since the previous view.

use bytemuck::{Pod, Zeroable};
use crate::api::types::DisplayState;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

pub const EVENT_STATE: f32 = 1.0;
pub const EVENT_THEME: f32 = 2.0;
pub const EVENT_HIGHLIGHT: f32 = 3.0;
pub const EVENT_DISPLAY: f32 = 4.0;

/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = EVENT_FLOATS;

    fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// Bitmask of highlighted indices. Indices past 23 are dropped so the mask
/// stays exact in an `f32`.
pub fn highlight_mask(indices: &[usize]) -> u32 {
    indices
        .iter()
        .filter(|&&i| i < 24)
        .fold(0, |mask, &i| mask | (1u32 << i))
}

/// Append events describing how `next` differs from `prev`. With no previous
/// view every event is emitted.
pub fn encode_changes(prev: Option<&DisplayState>, next: &DisplayState, out: &mut Vec<GameEvent>) {
    if changed(prev, |p| p.game_state != next.game_state || p.outcome != next.outcome) {
        out.push(GameEvent::new(
            EVENT_STATE,
            next.game_state.code() as f32,
            next.outcome.map_or(0, |o| o.code()) as f32,
            0.0,
        ));
    }
    if let Some(theme) = next.active_theme {
        if changed(prev, |p| p.active_theme != next.active_theme) {
            out.push(GameEvent::new(EVENT_THEME, theme.index() as f32, 0.0, 0.0));
        }
    }
    if changed(prev, |p| p.highlighted_indices != next.highlighted_indices) {
        let mask = highlight_mask(&next.highlighted_indices);
        out.push(GameEvent::new(EVENT_HIGHLIGHT, mask as f32, 0.0, 0.0));
    }
    if changed(prev, |p| p.display_sequence != next.display_sequence) {
        let slot = |i: usize| next.display_sequence.get(i).map_or(-1.0, |s| s.code() as f32);
        out.push(GameEvent::new(EVENT_DISPLAY, slot(0), slot(1), slot(2)));
    }
}

fn changed(prev: Option<&DisplayState>, differs: impl Fn(&DisplayState) -> bool) -> bool {
    prev.map_or(true, differs)
}
