use sigil_engine::{ClickResult, GameConfig, GameError, GameEvent, Session, Theme};
use crate::host::WebHost;

/// Owns the session for the page.
///
/// The crate root keeps one of these in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner {
    session: Session<WebHost>,
    torn_down: bool,
}

impl GameRunner {
    pub fn new(config: GameConfig, host: WebHost) -> Result<Self, GameError> {
        Ok(Self {
            session: Session::new(config, host)?,
            torn_down: false,
        })
    }

    /// Forward a click on the glyph called `name`. Returns whether the
    /// session did anything with it.
    pub fn click(&mut self, name: &str) -> bool {
        if self.torn_down {
            return false;
        }
        match self.session.click_named(name) {
            Ok(ClickResult::Ignored) => false,
            Ok(_) => true,
            Err(err) => {
                log::warn!("runner: click on {:?} rejected: {}", name, err);
                false
            }
        }
    }

    /// Advance session time by one animation frame.
    pub fn tick(&mut self, dt_ms: f64) {
        if self.torn_down {
            return;
        }
        if let Err(err) = self.session.advance(dt_ms) {
            log::error!("runner: tick failed: {}", err);
        }
    }

    /// Stop every timer. The runner ignores further clicks and ticks.
    pub fn teardown(&mut self) {
        self.session.teardown();
        if !self.torn_down {
            log::info!("runner: torn down");
        }
        self.torn_down = true;
    }

    pub fn force_new(&mut self) -> Result<(), GameError> {
        self.session.force_new()
    }

    pub fn force_loss(&mut self) -> Result<(), GameError> {
        self.session.force_loss()
    }

    pub fn force_win(&mut self) -> Result<Theme, GameError> {
        self.session.force_win()
    }

    pub fn display_state_json(&self) -> String {
        self.session.host().view_json().to_string()
    }

    pub fn game_events(&self) -> &[GameEvent] {
        self.session.host().events()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.game_events().as_ptr() as *const f32
    }

    /// Event count (not float count).
    pub fn game_events_len(&self) -> u32 {
        self.game_events().len() as u32
    }

    pub fn clear_game_events(&mut self) {
        self.session.host_mut().clear_events();
    }

    /// Names of the glyphs the page should offer, in alphabet order.
    pub fn symbol_names(&self) -> Vec<&'static str> {
        self.session.config().alphabet.iter().map(|s| s.name()).collect()
    }

    pub fn session(&self) -> &Session<WebHost> {
        &self.session
    }
}
