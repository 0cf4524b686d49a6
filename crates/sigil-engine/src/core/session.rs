//! Game session state machine.
//!
//! ```text
//! init --first click--> playing --full match / budget spent--> finished
//!   ^                                                              |
//!   +------------- resetting (optional delay) <-- animation done --+
//! ```
//!
//! Clicks are handled synchronously: the input window, closest match and
//! display sequence are all recomputed before `click` returns. Time only
//! matters while `finished` (animation) and `resetting`, and is fed in by the
//! host through `advance`.

use crate::animation::{AnimationEvent, Animator};
use crate::api::game::{GameConfig, Host};
use crate::api::types::{ClickResult, DisplayState, GameState, Outcome};
use crate::catalog::{Symbol, Theme};
use crate::core::history::GameHistory;
use crate::core::rng::Rng;
use crate::error::GameError;
use crate::sequence::{
    best_match, find_matches, generate_sequence, theme_sequences, InputWindow, Match, TargetMap,
};

pub struct Session<H: Host> {
    config: GameConfig,
    host: H,
    rng: Rng,
    targets: TargetMap,
    /// Targets supplied by the caller survive session restarts.
    pinned_targets: bool,
    state: GameState,
    input: InputWindow,
    attempts: u32,
    closest: Option<Match>,
    display: Vec<Symbol>,
    highlighted: Vec<usize>,
    outcome: Option<Outcome>,
    active_theme: Option<Theme>,
    animator: Animator,
    reset_remaining_ms: f64,
    history: GameHistory,
}

impl<H: Host> Session<H> {
    /// Validate `config`, draw fresh targets and enter `init`.
    pub fn new(config: GameConfig, host: H) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = Rng::new(config.seed);
        let targets = theme_sequences(&mut rng, &config.alphabet, &config.themes, config.seq_len)?;
        Self::build(config, host, rng, targets, false)
    }

    /// Like `new`, but with fixed target sequences that are kept across
    /// restarts.
    pub fn with_targets(config: GameConfig, host: H, targets: TargetMap) -> Result<Self, GameError> {
        config.validate()?;
        if targets.is_empty() {
            return Err(GameError::invalid_config("target map is empty"));
        }
        for (theme, target) in targets.iter() {
            if target.len() != config.seq_len {
                return Err(GameError::invalid_config(format!(
                    "target for {:?} has {} symbols, seq_len is {}",
                    theme,
                    target.len(),
                    config.seq_len
                )));
            }
            if let Some(s) = target.iter().find(|s| !config.alphabet.contains(s)) {
                return Err(GameError::invalid_config(format!(
                    "target for {:?} uses {} which is not in the alphabet",
                    theme,
                    s.name()
                )));
            }
        }
        let rng = Rng::new(config.seed);
        Self::build(config, host, rng, targets, true)
    }

    fn build(
        config: GameConfig,
        host: H,
        rng: Rng,
        targets: TargetMap,
        pinned_targets: bool,
    ) -> Result<Self, GameError> {
        let mut session = Self {
            input: InputWindow::new(config.seq_len),
            animator: Animator::with_standard_pipeline(config.anim_speed_ms),
            config,
            host,
            rng,
            targets,
            pinned_targets,
            state: GameState::Init,
            attempts: 0,
            closest: None,
            display: Vec::new(),
            highlighted: Vec::new(),
            outcome: None,
            active_theme: None,
            reset_remaining_ms: 0.0,
            history: GameHistory::new(),
        };
        session.enter_init(false)?;
        Ok(session)
    }

    // -- Input --

    /// Handle a click on `symbol`.
    pub fn click(&mut self, symbol: Symbol) -> Result<ClickResult, GameError> {
        match self.state {
            GameState::Init => {
                self.state = GameState::Playing;
                log::debug!("session: playing");
                self.render();
                Ok(ClickResult::Started)
            }
            GameState::Playing => self.play(symbol),
            GameState::Finished | GameState::Resetting => {
                log::debug!("session: click on {} ignored while {:?}", symbol.name(), self.state);
                Ok(ClickResult::Ignored)
            }
        }
    }

    /// `click` by glyph name, as sent by the page.
    pub fn click_named(&mut self, name: &str) -> Result<ClickResult, GameError> {
        let symbol = Symbol::from_name(name).ok_or_else(|| GameError::UnknownSymbol {
            name: name.to_string(),
        })?;
        self.click(symbol)
    }

    fn play(&mut self, symbol: Symbol) -> Result<ClickResult, GameError> {
        self.input.push(symbol);
        let found = best_match(&find_matches(self.input.as_slice(), &self.targets));

        // Last chance: with one attempt left, a click that keeps the same
        // theme matching is free.
        let last_chance = match (self.closest, found) {
            (Some(prev), Some(next)) => {
                prev.theme == next.theme && self.attempts + 1 == self.config.games_to_lose
            }
            _ => false,
        };
        if !last_chance {
            self.attempts += 1;
        }
        self.closest = found;
        log::debug!(
            "session: clicked {} -> input {:?}, closest {:?}, attempts {}/{}",
            symbol.name(),
            self.input.as_slice(),
            self.closest,
            self.attempts,
            self.config.games_to_lose
        );

        if let Some(m) = found.filter(|m| m.len == self.config.seq_len) {
            self.finish(Outcome::Won, Some(m.theme), true)?;
            return Ok(ClickResult::Finished(Outcome::Won));
        }
        if self.attempts >= self.config.games_to_lose {
            self.finish(Outcome::Lost, None, true)?;
            return Ok(ClickResult::Finished(Outcome::Lost));
        }

        let hint: Vec<Symbol> = found.and_then(|m| m.next).into_iter().collect();
        self.display = generate_sequence(&mut self.rng, &self.config.alphabet, self.config.seq_len, &hint)?;
        self.render();
        Ok(ClickResult::Accepted)
    }

    // -- Time --

    /// Move session time forward by `dt_ms`. Drives the end animation and
    /// the resetting delay; a no-op in every other state.
    /// Negative and NaN deltas count as zero.
    pub fn advance(&mut self, dt_ms: f64) -> Result<(), GameError> {
        let dt_ms = dt_ms.max(0.0);
        match self.state {
            GameState::Finished => {
                let until = self.animator.now() + dt_ms;
                let mut events = Vec::new();
                self.animator.advance(dt_ms, &mut events);
                // Time past the end of the animation flows into the reset delay.
                let overshoot = self.animator.finished_at().map_or(0.0, |at| until - at);
                self.apply_animation(events, overshoot)?;
            }
            GameState::Resetting => self.count_down_reset(dt_ms)?,
            GameState::Init | GameState::Playing => {}
        }
        Ok(())
    }

    /// Cancel every pending animation timer. Nothing fires afterwards until
    /// a new game ends. Calling it again is harmless.
    pub fn teardown(&mut self) {
        let cancelled = self.animator.cancel_all();
        if cancelled > 0 {
            log::debug!("session: teardown cancelled {} timers", cancelled);
        }
    }

    // -- Debug triggers --

    /// Start a fresh session immediately.
    pub fn force_new(&mut self) -> Result<(), GameError> {
        self.require_debug("force_new")?;
        self.enter_init(true)
    }

    /// End the current game as lost. Forced outcomes are not recorded in
    /// the history.
    pub fn force_loss(&mut self) -> Result<(), GameError> {
        self.require_debug("force_loss")?;
        self.finish(Outcome::Lost, None, false)
    }

    /// End the current game as won on a random theme, which is applied.
    /// Not recorded in the history.
    pub fn force_win(&mut self) -> Result<Theme, GameError> {
        self.require_debug("force_win")?;
        let themes: Vec<Theme> = self.targets.themes().collect();
        let theme = *self
            .rng
            .pick(&themes)
            .ok_or_else(|| GameError::invalid_config("target map is empty"))?;
        if let Some(target) = self.targets.get(theme) {
            self.input.fill(target);
        }
        self.closest = Some(Match {
            theme,
            from: 0,
            len: self.config.seq_len,
            next: None,
        });
        self.finish(Outcome::Won, Some(theme), false)?;
        Ok(theme)
    }

    fn require_debug(&self, command: &'static str) -> Result<(), GameError> {
        if self.config.debug {
            Ok(())
        } else {
            log::warn!("session: {} rejected, debug mode is off", command);
            Err(GameError::DebugDisabled { command })
        }
    }

    // -- Transitions --

    fn enter_init(&mut self, new_session: bool) -> Result<(), GameError> {
        self.animator.cancel_all();
        if new_session && self.config.regenerate_targets && !self.pinned_targets {
            self.targets = theme_sequences(
                &mut self.rng,
                &self.config.alphabet,
                &self.config.themes,
                self.config.seq_len,
            )?;
        }
        self.input.clear();
        self.attempts = 0;
        self.closest = None;
        self.outcome = None;
        self.highlighted.clear();
        self.reset_remaining_ms = 0.0;
        self.display = generate_sequence(&mut self.rng, &self.config.alphabet, self.config.seq_len, &[])?;
        self.state = GameState::Init;
        log::info!("session: new game ({} themes)", self.targets.len());
        self.render();
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, theme: Option<Theme>, played: bool) -> Result<(), GameError> {
        self.state = GameState::Finished;
        self.outcome = Some(outcome);
        match (outcome, theme) {
            (Outcome::Won, Some(theme)) => {
                self.host.apply_theme(theme);
                self.active_theme = Some(theme);
            }
            (Outcome::Lost, _) => self.closest = None,
            (Outcome::Won, None) => {}
        }
        if played {
            let record = self.history.record(outcome == Outcome::Won);
            log::info!(
                "session: game {} {:?} after {} attempts (points {})",
                record.n,
                outcome,
                self.attempts,
                record.points
            );
        } else {
            log::info!("session: forced {:?}", outcome);
        }

        let mut events = Vec::new();
        self.animator.start(self.config.seq_len, &mut events);
        self.apply_animation(events, 0.0)
    }

    fn apply_animation(&mut self, events: Vec<AnimationEvent>, overshoot_ms: f64) -> Result<(), GameError> {
        for event in events {
            match event {
                AnimationEvent::Highlight(indices) => {
                    self.highlighted = indices;
                    self.render();
                }
                AnimationEvent::Finished => self.animation_done(overshoot_ms)?,
            }
        }
        Ok(())
    }

    fn animation_done(&mut self, overshoot_ms: f64) -> Result<(), GameError> {
        log::debug!("session: end animation complete");
        if self.config.reset_delay_ms > 0.0 {
            self.state = GameState::Resetting;
            self.reset_remaining_ms = self.config.reset_delay_ms;
            self.highlighted.clear();
            self.render();
            self.count_down_reset(overshoot_ms)
        } else {
            self.enter_init(true)
        }
    }

    fn count_down_reset(&mut self, dt_ms: f64) -> Result<(), GameError> {
        self.reset_remaining_ms -= dt_ms.max(0.0);
        if self.reset_remaining_ms <= 0.0 {
            self.enter_init(true)?;
        }
        Ok(())
    }

    fn render(&mut self) {
        let view = self.display_state();
        self.host.render(&view);
    }

    // -- Queries --

    /// Snapshot of everything the page draws.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            display_sequence: self.display.clone(),
            highlighted_indices: self.highlighted.clone(),
            active_theme: self.active_theme,
            game_state: self.state,
            outcome: self.outcome,
            matched_len: self.closest.map_or(0, |m| m.len),
            attempts: self.attempts,
            expanded: self.history.plot_visible()
                || matches!(self.state, GameState::Playing | GameState::Finished),
            hint: if self.config.debug {
                self.closest.and_then(|m| m.next)
            } else {
                None
            },
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn closest_match(&self) -> Option<&Match> {
        self.closest.as_ref()
    }

    pub fn input(&self) -> &[Symbol] {
        self.input.as_slice()
    }

    pub fn display_sequence(&self) -> &[Symbol] {
        &self.display
    }

    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn active_theme(&self) -> Option<Theme> {
        self.active_theme
    }

    pub fn targets(&self) -> &TargetMap {
        &self.targets
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn pending_timers(&self) -> usize {
        self.animator.pending_timers()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
