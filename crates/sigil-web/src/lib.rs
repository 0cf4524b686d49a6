//! `#[wasm_bindgen]` exports for the page.
//!
//! Typical page loop:
//!
//! ```text
//! game_init_with_config(json)        once, after the glyph buttons exist
//! game_click(name)                   on every glyph click
//! game_tick(dt_ms)                   from requestAnimationFrame
//! get_game_events_ptr/len            read 4-float events, then
//! clear_game_events()
//! game_teardown()                    when the header is removed
//! ```

pub mod host;
pub mod runner;

pub use host::WebHost;
pub use runner::GameRunner;

use std::cell::RefCell;
use sigil_engine::GameConfig;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls made before `game_init` are logged
/// and dropped.
fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("sigil: game not initialized, call game_init() first");
                None
            }
        }
    })
}

fn start(mut config: GameConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if config.debug { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    // Every page load plays a different game.
    config.seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;

    let runner = GameRunner::new(config, WebHost::attach()).map_err(to_js)?;
    RUNNER.with(|cell| {
        if let Some(mut old) = cell.borrow_mut().replace(runner) {
            old.teardown();
        }
    });
    log::info!("sigil: initialized");
    Ok(())
}

fn to_js(err: sigil_engine::GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn game_init() -> Result<(), JsValue> {
    start(GameConfig::default())
}

/// Initialize from a partial JSON config; missing fields take defaults.
#[wasm_bindgen]
pub fn game_init_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(to_js)?;
    start(config)
}

/// Returns true when the click changed the game.
#[wasm_bindgen]
pub fn game_click(name: &str) -> bool {
    with_runner(|r| r.click(name)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn game_tick(dt_ms: f64) {
    with_runner(|r| r.tick(dt_ms));
}

#[wasm_bindgen]
pub fn game_teardown() {
    with_runner(|r| r.teardown());
}

// ---- Debug triggers ----

#[wasm_bindgen]
pub fn game_force_new() -> Result<(), JsValue> {
    with_runner(|r| r.force_new().map_err(to_js)).unwrap_or(Ok(()))
}

#[wasm_bindgen]
pub fn game_force_loss() -> Result<(), JsValue> {
    with_runner(|r| r.force_loss().map_err(to_js)).unwrap_or(Ok(()))
}

/// Returns the CSS class of the theme that was forced, empty for plain.
#[wasm_bindgen]
pub fn game_force_win() -> Result<String, JsValue> {
    with_runner(|r| {
        r.force_win()
            .map(|theme| theme.css_class().unwrap_or_default().to_string())
            .map_err(to_js)
    })
    .unwrap_or_else(|| Ok(String::new()))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_display_state() -> String {
    with_runner(|r| r.display_state_json()).unwrap_or_else(|| String::from("{}"))
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn clear_game_events() {
    with_runner(|r| r.clear_game_events());
}

/// Glyph names accepted by `game_click`, comma separated.
#[wasm_bindgen]
pub fn get_symbol_names() -> String {
    with_runner(|r| r.symbol_names().join(",")).unwrap_or_default()
}
