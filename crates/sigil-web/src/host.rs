use sigil_engine::{encode_changes, DisplayState, GameEvent, Host, Theme};
use web_sys::HtmlElement;

/// Host backed by the page: themes go onto `document.body`'s class list,
/// renders become wire events plus a JSON snapshot for the page script.
pub struct WebHost {
    /// `None` when running outside a browser document.
    body: Option<HtmlElement>,
    events: Vec<GameEvent>,
    last_view: Option<DisplayState>,
    view_json: String,
}

impl WebHost {
    /// Bind to the current document's body.
    pub fn attach() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if body.is_none() {
            log::warn!("web host: no document body, themes will not be applied");
        }
        Self::with_body(body)
    }

    /// Host with no document. Events and snapshots still work.
    pub fn detached() -> Self {
        Self::with_body(None)
    }

    fn with_body(body: Option<HtmlElement>) -> Self {
        Self {
            body,
            events: Vec::new(),
            last_view: None,
            view_json: String::from("{}"),
        }
    }

    /// Events accumulated since the last `clear_events`.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Latest display state as JSON.
    pub fn view_json(&self) -> &str {
        &self.view_json
    }
}

impl Host for WebHost {
    fn apply_theme(&mut self, theme: Theme) {
        let Some(body) = &self.body else {
            return;
        };
        let classes = body.class_list();
        for class in Theme::ALL.iter().filter_map(|t| t.css_class()) {
            if let Err(err) = classes.remove_1(class) {
                log::warn!("web host: removing class {} failed: {:?}", class, err);
            }
        }
        if let Some(class) = theme.css_class() {
            if let Err(err) = classes.add_1(class) {
                log::warn!("web host: adding class {} failed: {:?}", class, err);
            }
        }
        log::debug!("web host: applied theme {:?}", theme);
    }

    fn render(&mut self, view: &DisplayState) {
        encode_changes(self.last_view.as_ref(), view, &mut self.events);
        match serde_json::to_string(view) {
            Ok(json) => self.view_json = json,
            Err(err) => log::error!("web host: display state not serializable: {}", err),
        }
        self.last_view = Some(view.clone());
    }
}
