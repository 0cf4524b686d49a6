use serde::{Deserialize, Serialize};

/// Page background themes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// The stock page look; carries no style class.
    Plain,
    GreenLine,
    GreenLeaf,
}

impl Theme {
    /// Catalog order. Also the tie-break order for equally long matches.
    pub const ALL: [Theme; 3] = [Theme::Plain, Theme::GreenLine, Theme::GreenLeaf];

    /// Body class that activates this theme, `None` for the plain page.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Theme::Plain => None,
            Theme::GreenLine => Some("_bg-green-line"),
            Theme::GreenLeaf => Some("_bg-green-leaf"),
        }
    }

    /// Position in `Theme::ALL`, used as the wire code.
    pub fn index(self) -> usize {
        match self {
            Theme::Plain => 0,
            Theme::GreenLine => 1,
            Theme::GreenLeaf => 2,
        }
    }
}
