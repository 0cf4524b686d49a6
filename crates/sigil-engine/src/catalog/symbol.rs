use serde::{Deserialize, Serialize};

/// Alchemical glyphs the player can click.
/// Purely identifiers: rendering lives on the JavaScript side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
    Gold,
    Salt,
    Mercury,
    Moon,
    Silver,
    Vinegar,
    SulfuricAcid1,
    SulfuricAcid2,
    Wax,
    Oil,
}

impl Symbol {
    /// Full catalog in declaration order.
    pub const ALL: [Symbol; 10] = [
        Symbol::Gold,
        Symbol::Salt,
        Symbol::Mercury,
        Symbol::Moon,
        Symbol::Silver,
        Symbol::Vinegar,
        Symbol::SulfuricAcid1,
        Symbol::SulfuricAcid2,
        Symbol::Wax,
        Symbol::Oil,
    ];

    /// Name used by the page (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Gold => "gold",
            Symbol::Salt => "salt",
            Symbol::Mercury => "mercury",
            Symbol::Moon => "moon",
            Symbol::Silver => "silver",
            Symbol::Vinegar => "vinegar",
            Symbol::SulfuricAcid1 => "sulfuricAcid1",
            Symbol::SulfuricAcid2 => "sulfuricAcid2",
            Symbol::Wax => "wax",
            Symbol::Oil => "oil",
        }
    }

    pub fn from_name(name: &str) -> Option<Symbol> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Stable numeric code for the event wire format.
    pub fn code(self) -> u32 {
        self as u32
    }
}
