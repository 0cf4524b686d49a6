use crate::catalog::{Symbol, Theme};

/// Secret target sequence per theme, in catalog order.
///
/// Order matters: it is the tie-break order when two themes match equally
/// far, so entries are kept in a `Vec` rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMap {
    entries: Vec<(Theme, Vec<Symbol>)>,
}

impl TargetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a theme's target. Re-inserting a theme replaces its sequence in
    /// place and keeps its original position.
    pub fn insert(&mut self, theme: Theme, sequence: Vec<Symbol>) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == theme) {
            entry.1 = sequence;
        } else {
            self.entries.push((theme, sequence));
        }
    }

    /// Builder form of `insert`.
    pub fn with(mut self, theme: Theme, sequence: Vec<Symbol>) -> Self {
        self.insert(theme, sequence);
        self
    }

    pub fn get(&self, theme: Theme) -> Option<&[Symbol]> {
        self.entries
            .iter()
            .find(|(t, _)| *t == theme)
            .map(|(_, seq)| seq.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Theme, &[Symbol])> {
        self.entries.iter().map(|(t, seq)| (*t, seq.as_slice()))
    }

    pub fn themes(&self) -> impl Iterator<Item = Theme> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    /// Every symbol used by any target, first occurrence order, no repeats.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut out: Vec<Symbol> = Vec::new();
        for (_, seq) in &self.entries {
            for s in seq {
                if !out.contains(s) {
                    out.push(*s);
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
