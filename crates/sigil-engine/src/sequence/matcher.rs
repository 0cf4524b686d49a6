//! Prefix matching of the rolling input against the theme targets.
//!
//! A theme matches when, starting at the first input position holding the
//! target's first symbol, the rest of the input is exactly a prefix of the
//! target. Any mismatch before the input ends discards the theme entirely.

use serde::Serialize;
use crate::catalog::{Symbol, Theme};
use super::targets::TargetMap;

/// A partial (or complete) alignment between the input and one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub theme: Theme,
    /// Input index where the target's first symbol was found.
    pub from: usize,
    /// Number of target symbols matched, at least 1.
    pub len: usize,
    /// Next target symbol still to click, `None` once the target is complete.
    pub next: Option<Symbol>,
}

impl Match {
    /// The whole target has been entered.
    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }
}

/// Align `input` against one theme's target.
pub fn match_target(input: &[Symbol], theme: Theme, target: &[Symbol]) -> Option<Match> {
    let first = target.first()?;
    let from = input.iter().position(|s| s == first)?;
    let tail = &input[from..];
    if tail.len() > target.len() || tail.iter().zip(target).any(|(a, b)| a != b) {
        return None;
    }
    let len = tail.len();
    Some(Match {
        theme,
        from,
        len,
        next: target.get(len).copied(),
    })
}

/// All themes that currently match, in target map order.
pub fn find_matches(input: &[Symbol], targets: &TargetMap) -> Vec<Match> {
    targets
        .iter()
        .filter_map(|(theme, target)| match_target(input, theme, target))
        .collect()
}

/// Longest match; the first one found wins ties.
pub fn best_match(matches: &[Match]) -> Option<Match> {
    let mut best: Option<Match> = None;
    for m in matches {
        match best {
            Some(b) if b.len >= m.len => {}
            _ => best = Some(*m),
        }
    }
    best
}
