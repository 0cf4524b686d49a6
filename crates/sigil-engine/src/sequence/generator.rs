//! Random symbol sequences.
//!
//! Every generated sequence holds pairwise distinct symbols. A bias pool pulls
//! the draw toward particular symbols (the next symbol of the closest match)
//! and guarantees at least one of them appears.

use crate::catalog::{Symbol, Theme};
use crate::core::rng::Rng;
use super::targets::TargetMap;

/// Chance that a slot is drawn from the bias pool instead of the alphabet.
pub const BIAS_PROBABILITY: f64 = 0.5;

/// Rejected random draws per slot before falling back to an unbiased draw
/// from the symbols still unused.
pub const MAX_RANDOM_DRAWS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// More distinct symbols were requested than the alphabet holds.
    #[error("Cannot draw {length} distinct symbols from an alphabet of {available}")]
    AlphabetTooSmall {
        /// Requested sequence length.
        length: usize,
        /// Distinct symbols available.
        available: usize,
    },
}

/// Generate `length` distinct symbols from `alphabet`.
///
/// With a non-empty `bias_pool` each slot draws from the pool with
/// probability [`BIAS_PROBABILITY`], and the result is guaranteed to contain
/// at least one pool symbol. Pool symbols outside the alphabet are ignored.
pub fn generate_sequence(
    rng: &mut Rng,
    alphabet: &[Symbol],
    length: usize,
    bias_pool: &[Symbol],
) -> Result<Vec<Symbol>, SequenceError> {
    let alphabet = distinct(alphabet);
    if length > alphabet.len() {
        return Err(SequenceError::AlphabetTooSmall {
            length,
            available: alphabet.len(),
        });
    }
    let pool: Vec<Symbol> = distinct(bias_pool)
        .into_iter()
        .filter(|s| alphabet.contains(s))
        .collect();

    let mut seq = Vec::with_capacity(length);
    while seq.len() < length {
        let symbol = draw_slot(rng, &alphabet, &pool, &seq).ok_or(
            SequenceError::AlphabetTooSmall {
                length,
                available: alphabet.len(),
            },
        )?;
        seq.push(symbol);
    }

    // No pool symbol made it in: every pool symbol is unused, so any of them
    // can overwrite a random slot without breaking distinctness.
    if length > 0 && !pool.is_empty() && !seq.iter().any(|s| pool.contains(s)) {
        let slot = rng.next_int(length as u32) as usize;
        if let Some(&forced) = rng.pick(&pool) {
            seq[slot] = forced;
        }
    }

    debug_assert!(is_distinct(&seq), "generated sequence repeats a symbol: {:?}", seq);
    Ok(seq)
}

/// Fresh target sequence for every theme, each drawn independently.
/// No uniqueness is enforced across themes.
pub fn theme_sequences(
    rng: &mut Rng,
    alphabet: &[Symbol],
    themes: &[Theme],
    length: usize,
) -> Result<TargetMap, SequenceError> {
    let mut map = TargetMap::new();
    for &theme in themes {
        map.insert(theme, generate_sequence(rng, alphabet, length, &[])?);
    }
    Ok(map)
}

fn draw_slot(rng: &mut Rng, alphabet: &[Symbol], pool: &[Symbol], taken: &[Symbol]) -> Option<Symbol> {
    for _ in 0..MAX_RANDOM_DRAWS {
        let source = if !pool.is_empty() && rng.chance(BIAS_PROBABILITY) {
            pool
        } else {
            alphabet
        };
        if let Some(&candidate) = rng.pick(source) {
            if !taken.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    let remaining: Vec<Symbol> = alphabet.iter().copied().filter(|s| !taken.contains(s)).collect();
    rng.pick(&remaining).copied()
}

fn distinct(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(symbols.len());
    for &s in symbols {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}

fn is_distinct(symbols: &[Symbol]) -> bool {
    symbols
        .iter()
        .enumerate()
        .all(|(i, s)| !symbols[i + 1..].contains(s))
}
