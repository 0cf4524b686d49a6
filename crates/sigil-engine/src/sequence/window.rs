use crate::catalog::Symbol;

/// Bounded FIFO of the most recent clicks. Pushing past capacity evicts the
/// oldest symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputWindow {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl InputWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a click, dropping the oldest one beyond capacity.
    pub fn push(&mut self, symbol: Symbol) {
        if self.capacity == 0 {
            return;
        }
        if self.symbols.len() == self.capacity {
            self.symbols.remove(0);
        }
        self.symbols.push(symbol);
    }

    /// Replace the contents, keeping only the trailing `capacity` symbols.
    pub fn fill(&mut self, symbols: &[Symbol]) {
        self.symbols.clear();
        let skip = symbols.len().saturating_sub(self.capacity);
        self.symbols.extend_from_slice(&symbols[skip..]);
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
