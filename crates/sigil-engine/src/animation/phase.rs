//! Highlight patterns for a single animation phase.

/// How a phase moves the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Toggle between every index lit and none lit.
    BlinkAll,
    /// Walk one lit index left to right. With `ping_pong` the walk bounces at
    /// the ends, going dark for one tick before each reversal.
    BlinkEach { ping_pong: bool },
}

/// One step of the pipeline: pattern, number of cycles and tick speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpec {
    pub kind: PhaseKind,
    pub cycles: u32,
    pub speed_ms: f64,
}

impl PhaseSpec {
    pub fn blink_all(cycles: u32, speed_ms: f64) -> Self {
        Self { kind: PhaseKind::BlinkAll, cycles, speed_ms }
    }

    pub fn blink_each(cycles: u32, speed_ms: f64) -> Self {
        Self { kind: PhaseKind::BlinkEach { ping_pong: false }, cycles, speed_ms }
    }

    pub fn ping_pong(cycles: u32, speed_ms: f64) -> Self {
        Self { kind: PhaseKind::BlinkEach { ping_pong: true }, cycles, speed_ms }
    }

    /// Time until the phase resolves. Blink-all spends two ticks per cycle.
    pub fn duration_ms(&self) -> f64 {
        match self.kind {
            PhaseKind::BlinkAll => self.speed_ms * self.cycles as f64 * 2.0,
            PhaseKind::BlinkEach { .. } => self.speed_ms * self.cycles as f64,
        }
    }
}

/// Running highlight state of one phase over `size` indices.
#[derive(Debug, Clone)]
pub struct PhaseRun {
    kind: PhaseKind,
    size: usize,
    lit: bool,
    cursor: Option<usize>,
    step: isize,
    at_start: bool,
}

impl PhaseRun {
    pub fn new(spec: &PhaseSpec, size: usize) -> Self {
        Self {
            kind: spec.kind,
            size,
            lit: true,
            cursor: if size > 0 { Some(0) } else { None },
            step: 1,
            at_start: false,
        }
    }

    /// Highlight emitted as soon as the phase starts.
    pub fn initial(&self) -> Vec<usize> {
        match self.kind {
            PhaseKind::BlinkAll => (0..self.size).collect(),
            PhaseKind::BlinkEach { .. } => self.cursor.into_iter().collect(),
        }
    }

    /// Advance one tick and return the new highlight.
    pub fn tick(&mut self) -> Vec<usize> {
        if self.size == 0 {
            return Vec::new();
        }
        match self.kind {
            PhaseKind::BlinkAll => {
                self.lit = !self.lit;
                if self.lit {
                    (0..self.size).collect()
                } else {
                    Vec::new()
                }
            }
            PhaseKind::BlinkEach { ping_pong: false } => {
                let n = self.cursor.map_or(0, |n| (n + 1) % self.size);
                self.cursor = Some(n);
                vec![n]
            }
            PhaseKind::BlinkEach { ping_pong: true } => {
                self.cursor = self.bounce();
                self.cursor.into_iter().collect()
            }
        }
    }

    fn bounce(&mut self) -> Option<usize> {
        let last = self.size - 1;
        let Some(n) = self.cursor else {
            // Dark tick over: re-enter from the end we just left.
            return if self.at_start {
                self.step = 1;
                Some(0)
            } else {
                self.step = -1;
                Some(last)
            };
        };
        self.at_start = n == 0;
        let at_end = n == last;
        if (self.at_start && self.step < 0) || (at_end && self.step > 0) {
            None
        } else {
            Some((n as isize + self.step) as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(spec: PhaseSpec, size: usize, n: usize) -> Vec<Vec<usize>> {
        let mut run = PhaseRun::new(&spec, size);
        let mut out = vec![run.initial()];
        for _ in 0..n {
            out.push(run.tick());
        }
        out
    }

    #[test]
    fn durations() {
        assert_eq!(PhaseSpec::blink_all(2, 500.0).duration_ms(), 2000.0);
        assert_eq!(PhaseSpec::ping_pong(10, 500.0).duration_ms(), 5000.0);
        assert_eq!(PhaseSpec::blink_each(4, 125.0).duration_ms(), 500.0);
    }

    #[test]
    fn blink_all_toggles() {
        let seen = ticks(PhaseSpec::blink_all(2, 100.0), 3, 3);
        assert_eq!(seen, vec![vec![0, 1, 2], vec![], vec![0, 1, 2], vec![]]);
    }

    #[test]
    fn blink_each_wraps_around() {
        let seen = ticks(PhaseSpec::blink_each(4, 100.0), 3, 4);
        assert_eq!(seen, vec![vec![0], vec![1], vec![2], vec![0], vec![1]]);
    }

    #[test]
    fn ping_pong_bounces_with_dark_ticks() {
        let seen = ticks(PhaseSpec::ping_pong(10, 100.0), 3, 9);
        let expected: Vec<Vec<usize>> = vec![
            vec![0],
            vec![1],
            vec![2],
            vec![],
            vec![2],
            vec![1],
            vec![0],
            vec![],
            vec![0],
            vec![1],
        ];
        assert_eq!(seen, expected);
    }

    #[test]
    fn ping_pong_single_slot_blinks() {
        let seen = ticks(PhaseSpec::ping_pong(4, 100.0), 1, 4);
        assert_eq!(seen, vec![vec![0], vec![], vec![0], vec![], vec![0]]);
    }

    #[test]
    fn empty_size_stays_dark() {
        let seen = ticks(PhaseSpec::ping_pong(4, 100.0), 0, 2);
        assert!(seen.iter().all(|h| h.is_empty()));
    }
}
