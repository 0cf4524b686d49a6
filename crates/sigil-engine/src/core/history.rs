use serde::Serialize;

/// One finished game. `points` is a running score: +1 per win, -1 per loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub won: bool,
    pub points: i32,
    /// 1-based game number.
    pub n: u32,
}

/// Results of every game finished in this page session.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    records: Vec<GameRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, continuing the running score from the last game.
    pub fn record(&mut self, won: bool) -> GameRecord {
        let (points, n) = self.records.last().map_or((0, 0), |last| (last.points, last.n));
        let record = GameRecord {
            won,
            points: points + if won { 1 } else { -1 },
            n: n + 1,
        };
        self.records.push(record);
        record
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&GameRecord> {
        self.records.last()
    }

    pub fn wins(&self) -> usize {
        self.records.iter().filter(|r| r.won).count()
    }

    /// The score plot appears once the player has won twice.
    pub fn plot_visible(&self) -> bool {
        self.wins() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_score() {
        let mut history = GameHistory::new();
        history.record(false);
        history.record(true);
        let last = history.record(true);
        assert_eq!(last, GameRecord { won: true, points: 1, n: 3 });
        assert_eq!(history.records()[0].points, -1);
    }

    #[test]
    fn plot_after_two_wins() {
        let mut history = GameHistory::new();
        history.record(true);
        history.record(false);
        assert!(!history.plot_visible());
        history.record(true);
        assert!(history.plot_visible());
        assert_eq!(history.wins(), 2);
    }
}
