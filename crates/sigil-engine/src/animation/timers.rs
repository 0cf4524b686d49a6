//! Virtual timer queue.
//!
//! Mirrors the browser's `setInterval`/`setTimeout` pair on a clock the host
//! advances explicitly. Every handle ever issued is remembered until
//! `cancel_all`, so teardown can clear them without knowing which already
//! fired.

/// Handle for a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u32);

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    due_ms: f64,
    /// `Some` for repeating timers.
    period_ms: Option<f64>,
    payload: T,
}

/// Timers ordered by due time, then by registration order.
#[derive(Debug)]
pub struct TimerQueue<T: Copy> {
    now_ms: f64,
    next_id: u32,
    timers: Vec<Timer<T>>,
    issued: Vec<TimerId>,
}

impl<T: Copy> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 1,
            timers: Vec::new(),
            issued: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Fire `payload` every `period_ms`, first at `now + period_ms`.
    pub fn set_interval(&mut self, period_ms: f64, payload: T) -> TimerId {
        self.register(period_ms, Some(period_ms), payload)
    }

    /// Fire `payload` once at `now + delay_ms`.
    pub fn set_timeout(&mut self, delay_ms: f64, payload: T) -> TimerId {
        self.register(delay_ms, None, payload)
    }

    fn register(&mut self, delay_ms: f64, period_ms: Option<f64>, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            period_ms,
            payload,
        });
        self.issued.push(id);
        id
    }

    /// Stop a timer. Returns false when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.timers.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.timers.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel every handle issued since the last `cancel_all`, fired or not.
    /// Returns how many timers were actually still pending.
    pub fn cancel_all(&mut self) -> usize {
        let issued = std::mem::take(&mut self.issued);
        issued.into_iter().filter(|&id| self.cancel(id)).count()
    }

    /// Pop the earliest timer due at or before `until_ms` and move the clock
    /// to its due time. Repeating timers are rescheduled, one-shots removed.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<(TimerId, T)> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)))
            .map(|(idx, _)| idx)?;

        let Timer { id, due_ms, period_ms, payload } = self.timers[idx].clone();
        self.now_ms = self.now_ms.max(due_ms);
        match period_ms {
            // Zero periods would fire forever within one window.
            Some(period) if period > 0.0 => self.timers[idx].due_ms = due_ms + period,
            _ => {
                self.timers.remove(idx);
            }
        }
        Some((id, payload))
    }

    /// Move the clock forward without firing anything. Never goes backwards.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Handles issued since the last `cancel_all`.
    pub fn issued(&self) -> &[TimerId] {
        &self.issued
    }
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
