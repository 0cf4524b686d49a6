//! Sequential phase pipeline.
//!
//! Each phase registers a repeating tick timer and a one-shot end timer. When
//! the end timer fires the tick timer is stopped and the next phase starts at
//! that same instant, so phases never overlap. After the last phase the
//! pipeline reports `Finished` exactly once.

use std::collections::VecDeque;
use super::phase::{PhaseRun, PhaseSpec};
use super::timers::{TimerId, TimerQueue};

/// Output of the animator, consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    /// New set of highlighted display indices.
    Highlight(Vec<usize>),
    /// The whole pipeline ran to completion.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Tick,
    End,
}

#[derive(Debug)]
struct ActivePhase {
    run: PhaseRun,
    tick: TimerId,
}

/// Runs the phase pipeline on its own virtual timer queue.
#[derive(Debug)]
pub struct Animator {
    pipeline: Vec<PhaseSpec>,
    pending: VecDeque<PhaseSpec>,
    current: Option<ActivePhase>,
    timers: TimerQueue<Signal>,
    size: usize,
    running: bool,
    /// Virtual time at which the last run reported `Finished`.
    finished_at_ms: Option<f64>,
}

impl Animator {
    pub fn new(pipeline: Vec<PhaseSpec>) -> Self {
        Self {
            pipeline,
            pending: VecDeque::new(),
            current: None,
            timers: TimerQueue::new(),
            size: 0,
            running: false,
            finished_at_ms: None,
        }
    }

    /// Four phases: slow blink-all, ping-pong sweep, fast blink-all, quick
    /// one-way sweep.
    pub fn standard_pipeline(base_speed_ms: f64) -> Vec<PhaseSpec> {
        vec![
            PhaseSpec::blink_all(2, base_speed_ms * 2.0),
            PhaseSpec::ping_pong(10, base_speed_ms * 2.0),
            PhaseSpec::blink_all(2, base_speed_ms),
            PhaseSpec::blink_each(4, base_speed_ms / 2.0),
        ]
    }

    pub fn with_standard_pipeline(base_speed_ms: f64) -> Self {
        Self::new(Self::standard_pipeline(base_speed_ms))
    }

    /// Total pipeline length in milliseconds.
    pub fn total_duration_ms(&self) -> f64 {
        self.pipeline.iter().map(PhaseSpec::duration_ms).sum()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current virtual time of the animation clock.
    pub fn now(&self) -> f64 {
        self.timers.now()
    }

    /// When the last completed run finished, `None` while running or after
    /// a cancel.
    pub fn finished_at(&self) -> Option<f64> {
        self.finished_at_ms
    }

    /// Start the pipeline over `size` highlight slots. A run in flight is
    /// cancelled first and never reports completion.
    pub fn start(&mut self, size: usize, out: &mut Vec<AnimationEvent>) {
        self.cancel_all();
        self.size = size;
        self.pending = self.pipeline.iter().copied().collect();
        self.running = true;
        log::debug!("animation: starting {} phases over {} slots", self.pending.len(), size);
        self.start_next_phase(out);
    }

    /// Move the virtual clock forward by `dt_ms`, firing due timers in order.
    pub fn advance(&mut self, dt_ms: f64, out: &mut Vec<AnimationEvent>) {
        let until = self.timers.now() + dt_ms.max(0.0);
        while self.running {
            let Some((_, signal)) = self.timers.pop_due(until) else {
                break;
            };
            match signal {
                Signal::Tick => {
                    if let Some(active) = self.current.as_mut() {
                        out.push(AnimationEvent::Highlight(active.run.tick()));
                    }
                }
                Signal::End => {
                    if let Some(active) = self.current.take() {
                        self.timers.cancel(active.tick);
                    }
                    self.start_next_phase(out);
                }
            }
        }
        self.timers.set_now(until);
    }

    /// Sole teardown primitive: cancel every timer handle issued for the
    /// current run and drop the run without reporting completion. Safe to
    /// call any number of times.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.timers.cancel_all();
        if self.running || cancelled > 0 {
            log::debug!("animation: cancelled {} pending timers", cancelled);
        }
        self.current = None;
        self.pending.clear();
        self.running = false;
        self.finished_at_ms = None;
        cancelled
    }

    /// Timers still registered on the queue.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    fn start_next_phase(&mut self, out: &mut Vec<AnimationEvent>) {
        let Some(spec) = self.pending.pop_front() else {
            self.running = false;
            self.finished_at_ms = Some(self.timers.now());
            out.push(AnimationEvent::Finished);
            return;
        };
        let run = PhaseRun::new(&spec, self.size);
        out.push(AnimationEvent::Highlight(run.initial()));
        let tick = self.timers.set_interval(spec.speed_ms, Signal::Tick);
        self.timers.set_timeout(spec.duration_ms(), Signal::End);
        self.current = Some(ActivePhase { run, tick });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_count(events: &[AnimationEvent]) -> usize {
        events.iter().filter(|e| **e == AnimationEvent::Finished).count()
    }

    #[test]
    fn standard_pipeline_duration() {
        let animator = Animator::with_standard_pipeline(250.0);
        // 2000 + 5000 + 1000 + 500
        assert_eq!(animator.total_duration_ms(), 8500.0);
    }

    #[test]
    fn finishes_once_after_full_duration() {
        let mut animator = Animator::with_standard_pipeline(250.0);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(8499.0, &mut events);
        assert_eq!(finished_count(&events), 0);
        assert!(animator.is_running());

        animator.advance(1.0, &mut events);
        assert_eq!(finished_count(&events), 1);
        assert!(!animator.is_running());
        assert_eq!(animator.pending_timers(), 0);

        animator.advance(10_000.0, &mut events);
        assert_eq!(finished_count(&events), 1);
    }

    #[test]
    fn small_steps_match_one_big_step() {
        let mut stepped = Animator::with_standard_pipeline(250.0);
        let mut a = Vec::new();
        stepped.start(3, &mut a);
        for _ in 0..600 {
            stepped.advance(16.0, &mut a);
        }

        let mut jumped = Animator::with_standard_pipeline(250.0);
        let mut b = Vec::new();
        jumped.start(3, &mut b);
        jumped.advance(9600.0, &mut b);

        assert_eq!(a, b);
        assert_eq!(finished_count(&a), 1);
    }

    #[test]
    fn first_phase_highlights() {
        let mut animator = Animator::new(vec![PhaseSpec::blink_all(2, 100.0)]);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(400.0, &mut events);
        let all = AnimationEvent::Highlight(vec![0, 1, 2]);
        let none = AnimationEvent::Highlight(vec![]);
        assert_eq!(
            events,
            vec![all.clone(), none.clone(), all.clone(), none, all, AnimationEvent::Finished]
        );
    }

    #[test]
    fn phases_run_back_to_back() {
        let mut animator = Animator::new(vec![
            PhaseSpec::blink_each(2, 100.0),
            PhaseSpec::blink_all(1, 50.0),
        ]);
        let mut events = Vec::new();
        animator.start(2, &mut events);
        animator.advance(300.0, &mut events);
        let h = |v: Vec<usize>| AnimationEvent::Highlight(v);
        assert_eq!(
            events,
            vec![
                h(vec![0]),
                h(vec![1]),
                // End at 200 fires after the tick due at the same instant.
                h(vec![0]),
                h(vec![0, 1]),
                h(vec![]),
                h(vec![0, 1]),
                AnimationEvent::Finished,
            ]
        );
    }

    #[test]
    fn cancel_mid_run_suppresses_everything() {
        let mut animator = Animator::with_standard_pipeline(250.0);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(3000.0, &mut events);
        let before = events.len();

        assert!(animator.cancel_all() > 0);
        animator.advance(20_000.0, &mut events);
        assert_eq!(events.len(), before);
        assert_eq!(finished_count(&events), 0);
        assert_eq!(animator.pending_timers(), 0);
    }

    #[test]
    fn cancel_is_idempotent_and_safe_after_completion() {
        let mut animator = Animator::with_standard_pipeline(250.0);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(9000.0, &mut events);
        assert_eq!(finished_count(&events), 1);

        assert_eq!(animator.cancel_all(), 0);
        assert_eq!(animator.cancel_all(), 0);
        animator.advance(1000.0, &mut events);
        assert_eq!(finished_count(&events), 1);
    }

    #[test]
    fn restart_cancels_previous_run() {
        let mut animator = Animator::with_standard_pipeline(250.0);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(4000.0, &mut events);
        animator.start(3, &mut events);
        animator.advance(8500.0, &mut events);
        assert_eq!(finished_count(&events), 1);
    }

    #[test]
    fn empty_pipeline_finishes_immediately() {
        let mut animator = Animator::new(Vec::new());
        let mut events = Vec::new();
        animator.start(3, &mut events);
        assert_eq!(events, vec![AnimationEvent::Finished]);
        assert!(!animator.is_running());
    }

    #[test]
    fn records_when_the_run_finished() {
        let mut animator = Animator::with_standard_pipeline(250.0);
        let mut events = Vec::new();
        animator.start(3, &mut events);
        animator.advance(5000.0, &mut events);
        assert_eq!(animator.finished_at(), None);
        animator.advance(4000.0, &mut events);
        assert_eq!(animator.finished_at(), Some(8500.0));
        assert_eq!(animator.now(), 9000.0);

        animator.cancel_all();
        assert_eq!(animator.finished_at(), None);
    }
}
