//! Reveal Timer
//!
//! The pause between submitting and showing results only exists so a host UI
//! can display a progress indicator. Results are already computed when the
//! timer starts; the timer only decides when `Computing` becomes `Complete`.

use crate::wizard::{SubmissionId, WizardController};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Cell::new(Instant::now()) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Host-owned delay before results are revealed
///
/// Owned by whatever view shows the progress indicator. When that view goes
/// away it must call [`cancel`](Self::cancel) so the wizard is not left in
/// `Computing`. A timer only ever finishes the submission it was started
/// for; after a reset and resubmit it is stale and does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimer {
    deadline: Instant,
    submission: SubmissionId,
}

impl RevealTimer {
    pub fn start<C: Clock + ?Sized>(clock: &C, delay: Duration, submission: SubmissionId) -> Self {
        Self { deadline: clock.now() + delay, submission }
    }

    pub fn submission(&self) -> SubmissionId {
        self.submission
    }

    pub fn remaining<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        self.deadline.saturating_duration_since(clock.now())
    }

    pub fn is_elapsed<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        clock.now() >= self.deadline
    }

    /// Finish computing if the delay has passed; returns whether it did
    pub fn poll<C: Clock + ?Sized>(&self, clock: &C, wizard: &mut WizardController) -> bool {
        self.is_elapsed(clock) && wizard.finish_computing_for(self.submission)
    }

    /// Release the timer early, revealing results immediately
    pub fn cancel(self, wizard: &mut WizardController) -> bool {
        tracing::debug!("Reveal timer cancelled");
        wizard.finish_computing_for(self.submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardState;

    fn submitted() -> (WizardController, SubmissionId) {
        let mut wizard = WizardController::new();
        while wizard.advance() {}
        let id = wizard.submit().expect("on last step");
        (wizard, id)
    }

    #[test]
    fn test_poll_waits_for_deadline() {
        let clock = ManualClock::new();
        let (mut wizard, id) = submitted();
        let timer = RevealTimer::start(&clock, Duration::from_millis(1500), id);

        clock.advance(Duration::from_millis(1000));
        assert!(!timer.poll(&clock, &mut wizard));
        assert_eq!(wizard.state(), WizardState::Computing);
        assert_eq!(timer.remaining(&clock), Duration::from_millis(500));

        clock.advance(Duration::from_millis(500));
        assert!(timer.poll(&clock, &mut wizard));
        assert_eq!(wizard.state(), WizardState::Complete);
        assert_eq!(timer.remaining(&clock), Duration::ZERO);
    }

    #[test]
    fn test_cancel_never_leaves_computing() {
        let clock = ManualClock::new();
        let (mut wizard, id) = submitted();
        let timer = RevealTimer::start(&clock, Duration::from_secs(60), id);

        assert!(timer.cancel(&mut wizard));
        assert_eq!(wizard.state(), WizardState::Complete);
    }

    #[test]
    fn test_delay_does_not_change_results() {
        let clock = ManualClock::new();

        let (mut immediate, _) = submitted();
        immediate.finish_computing();

        let (mut delayed, id) = submitted();
        let timer = RevealTimer::start(&clock, Duration::from_millis(2000), id);
        clock.advance(Duration::from_millis(2500));
        timer.poll(&clock, &mut delayed);

        assert_eq!(immediate.assessment(), delayed.assessment());
    }

    #[test]
    fn test_poll_after_complete_is_noop() {
        let clock = ManualClock::new();
        let (mut wizard, id) = submitted();
        let timer = RevealTimer::start(&clock, Duration::ZERO, id);
        assert!(timer.poll(&clock, &mut wizard));
        assert!(!timer.poll(&clock, &mut wizard));
    }

    #[test]
    fn test_stale_timer_ignores_later_submission() {
        let clock = ManualClock::new();
        let (mut wizard, first) = submitted();
        let stale = RevealTimer::start(&clock, Duration::from_millis(100), first);

        // Host reveals early, then the user starts over and submits again
        assert!(wizard.finish_computing());
        assert!(wizard.reset());
        while wizard.advance() {}
        let second = wizard.submit().expect("on last step");
        let current = RevealTimer::start(&clock, Duration::from_millis(1500), second);

        clock.advance(Duration::from_millis(200));
        assert!(!stale.poll(&clock, &mut wizard));
        assert!(!stale.cancel(&mut wizard));
        assert_eq!(wizard.state(), WizardState::Computing);

        clock.advance(Duration::from_millis(1300));
        assert!(current.poll(&clock, &mut wizard));
        assert_eq!(wizard.state(), WizardState::Complete);
    }
}
