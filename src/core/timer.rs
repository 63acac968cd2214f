//! Countdown timer state machine.
//!
//! The timer is a small phase machine: a main round counts down to zero
//! and, when auto-restart is enabled, optionally inserts a rest round
//! before reloading the main round. The status is a tagged variant so
//! impossible combinations (e.g. resting while idle) cannot be
//! represented.
//!
//! Every zero-crossing reports [`TickOutcome::chime`] so the UI can play
//! its audio cue; this includes rest-end, matching the observed product
//! behavior.

/// Which round is counting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Main,
    Rest,
}

/// Run status of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerStatus {
    /// Nothing to run: remaining is zero and no round is in progress.
    Idle,
    Running(TimerPhase),
    Paused(TimerPhase),
}

/// Result of advancing the clock by one second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A round just ended; the UI should play the chime once.
    pub chime: bool,
}

/// The countdown timer.
///
/// `remaining` stays within `[0, initial]` during a main round and
/// within `[0, rest_duration]` during a rest round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining: u32,
    initial: u32,
    rest_duration: u32,
    auto_restart: bool,
    status: TimerStatus,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining: 0,
            initial: 0,
            rest_duration: 0,
            auto_restart: false,
            status: TimerStatus::Idle,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, TimerStatus::Running(_))
    }

    pub fn is_resting(&self) -> bool {
        matches!(
            self.status,
            TimerStatus::Running(TimerPhase::Rest) | TimerStatus::Paused(TimerPhase::Rest)
        )
    }

    pub fn auto_restart(&self) -> bool {
        self.auto_restart
    }

    pub fn rest_duration(&self) -> u32 {
        self.rest_duration
    }

    pub fn set_auto_restart(&mut self, enabled: bool) {
        self.auto_restart = enabled;
    }

    pub fn set_rest_duration(&mut self, seconds: u32) {
        self.rest_duration = seconds;
    }

    /// Configure the round length from hour/minute/second fields.
    ///
    /// Each component is parsed independently; non-numeric or negative
    /// input counts as zero. The timer is left paused so the user
    /// starts it explicitly.
    pub fn set_time(&mut self, hours: &str, minutes: &str, seconds: &str) {
        let total =
            parse_component(hours) * 3600 + parse_component(minutes) * 60 + parse_component(seconds);
        self.initial = total;
        self.remaining = total;
        self.status = if total == 0 {
            TimerStatus::Idle
        } else {
            TimerStatus::Paused(TimerPhase::Main)
        };
    }

    /// Advance the clock by one second.
    ///
    /// Only meaningful while running; the caller's interval should not
    /// exist otherwise, but a stray tick in any other state is a no-op.
    pub fn tick(&mut self) -> TickOutcome {
        let TimerStatus::Running(phase) = self.status else {
            return TickOutcome::default();
        };
        if self.remaining == 0 {
            return TickOutcome::default();
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return TickOutcome::default();
        }

        // Zero-crossing: chime, then decide the next round.
        match phase {
            TimerPhase::Rest => {
                self.remaining = self.initial;
                self.status = if self.initial > 0 {
                    TimerStatus::Running(TimerPhase::Main)
                } else {
                    TimerStatus::Idle
                };
            }
            TimerPhase::Main => {
                if self.auto_restart && self.initial > 0 {
                    if self.rest_duration > 0 {
                        self.remaining = self.rest_duration;
                        self.status = TimerStatus::Running(TimerPhase::Rest);
                    } else {
                        self.remaining = self.initial;
                    }
                } else if self.initial > 0 {
                    self.status = TimerStatus::Paused(TimerPhase::Main);
                } else {
                    self.status = TimerStatus::Idle;
                }
            }
        }
        TickOutcome { chime: true }
    }

    /// Toggle between running and paused.
    ///
    /// When the previous round finished (`remaining == 0`) the main
    /// round is reloaded before resuming. A timer with nothing
    /// configured stays idle.
    pub fn start_pause(&mut self) {
        match self.status {
            TimerStatus::Running(phase) => {
                self.status = TimerStatus::Paused(phase);
            }
            TimerStatus::Paused(phase) => {
                if self.remaining == 0 {
                    self.remaining = self.initial;
                    self.status = TimerStatus::Running(TimerPhase::Main);
                } else {
                    self.status = TimerStatus::Running(phase);
                }
            }
            TimerStatus::Idle => {
                if self.initial > 0 {
                    self.remaining = self.initial;
                    self.status = TimerStatus::Running(TimerPhase::Main);
                }
            }
        }
    }

    /// Reload the configured round length and pause.
    pub fn reset(&mut self) {
        self.remaining = self.initial;
        self.status = if self.initial == 0 {
            TimerStatus::Idle
        } else {
            TimerStatus::Paused(TimerPhase::Main)
        };
    }

    /// Zero the clock without touching the configured round length.
    pub fn clear(&mut self) {
        self.remaining = 0;
        self.status = TimerStatus::Idle;
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one time component; anything unparsable or negative is zero.
fn parse_component(value: &str) -> u32 {
    value.trim().parse::<i64>().ok().map_or(0, |n| n.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_timer(h: &str, m: &str, s: &str) -> CountdownTimer {
        let mut timer = CountdownTimer::new();
        timer.set_time(h, m, s);
        timer.start_pause();
        timer
    }

    #[test]
    fn set_time_computes_total_seconds() {
        let mut timer = CountdownTimer::new();
        timer.set_time("0", "1", "30");
        assert_eq!(timer.initial(), 90);
        assert_eq!(timer.remaining(), 90);
        assert_eq!(timer.status(), TimerStatus::Paused(TimerPhase::Main));
    }

    #[test]
    fn set_time_treats_garbage_as_zero() {
        let mut timer = CountdownTimer::new();
        timer.set_time("abc", "-5", "45");
        assert_eq!(timer.initial(), 45);

        timer.set_time("", "x", "-1");
        assert_eq!(timer.initial(), 0);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn countdown_without_auto_restart_pauses_at_zero() {
        let mut timer = running_timer("0", "1", "30");
        let mut chimes = 0;
        for _ in 0..90 {
            if timer.tick().chime {
                chimes += 1;
            }
        }
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.status(), TimerStatus::Paused(TimerPhase::Main));
        assert_eq!(chimes, 1);
    }

    #[test]
    fn ticks_while_paused_are_no_ops() {
        let mut timer = CountdownTimer::new();
        timer.set_time("0", "0", "10");
        assert_eq!(timer.tick(), TickOutcome::default());
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn auto_restart_with_rest_enters_rest_round() {
        let mut timer = running_timer("0", "0", "3");
        timer.set_auto_restart(true);
        timer.set_rest_duration(5);

        for _ in 0..2 {
            assert!(!timer.tick().chime);
        }
        let outcome = timer.tick();
        assert!(outcome.chime);
        assert!(timer.is_resting());
        assert_eq!(timer.remaining(), 5);

        for _ in 0..4 {
            assert!(!timer.tick().chime);
        }
        let outcome = timer.tick();
        assert!(outcome.chime, "rest-end also chimes");
        assert!(!timer.is_resting());
        assert_eq!(timer.remaining(), 3);
        assert_eq!(timer.status(), TimerStatus::Running(TimerPhase::Main));
    }

    #[test]
    fn auto_restart_without_rest_reloads_immediately() {
        let mut timer = running_timer("0", "0", "2");
        timer.set_auto_restart(true);

        timer.tick();
        let outcome = timer.tick();
        assert!(outcome.chime);
        assert_eq!(timer.remaining(), 2);
        assert_eq!(timer.status(), TimerStatus::Running(TimerPhase::Main));
    }

    #[test]
    fn start_pause_reloads_a_finished_round() {
        let mut timer = running_timer("0", "0", "1");
        timer.tick();
        assert_eq!(timer.remaining(), 0);

        timer.start_pause();
        assert_eq!(timer.remaining(), 1);
        assert!(timer.is_running());
    }

    #[test]
    fn start_pause_is_a_no_op_when_nothing_is_configured() {
        let mut timer = CountdownTimer::new();
        timer.start_pause();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn reset_reloads_and_pauses() {
        let mut timer = running_timer("0", "0", "30");
        for _ in 0..10 {
            timer.tick();
        }
        timer.reset();
        assert_eq!(timer.remaining(), 30);
        assert_eq!(timer.status(), TimerStatus::Paused(TimerPhase::Main));
    }

    #[test]
    fn reset_during_rest_clears_the_rest_round() {
        let mut timer = running_timer("0", "0", "1");
        timer.set_auto_restart(true);
        timer.set_rest_duration(4);
        timer.tick();
        assert!(timer.is_resting());

        timer.reset();
        assert!(!timer.is_resting());
        assert_eq!(timer.remaining(), 1);
    }

    #[test]
    fn clear_zeroes_the_clock_but_keeps_initial() {
        let mut timer = running_timer("0", "0", "30");
        timer.clear();
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.initial(), 30);
        assert_eq!(timer.status(), TimerStatus::Idle);

        // Start still works: it reloads from initial.
        timer.start_pause();
        assert_eq!(timer.remaining(), 30);
        assert!(timer.is_running());
    }

    #[test]
    fn remaining_never_leaves_bounds() {
        let mut timer = running_timer("0", "0", "5");
        timer.set_auto_restart(true);
        timer.set_rest_duration(2);
        for _ in 0..50 {
            timer.tick();
            let cap = if timer.is_resting() {
                timer.rest_duration()
            } else {
                timer.initial()
            };
            assert!(timer.remaining() <= cap);
        }
    }
}
