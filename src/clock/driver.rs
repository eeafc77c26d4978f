//! Wall-clock scheduling for the session clock.
//!
//! The clock itself only counts ticks. `IntervalDriver` turns elapsed
//! `Instant`s into ticks, and [`drive`] keeps the two in step: the driver is
//! armed while the clock runs and halted as soon as it stops.

use std::time::{Duration, Instant};

use super::session::SessionCompleted;
use super::timer::SessionClock;

/// Default tick period.
pub const TICK: Duration = Duration::from_secs(1);

/// Counts whole periods elapsed since it was armed.
#[derive(Debug, Clone)]
pub struct IntervalDriver {
    period: Duration,
    anchor: Option<Instant>,
}

impl Default for IntervalDriver {
    fn default() -> Self {
        Self::new(TICK)
    }
}

impl IntervalDriver {
    /// Create a halted driver with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            anchor: None,
        }
    }

    /// Start counting periods from `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.anchor.is_none() {
            self.anchor = Some(now);
        }
    }

    /// Stop counting. Any partial period is dropped.
    pub fn halt(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of whole periods elapsed since the last poll (or arming).
    #[allow(clippy::cast_possible_truncation)]
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let period = self.period.as_nanos().max(1);
        let due = now.saturating_duration_since(anchor).as_nanos() / period;
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.anchor = Some(anchor + self.period * due);
        due
    }

    /// Time left until the next period boundary, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.anchor
            .map(|anchor| (anchor + self.period).saturating_duration_since(now))
    }
}

/// Deliver every tick owed to `clock` at `now`.
///
/// Arms the driver when the clock has just started and halts it once the
/// clock stops, so paused clocks never receive ticks. Completions are
/// returned in order.
pub fn drive(
    clock: &mut SessionClock,
    driver: &mut IntervalDriver,
    now: Instant,
) -> Vec<SessionCompleted> {
    if !clock.is_running() {
        driver.halt();
        return Vec::new();
    }
    if !driver.is_armed() {
        driver.arm(now);
        return Vec::new();
    }

    let due = driver.poll(now);
    if due > 1 {
        tracing::trace!(due, "catching up ticks");
    }

    let mut events = Vec::new();
    for _ in 0..due {
        if let Some(event) = clock.tick() {
            events.push(event);
        }
        if !clock.is_running() {
            driver.halt();
            break;
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::config::SessionConfig;
    use crate::clock::notify::SilentSink;
    use crate::clock::session::SessionType;

    fn clock(work: u32) -> SessionClock {
        let config = SessionConfig {
            work_duration_seconds: work,
            short_break_duration_seconds: 2,
            long_break_duration_seconds: 3,
            sessions_until_long_break: 4,
            sound_enabled: false,
        };
        SessionClock::new(config, Box::new(SilentSink)).unwrap()
    }

    #[test]
    fn test_poll_counts_whole_periods() {
        let t0 = Instant::now();
        let mut driver = IntervalDriver::default();
        assert_eq!(driver.poll(t0 + Duration::from_secs(5)), 0);

        driver.arm(t0);
        assert_eq!(driver.poll(t0 + Duration::from_millis(900)), 0);
        assert_eq!(driver.poll(t0 + Duration::from_millis(1100)), 1);
        assert_eq!(driver.poll(t0 + Duration::from_millis(1900)), 0);
        assert_eq!(driver.poll(t0 + Duration::from_millis(4000)), 3);
    }

    #[test]
    fn test_until_next() {
        let t0 = Instant::now();
        let mut driver = IntervalDriver::default();
        assert!(driver.until_next(t0).is_none());
        driver.arm(t0);
        assert_eq!(
            driver.until_next(t0 + Duration::from_millis(300)),
            Some(Duration::from_millis(700))
        );
    }

    #[test]
    fn test_drive_arms_then_ticks() {
        let t0 = Instant::now();
        let mut clock = clock(60);
        let mut driver = IntervalDriver::default();

        assert!(drive(&mut clock, &mut driver, t0).is_empty());
        assert!(!driver.is_armed());

        clock.start();
        drive(&mut clock, &mut driver, t0);
        assert!(driver.is_armed());
        assert_eq!(clock.remaining_seconds(), 60);

        drive(&mut clock, &mut driver, t0 + Duration::from_secs(3));
        assert_eq!(clock.remaining_seconds(), 57);
    }

    #[test]
    fn test_drive_halts_on_pause() {
        let t0 = Instant::now();
        let mut clock = clock(60);
        let mut driver = IntervalDriver::default();
        clock.start();
        drive(&mut clock, &mut driver, t0);
        drive(&mut clock, &mut driver, t0 + Duration::from_secs(2));

        clock.pause();
        drive(&mut clock, &mut driver, t0 + Duration::from_secs(30));
        assert!(!driver.is_armed());
        assert_eq!(clock.remaining_seconds(), 58);

        // Resuming starts a fresh period from the resume instant.
        clock.start();
        let resumed = t0 + Duration::from_secs(40);
        drive(&mut clock, &mut driver, resumed);
        drive(&mut clock, &mut driver, resumed + Duration::from_millis(500));
        assert_eq!(clock.remaining_seconds(), 58);
        drive(&mut clock, &mut driver, resumed + Duration::from_secs(1));
        assert_eq!(clock.remaining_seconds(), 57);
    }

    #[test]
    fn test_drive_stops_at_completion() {
        let t0 = Instant::now();
        let mut clock = clock(5);
        let mut driver = IntervalDriver::default();
        clock.start();
        drive(&mut clock, &mut driver, t0);

        // The loop lagged well past the end of the session.
        let events = drive(&mut clock, &mut driver, t0 + Duration::from_secs(20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].previous_type, SessionType::Work);
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.remaining_seconds(), 2);
        assert!(!clock.is_running());
        assert!(!driver.is_armed());
    }
}
