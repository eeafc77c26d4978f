//! Simulate command implementation.
//!
//! Drives the clock by calling `tick` directly, so a full day of sessions
//! finishes instantly. Simulated runs never ring the bell.

use crate::cli::args::{OutputFormat, SimulateArgs};
use crate::cli::commands::Context;
use crate::clock::{SessionClock, SessionCompleted, SilentSink};
use crate::error::ClockError;
use crate::output::{format_completion_pretty, format_simulation_json, format_snapshot_pretty};

/// Result of a simulated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Ticks delivered
    pub ticks: u64,
    /// Completions along with the tick number that produced them
    pub events: Vec<(u64, SessionCompleted)>,
}

/// Tick `clock` until a limit is hit, restarting it after every completion.
///
/// With no limits, runs one full cycle of work sessions and breaks.
pub fn run_simulation(
    clock: &mut SessionClock,
    max_ticks: Option<u64>,
    max_completions: Option<u32>,
) -> Simulation {
    let max_completions = match (max_ticks, max_completions) {
        (None, None) => Some(clock.config().sessions_until_long_break.saturating_mul(2)),
        (_, limit) => limit,
    };

    let mut sim = Simulation {
        ticks: 0,
        events: Vec::new(),
    };

    clock.start();
    loop {
        if max_ticks.is_some_and(|max| sim.ticks >= max) {
            break;
        }
        if max_completions.is_some_and(|max| sim.events.len() >= max as usize) {
            break;
        }

        sim.ticks += 1;
        if let Some(event) = clock.tick() {
            sim.events.push((sim.ticks, event));
            clock.start();
        }
    }

    sim
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub fn simulate(ctx: &Context, args: &SimulateArgs) -> Result<String, ClockError> {
    let mut clock = ctx.build_clock(Box::new(SilentSink))?;
    for _ in 0..args.skip {
        clock.skip();
    }

    let sim = run_simulation(&mut clock, args.ticks, args.completions);
    tracing::info!(ticks = sim.ticks, completions = sim.events.len(), "simulation finished");
    let snapshot = clock.snapshot();

    match ctx.format {
        OutputFormat::Json => {
            let events: Vec<SessionCompleted> = sim.events.iter().map(|(_, e)| *e).collect();
            format_simulation_json(sim.ticks, &events, &snapshot)
        }
        OutputFormat::Pretty => {
            let mut output: Vec<String> = sim
                .events
                .iter()
                .map(|(tick, event)| format!("[tick {tick:>6}] {}", format_completion_pretty(event)))
                .collect();
            if !output.is_empty() {
                output.push(String::new());
            }
            output.push(format_snapshot_pretty(&snapshot));
            Ok(output.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionConfig, SessionType};

    fn make_clock(cycle: u32) -> SessionClock {
        let config = SessionConfig {
            work_duration_seconds: 10,
            short_break_duration_seconds: 2,
            long_break_duration_seconds: 5,
            sessions_until_long_break: cycle,
            sound_enabled: true,
        };
        SessionClock::new(config, Box::new(SilentSink)).unwrap()
    }

    #[test]
    fn test_default_runs_one_cycle() {
        let mut clock = make_clock(2);
        let sim = run_simulation(&mut clock, None, None);

        let types: Vec<SessionType> = sim.events.iter().map(|(_, e)| e.previous_type).collect();
        assert_eq!(
            types,
            vec![
                SessionType::Work,
                SessionType::ShortBreak,
                SessionType::Work,
                SessionType::LongBreak
            ]
        );
        assert_eq!(sim.ticks, 10 + 2 + 10 + 5);
        assert_eq!(sim.events[0].0, 10);
        assert_eq!(clock.session_type(), SessionType::Work);
        assert!(clock.is_running());
    }

    #[test]
    fn test_tick_limit() {
        let mut clock = make_clock(4);
        let sim = run_simulation(&mut clock, Some(7), None);
        assert_eq!(sim.ticks, 7);
        assert!(sim.events.is_empty());
        assert_eq!(clock.remaining_seconds(), 3);
    }

    #[test]
    fn test_first_limit_wins() {
        let mut clock = make_clock(4);
        let sim = run_simulation(&mut clock, Some(1000), Some(1));
        assert_eq!(sim.ticks, 10);
        assert_eq!(sim.events.len(), 1);

        let mut clock = make_clock(4);
        let sim = run_simulation(&mut clock, Some(11), Some(5));
        assert_eq!(sim.ticks, 11);
        assert_eq!(sim.events.len(), 1);
    }
}
