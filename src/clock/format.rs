//! Pure formatting and parsing helpers for presenting the clock.

/// Format whole seconds as MM:SS. Minutes are not capped at 59.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Fraction of a session already elapsed, between 0.0 and 1.0.
#[must_use]
pub fn progress(duration_seconds: u32, remaining_seconds: u32) -> f64 {
    if duration_seconds == 0 {
        return 1.0;
    }
    let elapsed = duration_seconds.saturating_sub(remaining_seconds);
    f64::from(elapsed) / f64::from(duration_seconds)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a number of seconds as a human-readable string.
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    let total_minutes = seconds / 60;

    if total_minutes < 1 {
        return format!("{seconds} second{}", plural(seconds));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// Parse a duration string like "25m", "1h30m", "90s" into seconds.
///
/// A bare number, or a trailing number without a unit, counts as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u32>() {
        return minutes.checked_mul(60).filter(|&secs| secs > 0);
    }

    let mut total: u32 = 0;
    let mut current = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current.push(c);
            continue;
        }
        if current.is_empty() {
            return None;
        }
        let num: u32 = current.parse().ok()?;
        current.clear();

        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total = total.checked_add(num.checked_mul(unit)?)?;
    }

    if !current.is_empty() {
        let num: u32 = current.parse().ok()?;
        total = total.checked_add(num.checked_mul(60)?)?;
    }

    (total > 0).then_some(total)
}
