//! Human-readable rendering of crack times and full estimation results.

const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_630_000.0;
const YEAR: f64 = 31_557_600.0;
const CENTURY: f64 = 100.0 * YEAR;

/// Render a crack time in seconds as a human-readable bucketed string, e.g.
/// `"instant"`, `"3 hours"`, `"centuries"`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "infinite".to_string();
    }
    if seconds < 1.0 {
        return "less than a second".to_string();
    }
    if seconds < MINUTE {
        return pluralize(seconds, "second");
    }
    if seconds < HOUR {
        return pluralize(seconds / MINUTE, "minute");
    }
    if seconds < DAY {
        return pluralize(seconds / HOUR, "hour");
    }
    if seconds < MONTH {
        return pluralize(seconds / DAY, "day");
    }
    if seconds < YEAR {
        return pluralize(seconds / MONTH, "month");
    }
    if seconds < CENTURY {
        return pluralize(seconds / YEAR, "year");
    }
    let years = seconds / YEAR;
    if years < 1_000_000.0 {
        format!("{:.0} centuries", years / 100.0)
    } else if years < 1_000_000_000.0 {
        format!("{:.0} million years", years / 1_000_000.0)
    } else {
        format!("{:.0} billion years", years / 1_000_000_000.0)
    }
}

fn pluralize(count: f64, unit: &str) -> String {
    let rounded = count.round();
    if (rounded - 1.0).abs() < f64::EPSILON {
        format!("1 {unit}")
    } else {
        format!("{rounded:.0} {unit}s")
    }
}

/// `"instant"` for a zero-guess (empty) password, else [`format_time`].
pub fn format_time_or_instant(guesses: u64, seconds: f64) -> String {
    if guesses == 0 {
        "instant".to_string()
    } else {
        format_time(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds() {
        assert_eq!(format_time(0.4), "less than a second");
        assert_eq!(format_time(1.0), "1 second");
        assert_eq!(format_time(5.0), "5 seconds");
    }

    #[test]
    fn formats_minutes_hours_days() {
        assert_eq!(format_time(90.0), "2 minutes");
        assert_eq!(format_time(7_200.0), "2 hours");
        assert_eq!(format_time(2.0 * DAY), "2 days");
    }

    #[test]
    fn formats_infinite() {
        assert_eq!(format_time(f64::INFINITY), "infinite");
    }

    #[test]
    fn formats_instant_for_empty_password() {
        assert_eq!(format_time_or_instant(0, 0.0), "instant");
    }

    #[test]
    fn formats_centuries_for_long_times() {
        let rendered = format_time(1000.0 * YEAR);
        assert!(rendered.contains("centuries"));
    }
}
