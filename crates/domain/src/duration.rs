//! Human-readable formatting of elapsed durations.

use std::fmt::Write;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Format a count of elapsed seconds as a compact `1d 2h 3m 4s` breakdown.
///
/// Units cascade: the days component appears only when non-zero, and each
/// smaller unit appears when it is non-zero or any larger unit is shown, so
/// `3600` renders as `1h 0m 0s` rather than `1h`. The seconds component is
/// always present. Non-positive input renders as `0s`.
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }

    let days = seconds / SECS_PER_DAY;
    let hours = (seconds % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;

    let mut out = String::new();
    if days > 0 {
        let _ = write!(out, "{days}d ");
    }
    if hours > 0 || days > 0 {
        let _ = write!(out, "{hours}h ");
    }
    if minutes > 0 || hours > 0 || days > 0 {
        let _ = write!(out, "{minutes}m ");
    }
    let _ = write!(out, "{secs}s");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_zero_for_zero_input() {
        assert_eq!(format_duration(0), "0s");
    }

    #[test]
    fn should_render_zero_for_negative_input() {
        assert_eq!(format_duration(-5), "0s");
    }

    #[test]
    fn should_render_seconds_only_below_a_minute() {
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn should_pad_seconds_once_minutes_are_present() {
        assert_eq!(format_duration(60), "1m 0s");
    }

    #[test]
    fn should_pad_subordinate_units_once_hours_are_present() {
        assert_eq!(format_duration(3_600), "1h 0m 0s");
    }

    #[test]
    fn should_render_all_units_when_each_is_non_zero() {
        assert_eq!(format_duration(3_661), "1h 1m 1s");
        assert_eq!(format_duration(90_061), "1d 1h 1m 1s");
    }

    #[test]
    fn should_not_wrap_for_multi_year_durations() {
        // Ten years of seconds stays well inside i64.
        assert_eq!(format_duration(315_360_000), "3650d 0h 0m 0s");
    }

    #[test]
    fn should_keep_components_below_their_modulus() {
        for seconds in [1, 59, 60, 3_599, 3_600, 86_399, 86_400, 90_061, 999_999] {
            let rendered = format_duration(seconds);
            for part in rendered.split_whitespace() {
                let (value, unit) = part.split_at(part.len() - 1);
                let value: i64 = value.parse().unwrap();
                match unit {
                    "h" => assert!(value < 24, "{rendered}: hours overflow"),
                    "m" | "s" => assert!(value < 60, "{rendered}: {unit} overflow"),
                    "d" => {}
                    other => panic!("unexpected unit {other}"),
                }
            }
        }
    }
}
