// File: crates/script-logistics/src/timefmt.rs
// Summary: Elapsed-time strings (`hh:mm:ss.cc` / `mm:ss.cc`) and the timing lines built on them.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Format `t` seconds as `hh:mm:ss.cc` when `full_str` is set or `t` is at
/// least one hour, else `mm:ss.cc`. Centiseconds are rounded; negative and
/// NaN inputs read as zero.
pub fn seconds_to_timestring(t: f64, full_str: bool) -> String {
    let total_cs = (t.max(0.0) * 100.0).round() as u64;
    let cs = total_cs % 100;
    let total_s = total_cs / 100;
    let (h, m, s) = (total_s / 3600, (total_s / 60) % 60, total_s % 60);
    if full_str || h >= 1 {
        format!("{h:02}:{m:02}:{s:02}.{cs:02}")
    } else {
        format!("{m:02}:{s:02}.{cs:02}")
    }
}

pub fn format_duration(d: Duration, full_str: bool) -> String {
    seconds_to_timestring(d.as_secs_f64(), full_str)
}

/// `<prefix>time required: <t>` for the time elapsed since `start`.
pub fn print_time_required(out: &mut impl Write, start: Instant, prefix: &str, full_str: bool) -> io::Result<()> {
    writeln!(out, "{prefix}time required: {}", format_duration(start.elapsed(), full_str))
}

pub fn print_total_time(out: &mut impl Write, start: Instant, full_str: bool) -> io::Result<()> {
    writeln!(out, "runtime: {}", format_duration(start.elapsed(), full_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_or_more_forces_full_form() {
        assert_eq!(seconds_to_timestring(3661.23, false), "01:01:01.23");
        assert_eq!(seconds_to_timestring(36_000.0, false), "10:00:00.00");
    }

    #[test]
    fn compact_form_under_an_hour() {
        assert_eq!(seconds_to_timestring(5.5, false), "00:05.50");
        assert_eq!(seconds_to_timestring(61.0, false), "01:01.00");
        assert_eq!(seconds_to_timestring(0.0, false), "00:00.00");
    }

    #[test]
    fn full_flag_and_rounding() {
        assert_eq!(seconds_to_timestring(5.5, true), "00:00:05.50");
        assert_eq!(seconds_to_timestring(59.999, false), "01:00.00");
        assert_eq!(seconds_to_timestring(3599.999, false), "01:00:00.00");
        assert_eq!(seconds_to_timestring(-3.0, false), "00:00.00");
        assert_eq!(seconds_to_timestring(f64::NAN, false), "00:00.00");
    }

    #[test]
    fn timing_lines() {
        let mut out = Vec::new();
        print_time_required(&mut out, Instant::now(), "   ", false).unwrap();
        print_total_time(&mut out, Instant::now(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("   time required: 00:0"), "{text}");
        assert!(lines[1].starts_with("runtime: 00:00:0"), "{text}");
        assert_eq!(format_duration(Duration::from_millis(1_250), false), "00:01.25");
    }
}
