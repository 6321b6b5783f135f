//! Human-readable rendering of byte counts and durations.

/// Unit letters for each power of 1024 above bytes.
const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count with a binary unit suffix, e.g. `"1.5 MB"`.
///
/// Values below 1024 are printed as whole bytes (`"512 B"`). Larger values
/// get one decimal place and the largest unit whose quotient is below 1024.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let (mut div, mut exp) = (UNIT, 0usize);
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, UNITS[exp])
}

/// Format a number of seconds as `"<d> days, <h> hours, <m> minutes, <s> seconds"`.
pub fn format_uptime(seconds: u64) -> String {
    const DAY: u64 = 24 * 3600;
    const HOUR: u64 = 3600;
    const MINUTE: u64 = 60;

    let days = seconds / DAY;
    let hours = (seconds % DAY) / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;

    format!("{days} days, {hours} hours, {minutes} minutes, {secs} seconds")
}
