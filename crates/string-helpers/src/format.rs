const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

// Calendar-free units: a month is 30 days and a year is 12 of those.
const WORD_UNITS: [(&str, u64); 6] = [
    ("year", 360 * SECONDS_PER_DAY),
    ("month", 30 * SECONDS_PER_DAY),
    ("day", SECONDS_PER_DAY),
    ("hour", SECONDS_PER_HOUR),
    ("minute", SECONDS_PER_MINUTE),
    ("second", 1),
];

const DECIMAL_UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// `HH:MM:SS`; hours keep growing past 99.
pub fn pretty_time(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// "1 month, 2 days and 3 seconds". Anything under a second (negative and NaN
/// included) is "0 seconds"; fractional seconds are dropped.
pub fn pretty_seconds_words(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "0 seconds".to_string();
    }

    let mut remaining = seconds as u64;
    let mut parts = Vec::new();
    for (name, unit_seconds) in WORD_UNITS {
        let count = remaining / unit_seconds;
        remaining %= unit_seconds;
        match count {
            0 => {}
            1 => parts.push(format!("1 {name}")),
            n => parts.push(format!("{n} {name}s")),
        }
    }

    match parts.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => "0 seconds".to_string(),
    }
}

/// Whichever of the binary (`KiB`) and decimal (`KB`) renderings is shorter,
/// binary on a tie.
pub fn pretty_bytes(bytes: u64) -> String {
    let binary = render_bytes(bytes, 1024.0, &BINARY_UNITS);
    let decimal = render_bytes(bytes, 1000.0, &DECIMAL_UNITS);
    if decimal.len() < binary.len() {
        decimal
    } else {
        binary
    }
}

fn render_bytes(bytes: u64, base: f64, units: &[&str]) -> String {
    if bytes == 1 {
        return "1 Byte".to_string();
    }
    let mut scaled = bytes as f64;
    if scaled < base {
        return format!("{bytes} Bytes");
    }

    // Step up while the one-decimal rendering would reach the base, so
    // 999_999 bytes is "1 MB" and not "1000 KB".
    let mut unit = 0;
    scaled /= base;
    while unit + 1 < units.len() && (scaled * 10.0).round() / 10.0 >= base {
        scaled /= base;
        unit += 1;
    }

    format!("{} {}", collapse_whole(scaled), units[unit])
}

fn collapse_whole(value: f64) -> String {
    let mut rendered = format!("{value:.1}");
    if rendered.ends_with(".0") {
        rendered.truncate(rendered.len() - 2);
    }
    rendered
}
