use std::time::Duration;

/// Format a reading with one decimal (e.g., "23.4").
pub fn format_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a reading together with its unit (e.g., "1013.2 hPa").
pub fn format_measure(value: f64, unit: &str) -> String {
    format!("{value:.1} {unit}")
}

/// Format a session duration into "Xh Xm" or "Xm Xs".
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let s = secs % 60;

    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m {s}s")
    }
}

/// Format a refresh interval for the footer (e.g., "1.0s" / "250ms").
pub fn format_interval(interval: Duration) -> String {
    let ms = interval.as_millis();
    if ms >= 1000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{ms}ms")
    }
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Braille spinner glyph for an in-flight job, advancing with elapsed time.
pub fn spinner_glyph(elapsed: Duration) -> char {
    let idx = (elapsed.as_millis() / 120) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}
