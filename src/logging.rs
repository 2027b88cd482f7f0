use std::io::Write;

use crate::policy::Verdict;

/// Initialize stderr logging for advisory messages (version shortfalls,
/// probe failures). Warn level by default; `RUST_LOG`-style tuning is not
/// needed for a single-shot wrapper.
pub fn init() {
    let _ = simplelog::SimpleLogger::init(
        log::LevelFilter::Warn,
        simplelog::Config::default(),
    );
}

/// Append a verdict record to ~/.local/share/pm-gate/verdicts.log as one
/// JSON object per line.
/// Best-effort: failures are silently ignored (logging must never block the
/// wrapper).
pub fn log_verdict(command: &str, verdict: &Verdict) {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/pm-gate");
    let _ = std::fs::create_dir_all(&log_dir);

    let log_path = log_dir.join("verdicts.log");
    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };

    let cmd_truncated: String = command.chars().take(200).collect();
    let record = serde_json::json!({
        "ts": timestamp_now(),
        "verdict": verdict.as_str(),
        "command": cmd_truncated,
        "reason": verdict.reason(),
    });

    let _ = writeln!(file, "{record}");
}

/// Simple UTC timestamp without external deps.
fn timestamp_now() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let rem = secs % 86400;
    let h = rem / 3600;
    let m = (rem % 3600) / 60;
    let s = rem % 60;
    let (year, month, day) = epoch_days_to_date(secs / 86400);
    format!("{year:04}-{month:02}-{day:02}T{h:02}:{m:02}:{s:02}Z")
}

/// Convert days since Unix epoch to (year, month, day).
fn epoch_days_to_date(days: u64) -> (u64, u64, u64) {
    // Civil calendar from days algorithm (Howard Hinnant)
    let z = days + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
