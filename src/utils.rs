use chrono::{DateTime, Utc};

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Parses an RFC 3339 deadline. Malformed text is tolerated as "no deadline".
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formats a deadline as `YYYY-MM-DD HH:MM UTC`. Absent values render as
/// empty text; unparseable values fall back to the raw string.
pub fn format_utc(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    match parse_deadline(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => raw.to_string(),
    }
}

/// Compact badge text for a notify offset: `30m` under an hour, `12h` above.
pub fn format_offset(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h", minutes / 60)
    }
}

/// Parses alerts text like `"1h, 30m"` or bare `"60,720"` into positive
/// minute offsets. Malformed, non-positive, or oversized entries are skipped.
pub fn parse_offsets(text: &str) -> Vec<u32> {
    text.split(',')
        .filter_map(|entry| {
            let entry = entry.trim().to_lowercase();
            if entry.is_empty() {
                return None;
            }
            let (number, scale) = if let Some(rest) = entry.strip_suffix('h') {
                (rest.trim().to_string(), 60u32)
            } else if let Some(rest) = entry.strip_suffix('m') {
                (rest.trim().to_string(), 1)
            } else {
                (entry, 1)
            };
            number
                .parse::<u32>()
                .ok()
                .and_then(|n| n.checked_mul(scale))
        })
        .filter(|&minutes| minutes > 0)
        .collect()
}
