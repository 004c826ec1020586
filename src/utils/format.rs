/// Longest bar label shown before truncation
const MAX_LABEL_CHARS: usize = 10;

/// XP amounts are displayed in byte units: `B`, `kB`, `MB`.
pub fn format_xp(amount: i64) -> String {
    let value = amount as f64;
    if amount >= 1_000_000 {
        format!("{:.1} MB", value / 1_000_000.0)
    } else if amount >= 1_000 {
        format!("{:.1} kB", value / 1_000.0)
    } else {
        format!("{} B", amount)
    }
}

/// Axis label for an event: the last path segment, truncated.
pub fn short_label(label: &str) -> String {
    let name = label.rsplit('/').next().unwrap_or_default();
    if name.is_empty() {
        return "Unknown".to_string();
    }
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
