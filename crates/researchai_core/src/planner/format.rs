//! Presentation helpers shared by every task view.
//!
//! # Responsibility
//! - Render durations and priority badges consistently across views.
//! - Parse shell/form duration input back into whole minutes.
//!
//! # Invariants
//! - All helpers are pure; same input, same output.
//! - Badge mapping is total: unknown priority labels fall back to the
//!   medium tag instead of erroring.

use crate::model::task::Priority;
use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m?)?\s*$").expect("valid duration regex")
});

/// Renders planned minutes as a compact `1h 30m` style label.
///
/// Zero segments are omitted (`60` -> `"1h"`, `45` -> `"45m"`). Zero input
/// renders `"0m"` so views never show an empty chip.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, 0) => "0m".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Badge tag for a typed priority.
///
/// The returned strings are the utility classes the web views attach to
/// priority chips.
pub fn color_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-500/20 text-red-400",
        Priority::Medium => "bg-yellow-500/20 text-yellow-400",
        Priority::Low => "bg-green-500/20 text-green-400",
    }
}

/// Badge tag for a priority label as it appears on the wire.
///
/// Unknown labels map to the medium tag.
pub fn priority_color_class(label: &str) -> &'static str {
    let priority = label.trim().parse().unwrap_or_default();
    color_class(priority)
}

/// Parses shell/form duration input like `90`, `45m`, `1h` or `1h 30m`.
///
/// Returns whole minutes. `None` for garbage, blank input and zero totals.
pub fn parse_duration(text: &str) -> Option<u32> {
    let caps = DURATION_RE.captures(text)?;
    if caps.get(1).is_none() && caps.get(2).is_none() {
        return None;
    }

    let hours: u32 = match caps.get(1) {
        Some(digits) => digits.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u32 = match caps.get(2) {
        Some(digits) => digits.as_str().parse().ok()?,
        None => 0,
    };

    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    if total == 0 {
        return None;
    }
    Some(total)
}
