//! Render-ready models for the dashboard: metric text, chart geometry, table rows.
//!
//! Nothing here touches a UI toolkit; the desktop app paints these models and
//! the CLI prints them.

pub mod chart;
pub mod table;

/// Formats a count with comma thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
