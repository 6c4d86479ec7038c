pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{property_card, recent_rail};
pub use layouts::desktop::desktop_layout;

/// Formats a monthly price with the rupee sign and Indian digit grouping:
/// last three digits, then pairs ("₹12,34,567").
pub fn format_price(amount: i64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let head_bytes = head.as_bytes();
    for (i, b) in head_bytes.iter().enumerate() {
        grouped.push(*b as char);
        let remaining = head_bytes.len() - i - 1;
        if remaining > 0 && remaining % 2 == 0 {
            grouped.push(',');
        }
    }

    format!("₹{grouped},{tail}")
}
