//! Formatting helpers for presenting prices and ratings.

use time::OffsetDateTime;

/// Vietnamese price display: `.` thousands separator, trailing `đ`.
pub fn format_price(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.push('đ');
    grouped
}

/// Shortest decimal form: `5`, `4.8`.
pub fn format_rating(value: f32) -> String {
    format!("{value}")
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
