//! Formatting helpers shared by the report generators.

use core::fmt::Display;

/// Format an unsigned integer with comma thousands separators, e.g. `1234567` becomes `1,234,567`.
pub fn format_thousands(value: impl Display) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

pub const fn check_mark(value: bool) -> &'static str {
    if value { "✅" } else { "❌" }
}
