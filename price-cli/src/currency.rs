//! Display helpers for rupee amounts.

/// Formats a rupee amount with comma thousands separators and the currency
/// sign, e.g. `₹1,234,567`.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_inr_groups_by_thousands() {
        assert_eq!(format_inr(1_234_567), "₹1,234,567");
        assert_eq!(format_inr(100_000), "₹100,000");
    }

    #[test]
    fn format_inr_leaves_short_amounts_ungrouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn format_inr_handles_exact_group_boundaries() {
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(1_000_000), "₹1,000,000");
    }
}
