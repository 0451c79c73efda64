//! Display formatting shared by the snapshot builder and prompt composer.

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Formats a monetary amount as `$1,234,567`, rounded to whole units.
pub fn usd(amount: Decimal) -> String {
	let whole = amount.round().to_i128().unwrap_or_default();

	format!("${}", group_thousands(whole))
}

pub fn usd_f64(amount: f64) -> String {
	format!("${}", group_thousands(amount.round() as i128))
}

/// Formats a plain quantity with digit grouping, e.g. floor area.
pub fn grouped(amount: Decimal) -> String {
	group_thousands(amount.round().to_i128().unwrap_or_default())
}

/// Truncates to `max_chars` characters with a trailing ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}

	let truncated: String = text.chars().take(max_chars).collect();

	format!("{truncated}...")
}

fn group_thousands(value: i128) -> String {
	let negative = value < 0;
	let digits = value.unsigned_abs().to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}

		grouped.push(ch);
	}

	if negative { format!("-{grouped}") } else { grouped }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_digits() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(999), "999");
		assert_eq!(group_thousands(1_000), "1,000");
		assert_eq!(group_thousands(450_000), "450,000");
		assert_eq!(group_thousands(1_234_567), "1,234,567");
		assert_eq!(group_thousands(-4_200), "-4,200");
	}

	#[test]
	fn formats_usd() {
		assert_eq!(usd(Decimal::new(450_000, 0)), "$450,000");
		assert_eq!(usd(Decimal::new(179_950, 2)), "$1,800");
		assert_eq!(usd_f64(325_499.6), "$325,500");
	}

	#[test]
	fn previews_long_text() {
		assert_eq!(preview("short", 200), "short");

		let long = "x".repeat(210);
		let cut = preview(&long, 200);

		assert_eq!(cut.chars().count(), 203);
		assert!(cut.ends_with("..."));
	}
}
