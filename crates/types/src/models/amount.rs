//! Raw token amounts represented as strings to preserve precision

/// Raw integer token amount represented as a string
///
/// On-chain amounts routinely exceed u64/u128 range, so the value is kept as a
/// decimal digit string and only converted when a display form is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAmount(pub String);

impl RawAmount {
	/// Create a new amount from a digit string
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string is a non-empty run of digits
	pub fn validate(&self) -> Result<(), String> {
		if self.0.is_empty() {
			return Err("amount cannot be empty".to_string());
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err("amount must contain only digits".to_string());
		}

		Ok(())
	}

	/// Format the raw amount as a decimal string using the token's precision
	///
	/// `1500000` with 6 decimals becomes `1.5`; trailing fractional zeros are
	/// trimmed and a whole number carries no decimal point. Non-numeric
	/// amounts format as `0` (deserialization rejects them earlier).
	pub fn format_units(&self, decimals: u8) -> String {
		if self.validate().is_err() {
			return "0".to_string();
		}

		let digits = self.0.trim_start_matches('0');
		let digits = if digits.is_empty() { "0" } else { digits };

		let scale = decimals as usize;
		if scale == 0 {
			return digits.to_string();
		}

		// Left-pad so there is always at least one integer digit
		let padded = if digits.len() <= scale {
			format!("{}{}", "0".repeat(scale - digits.len() + 1), digits)
		} else {
			digits.to_string()
		};

		let split = padded.len() - scale;
		let int_part = &padded[..split];
		let frac_part = padded[split..].trim_end_matches('0');

		if frac_part.is_empty() {
			int_part.to_string()
		} else {
			format!("{}.{}", int_part, frac_part)
		}
	}

	/// Convert to a floating-point number of whole token units
	///
	/// Lossy for very large amounts; intended for USD valuation and rate
	/// arithmetic only, never for on-chain values.
	pub fn to_units_f64(&self, decimals: u8) -> f64 {
		self.format_units(decimals).parse().unwrap_or(0.0)
	}
}

impl std::fmt::Display for RawAmount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for RawAmount {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for RawAmount {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for RawAmount {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for RawAmount {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

// Custom Serde implementation to serialize/deserialize as string
impl serde::Serialize for RawAmount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for RawAmount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		let amount = Self(value);
		amount.validate().map_err(serde::de::Error::custom)?;
		Ok(amount)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_raw_amount_creation() {
		let val = RawAmount::new("1000000000000000000".to_string());
		assert_eq!(val.as_str(), "1000000000000000000");
	}

	#[test]
	fn test_raw_amount_validation() {
		assert!(RawAmount::from("1234567890").validate().is_ok());
		assert!(RawAmount::from("abc123").validate().is_err());
		assert!(RawAmount::from("").validate().is_err());
	}

	#[test]
	fn test_raw_amount_is_zero() {
		assert!(RawAmount::from("0").is_zero());
		assert!(RawAmount::from("000").is_zero());
		assert!(!RawAmount::from("1").is_zero());
		// An empty string is invalid, not zero
		assert!(!RawAmount::from("").is_zero());
	}

	#[test]
	fn test_format_units_whole_number() {
		let val = RawAmount::from("1000000000000000000");
		assert_eq!(val.format_units(18), "1");
	}

	#[test]
	fn test_format_units_fractional() {
		let val = RawAmount::from("1500000");
		assert_eq!(val.format_units(6), "1.5");

		let val = RawAmount::from("98000000");
		assert_eq!(val.format_units(6), "98");
	}

	#[test]
	fn test_format_units_below_one() {
		let val = RawAmount::from("100000000000000");
		assert_eq!(val.format_units(18), "0.0001");
	}

	#[test]
	fn test_format_units_zero_decimals() {
		let val = RawAmount::from("42");
		assert_eq!(val.format_units(0), "42");
	}

	#[test]
	fn test_format_units_zero_value() {
		let val = RawAmount::from("0");
		assert_eq!(val.format_units(18), "0");
		assert_eq!(val.format_units(0), "0");
	}

	#[test]
	fn test_format_units_trims_trailing_zeros() {
		let val = RawAmount::from("1230000000000000000");
		assert_eq!(val.format_units(18), "1.23");
	}

	#[test]
	fn test_format_units_invalid_amount() {
		let val = RawAmount::from("not-a-number");
		assert_eq!(val.format_units(18), "0");
	}

	#[test]
	fn test_to_units_f64() {
		let val = RawAmount::from("2500000");
		assert!((val.to_units_f64(6) - 2.5).abs() < 1e-12);
	}

	#[test]
	fn test_serde_round_trip() {
		let val = RawAmount::from("1000000000000000000");
		let json = serde_json::to_string(&val).unwrap();
		assert_eq!(json, "\"1000000000000000000\"");

		let back: RawAmount = serde_json::from_str(&json).unwrap();
		assert_eq!(back, val);
	}

	#[test]
	fn test_serde_rejects_non_numeric() {
		assert!(serde_json::from_str::<RawAmount>("\"abc123\"").is_err());
		assert!(serde_json::from_str::<RawAmount>("\"\"").is_err());
	}
}
