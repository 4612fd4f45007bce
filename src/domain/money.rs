use std::fmt;

/// Parse a user-supplied amount string into a positive, finite number.
/// Example: "50.00" -> 50.0, "12.5" -> 12.5
///
/// Rust's float parser accepts "inf" and "NaN", so finiteness is checked
/// explicitly; a ledger amount must also be strictly positive because
/// cash-flow direction lives in the transaction kind, not the sign.
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value: f64 = input.parse().map_err(|_| ParseAmountError::NotANumber)?;
    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    if value <= 0.0 {
        return Err(ParseAmountError::NotPositive);
    }

    Ok(value)
}

/// Round to two decimal places for display and conversion results.
/// Example: 12.345 -> 12.35
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount with two decimal places.
/// Example: 50.0 -> "50.00", 12.5 -> "12.50"
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    NotANumber,
    NotFinite,
    NotPositive,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is required"),
            ParseAmountError::NotANumber => write!(f, "amount must be a number"),
            ParseAmountError::NotFinite => write!(f, "amount must be finite"),
            ParseAmountError::NotPositive => write!(f, "amount must be positive"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
