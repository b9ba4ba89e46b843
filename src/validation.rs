// ✅ Validation - Form input checks, applied in a fixed order
//
// 1. amount > 0
// 2. date <= today
// 3. category belongs to the entry type

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::ledger::{round_to_cents, EntryType};

/// Parse the raw amount field. Blank, non-numeric and non-finite input is rejected.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;

    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(amount)
}

/// Parse the raw date field (`YYYY-MM-DD`, as sent by a date input)
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Amount must still be finite and positive after rounding to cents
pub fn check_amount(amount: f64) -> Result<(), ValidationError> {
    let rounded = round_to_cents(amount);
    if !rounded.is_finite() {
        return Err(ValidationError::InvalidAmount);
    }
    if rounded > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveAmount)
    }
}

pub fn check_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        Err(ValidationError::FutureDate)
    } else {
        Ok(())
    }
}

pub fn check_category(entry_type: EntryType, category: &str) -> Result<(), ValidationError> {
    if entry_type.has_category(category) {
        Ok(())
    } else {
        Err(ValidationError::UnknownCategory {
            entry_type,
            category: category.to_string(),
        })
    }
}

/// Run every check; the first failure wins
pub fn validate_entry(
    entry_type: EntryType,
    category: &str,
    date: NaiveDate,
    amount: f64,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    check_amount(amount)?;
    check_date(date, today)?;
    check_category(entry_type, category)?;
    Ok(())
}
