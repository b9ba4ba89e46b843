// 📝 Entry Form - Validate, connect, append
//
// Shared by the income, expense and saving forms. One accepted submission
// appends exactly one row; resubmitting appends another.

use chrono::NaiveDate;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::connector::SheetConnector;
use crate::error::{EntryError, ValidationError};
use crate::ledger::{EntryType, LedgerRow};
use crate::validation::{
    check_amount, check_category, check_date, parse_amount, parse_date, validate_entry,
};

/// Form fields exactly as the browser sent them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntryForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
}

impl RawEntryForm {
    /// Blank form for a fresh view: today's date, first category, no amount
    pub fn blank(entry_type: EntryType, today: NaiveDate) -> Self {
        RawEntryForm {
            date: today.format("%Y-%m-%d").to_string(),
            category: entry_type
                .categories()
                .first()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            amount: String::new(),
        }
    }
}

/// A typed submission for one entry type
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySubmission {
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

impl EntrySubmission {
    /// Parse raw fields, applying the amount rule before the date is looked at
    pub fn parse(entry_type: EntryType, raw: &RawEntryForm, today: NaiveDate) -> Result<Self, ValidationError> {
        let amount = parse_amount(&raw.amount)?;
        check_amount(amount)?;

        let date = parse_date(&raw.date)?;
        check_date(date, today)?;

        let category = raw.category.trim().to_string();
        check_category(entry_type, &category)?;

        Ok(EntrySubmission {
            entry_type,
            date,
            category,
            amount,
        })
    }

    pub fn to_row(&self) -> LedgerRow {
        LedgerRow::new(self.entry_type, self.category.clone(), self.date, self.amount)
    }
}

/// Validate a typed submission and append it
pub fn submit_entry<C>(connector: &C, submission: &EntrySubmission, today: NaiveDate) -> Result<LedgerRow, EntryError>
where
    C: SheetConnector + ?Sized,
{
    validate_entry(
        submission.entry_type,
        &submission.category,
        submission.date,
        submission.amount,
        today,
    )?;

    let sheet = connector.open().map_err(EntryError::Connection)?;

    let row = submission.to_row();
    if let Err(e) = sheet.append_row(&row) {
        error!("Append to '{}' failed: {}", sheet.title(), e);
        return Err(EntryError::Append(e));
    }

    info!(
        "Appended {} row: {} {} {}",
        row.entry_type,
        row.category,
        row.date_string(),
        row.amount_string()
    );
    Ok(row)
}

/// Parse raw form fields, then submit
pub fn submit_form<C>(
    connector: &C,
    entry_type: EntryType,
    raw: &RawEntryForm,
    today: NaiveDate,
) -> Result<LedgerRow, EntryError>
where
    C: SheetConnector + ?Sized,
{
    let submission = EntrySubmission::parse(entry_type, raw, today)?;
    submit_entry(connector, &submission, today)
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingConnector;
    use super::*;
    use crate::error::ConnectorError;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn raw(date: &str, category: &str, amount: &str) -> RawEntryForm {
        RawEntryForm {
            date: date.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_salary_row_appended() {
        let connector = RecordingConnector::default();

        let row = submit_form(
            &connector,
            EntryType::Income,
            &raw("2024-01-10", "Salary", "1200.50"),
            today(),
        )
        .unwrap();

        assert_eq!(connector.appended(), vec![row.clone()]);
        assert_eq!(
            row.to_values(),
            vec![
                json!("income"),
                json!("Salary"),
                json!("2024-01-10"),
                json!(2024),
                json!(1200.5),
            ]
        );
    }

    #[test]
    fn test_zero_amount_today_rejected() {
        let connector = RecordingConnector::default();

        let err = submit_form(&connector, EntryType::Expense, &raw("2024-06-15", "Housing", "0"), today())
            .unwrap_err();

        assert_eq!(err.user_message(), "Amount must be greater than 0.");
        assert!(connector.appended().is_empty());
    }

    #[test]
    fn test_tomorrow_rejected() {
        let connector = RecordingConnector::default();

        let err = submit_form(&connector, EntryType::Expense, &raw("2024-06-16", "Housing", "50.00"), today())
            .unwrap_err();

        assert_eq!(err.user_message(), "Date cannot be in the future.");
        assert!(connector.appended().is_empty());
    }

    #[test]
    fn test_connector_failures_prevent_append() {
        let failures = [
            ConnectorError::Credentials("malformed key file".to_string()),
            ConnectorError::DriveAccess("HTTP 403 Forbidden".to_string()),
            ConnectorError::SpreadsheetNotFound("Expense-Tracker".to_string()),
            ConnectorError::Api("HTTP 500".to_string()),
        ];

        for failure in failures {
            let connector = RecordingConnector::failing_open(failure.clone());
            let err = submit_form(&connector, EntryType::Saving, &raw("2024-06-01", "Gold", "25"), today())
                .unwrap_err();

            assert_eq!(err, EntryError::Connection(failure));
            assert!(connector.appended().is_empty());
        }
    }

    #[test]
    fn test_append_failure_surfaced() {
        let connector = RecordingConnector::failing_append(ConnectorError::Api("quota exceeded".to_string()));

        let err = submit_form(&connector, EntryType::Saving, &raw("2024-06-01", "SIP", "25"), today())
            .unwrap_err();

        assert!(err
            .user_message()
            .starts_with("An error occurred while saving to Google Sheets:"));
    }

    #[test]
    fn test_resubmission_appends_duplicate() {
        let connector = RecordingConnector::default();
        let form = raw("2024-06-01", "Medical", "80");

        submit_form(&connector, EntryType::Expense, &form, today()).unwrap();
        submit_form(&connector, EntryType::Expense, &form, today()).unwrap();

        assert_eq!(connector.appended().len(), 2);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let connector = RecordingConnector::default();

        let err = submit_form(&connector, EntryType::Income, &raw("2024-06-01", "Lottery", "10"), today())
            .unwrap_err();

        assert!(err.is_validation());
        assert!(connector.appended().is_empty());
    }

    #[test]
    fn test_huge_amount_rejected() {
        let connector = RecordingConnector::default();

        let err = submit_form(&connector, EntryType::Income, &raw("2024-06-01", "Salary", "1e308"), today())
            .unwrap_err();

        assert_eq!(err, EntryError::Validation(ValidationError::InvalidAmount));
        assert!(connector.appended().is_empty());
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = RawEntryForm::blank(EntryType::Expense, today());
        assert_eq!(form.date, "2024-06-15");
        assert_eq!(form.category, "Housing");
        assert!(form.amount.is_empty());
    }
}
