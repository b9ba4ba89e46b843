// 📒 Ledger - Entry types, category lists and the appended row
//
// One row per accepted submission: [type, category, date, year, amount]

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;

// ============================================================================
// CATEGORY LISTS
// ============================================================================

const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Business/Side Hustle",
    "Investments",
    "Passive Income",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Food & Groceries",
    "Transportation",
    "Utilities",
    "Medical",
    "Education",
    "Shopping",
    "Subscriptions",
    "Loan & Debt Payments",
];

const SAVING_CATEGORIES: &[&str] = &[
    "Emergency Fund",
    "Fixed Deposits",
    "Liquid Cash",
    "Gold",
    "Property & Land",
    "Stocks & Shares",
    "Mutual Funds",
    "SIP",
];

// ============================================================================
// ENTRY TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
    /// Money set aside
    Saving,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [EntryType::Income, EntryType::Expense, EntryType::Saving];

    /// Label written to the sheet's type column
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
            EntryType::Saving => "saving",
        }
    }

    /// Fixed category options for this entry type
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            EntryType::Income => INCOME_CATEGORIES,
            EntryType::Expense => EXPENSE_CATEGORIES,
            EntryType::Saving => SAVING_CATEGORIES,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntryType::Income => "Income",
            EntryType::Expense => "Expense",
            EntryType::Saving => "Saving",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntryType::Income => "➕",
            EntryType::Expense => "➖",
            EntryType::Saving => "💰",
        }
    }

    /// Form heading and submit button label
    pub fn title(&self) -> &'static str {
        match self {
            EntryType::Income => "Add Income",
            EntryType::Expense => "Add Expense",
            EntryType::Saving => "Add Saving",
        }
    }

    /// Label of the category select
    pub fn category_label(&self) -> &'static str {
        match self {
            EntryType::Income => "Income Source",
            EntryType::Expense => "Expense Type",
            EntryType::Saving => "Saving Type",
        }
    }

    pub fn success_message(&self) -> String {
        format!(
            "{} added successfully! Click the back arrow (←) to return to the home page.",
            self.display_name()
        )
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            "saving" | "savings" => Ok(EntryType::Saving),
            _ => Err(UnknownVariant::new("entry type", s)),
        }
    }
}

// ============================================================================
// LEDGER ROW
// ============================================================================

/// A single appended transaction. Never updated once written.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub entry_type: EntryType,
    pub category: String,
    pub date: NaiveDate,
    /// Rounded to cents
    pub amount: f64,
}

impl LedgerRow {
    pub fn new(entry_type: EntryType, category: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        LedgerRow {
            entry_type,
            category: category.into(),
            date,
            amount: round_to_cents(amount),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn amount_string(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// Cell values in sheet column order. Written RAW: the date stays ISO text,
    /// year and amount stay numbers.
    pub fn to_values(&self) -> Vec<Value> {
        vec![
            json!(self.entry_type.as_str()),
            json!(self.category),
            json!(self.date_string()),
            json!(self.year()),
            json!(self.amount),
        ]
    }
}

pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
