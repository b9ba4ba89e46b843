// ⚠️ Errors - Connector failures, rejected input, failed submissions
//
// Every variant renders as the message shown inline on the page.

use thiserror::Error;

use crate::ledger::EntryType;

/// Failures while reaching the spreadsheet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// Service-account key missing, unreadable or malformed
    #[error("Failed to load credentials: {0}")]
    Credentials(String),

    /// Token exchange or Drive listing rejected
    #[error("Google Drive API access failed: {0}")]
    DriveAccess(String),

    /// No spreadsheet with this name is visible to the service account
    #[error("Spreadsheet '{0}' not found. Check sharing settings!")]
    SpreadsheetNotFound(String),

    /// Any other Sheets API or transport error
    #[error("Google Sheets API error: {0}")]
    Api(String),
}

impl ConnectorError {
    /// Short machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Credentials(_) => "credentials",
            Self::DriveAccess(_) => "drive_access",
            Self::SpreadsheetNotFound(_) => "spreadsheet_not_found",
            Self::Api(_) => "api",
        }
    }
}

/// Rejected form input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than 0.")]
    NonPositiveAmount,

    #[error("Date cannot be in the future.")]
    FutureDate,

    #[error("Unknown category '{category}' for {entry_type}.")]
    UnknownCategory {
        entry_type: EntryType,
        category: String,
    },

    #[error("Amount must be a number.")]
    InvalidAmount,

    #[error("Date must be in YYYY-MM-DD format.")]
    InvalidDate,
}

/// Outcome of a failed entry submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable to connect to Google Sheets. Please check your credentials and API access. ({0})")]
    Connection(ConnectorError),

    #[error("An error occurred while saving to Google Sheets: {0}")]
    Append(ConnectorError),
}

impl EntryError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Check if the input itself was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A name that does not match any known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
