// Personal Finance Tracker - Core Library
// Entry forms that append income, expense and saving rows to a Google spreadsheet

pub mod config;
pub mod connector;
pub mod error;
pub mod form;
pub mod ledger;
pub mod navigator;
pub mod pages;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use connector::{GoogleSheetsConnector, GoogleWorksheet, ServiceAccountKey, SheetConnector, Worksheet};
pub use error::{ConnectorError, EntryError, UnknownVariant, ValidationError};
pub use form::{submit_entry, submit_form, EntrySubmission, RawEntryForm};
pub use ledger::{EntryType, LedgerRow};
pub use navigator::{Action, Navigator, View};
pub use pages::{render, Notice, NoticeKind, PageContext};
pub use server::{router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
