// ⚙️ Config - Server settings from flags or environment variables

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::connector::GoogleSheetsConnector;

pub const DEFAULT_SPREADSHEET: &str = "Expense-Tracker";

pub const DEFAULT_DASHBOARD_URL: &str = "https://app.powerbi.com/groups/me/reports/a37762e5-254f-49e8-bc4c-5a7768de2775/bb8aa83b47656f5388c5?experience=power-bi";

#[derive(Parser, Debug, Clone)]
#[command(name = "finance-tracker")]
#[command(author, version, about = "Personal finance entry forms backed by a Google spreadsheet")]
pub struct Config {
    /// Address the web server listens on
    #[arg(long, env = "FINANCE_TRACKER_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Service-account key file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS", default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Name of the spreadsheet rows are appended to
    #[arg(long, env = "FINANCE_TRACKER_SPREADSHEET", default_value = DEFAULT_SPREADSHEET)]
    pub spreadsheet: String,

    /// Report opened by the dashboard view
    #[arg(long, env = "FINANCE_TRACKER_DASHBOARD_URL", default_value = DEFAULT_DASHBOARD_URL)]
    pub dashboard_url: String,

    /// Open the spreadsheet once at startup and log the outcome
    #[arg(long)]
    pub check_connection: bool,
}

impl Config {
    pub fn connector(&self) -> GoogleSheetsConnector {
        GoogleSheetsConnector::new(self.credentials.clone(), self.spreadsheet.clone())
    }
}
