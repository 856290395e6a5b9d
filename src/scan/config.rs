use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Newline-separated targets; optional because the endpoints file may be
    /// provisioned by the job itself.
    pub endpoints: Option<String>,
    pub bucket: String,
    pub folder_name: String,
    pub spreadsheet_id: String,
    pub sheets_token: String,
}

impl ScanConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ScanConfig {
            endpoints: env::var("ENDPOINTS").ok(),
            bucket: required("BUCKET")?,
            folder_name: required("FOLDER_NAME")?,
            spreadsheet_id: required("SPREADSHEET_ID")?,
            sheets_token: required("SHEETS_TOKEN")?,
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("environment variable {} is not set", name))
}
