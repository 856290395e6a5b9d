use anyhow::{Context, Result};
use log::info;
use serde_json::json;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Thin wrapper over the Sheets v4 values endpoints, authenticated with a
/// pre-issued bearer token.
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, token: String) -> Self {
        SheetsClient {
            http: reqwest::Client::new(),
            spreadsheet_id,
            token,
        }
    }

    /// Clears the sheet's data range, then writes the rows starting at A5.
    pub async fn replace_rows(&self, sheet_name: &str, rows: &[Vec<String>]) -> Result<()> {
        self.clear_range(sheet_name).await?;
        self.update_rows(sheet_name, rows).await
    }

    async fn clear_range(&self, sheet_name: &str) -> Result<()> {
        let url = format!(
            "{}/{}/values/{}:clear",
            SHEETS_API_BASE,
            self.spreadsheet_id,
            clear_range(sheet_name)
        );
        self.http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({}))
            .send()
            .await
            .with_context(|| format!("failed to clear sheet {}", sheet_name))?
            .error_for_status()
            .with_context(|| format!("clear request for sheet {} rejected", sheet_name))?;
        Ok(())
    }

    async fn update_rows(&self, sheet_name: &str, rows: &[Vec<String>]) -> Result<()> {
        let url = format!(
            "{}/{}/values/{}?valueInputOption=USER_ENTERED",
            SHEETS_API_BASE,
            self.spreadsheet_id,
            update_range(sheet_name)
        );
        self.http
            .put(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": rows }))
            .send()
            .await
            .with_context(|| format!("failed to update sheet {}", sheet_name))?
            .error_for_status()
            .with_context(|| format!("update request for sheet {} rejected", sheet_name))?;
        info!("Updated sheet {} with {} rows", sheet_name, rows.len());
        Ok(())
    }
}

fn clear_range(sheet_name: &str) -> String {
    format!("{}!A5:ZZ", sheet_name)
}

fn update_range(sheet_name: &str) -> String {
    format!("{}!A5", sheet_name)
}

#[cfg(test)]
mod tests {
    use crate::scan::sheets_client::{clear_range, update_range};

    #[test]
    fn test_ranges_start_below_the_header_block() {
        assert_eq!(clear_range("external-apps"), "external-apps!A5:ZZ");
        assert_eq!(update_range("external-apps"), "external-apps!A5");
    }
}
