use anyhow::Result;
use chrono::Local;
use infra_automation::scan::config::ScanConfig;
use infra_automation::scan::findings::parse_log;
use infra_automation::scan::runner::{discover_log_files, run_nuclei, write_endpoints, ScanPaths};
use infra_automation::scan::s3_upload_client::{object_key, S3UploadClient};
use infra_automation::scan::sheets_client::SheetsClient;
use log::{error, info, warn};
use rusoto_core::Region;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScanConfig::from_env()?;
    let paths = ScanPaths::new(&config.folder_name, Local::now().date_naive());

    write_endpoints(&paths, config.endpoints.as_deref())?;

    match run_nuclei(&paths).await {
        Ok(()) => info!(
            "Command executed successfully for: {} endpoints",
            config.folder_name
        ),
        // The log may still hold findings from a partial run, so keep going.
        Err(error) => error!("Error for endpoint {}: {}", config.folder_name, error),
    }

    let sheets = SheetsClient::new(config.spreadsheet_id.clone(), config.sheets_token.clone());
    let uploader = S3UploadClient::new(Region::default());

    for log_file in discover_log_files(Path::new("."), &config.folder_name)? {
        let contents = match fs::read_to_string(&log_file) {
            Ok(contents) => contents,
            Err(error) => {
                error!("Error reading {}: {}", log_file.display(), error);
                continue;
            }
        };
        let findings = parse_log(&contents);
        if findings.is_empty() {
            warn!("{} has no relevant data. Skipping...", log_file.display());
            continue;
        }

        let sheet_name = match log_file.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let rows: Vec<Vec<String>> = findings.iter().map(|finding| finding.row()).collect();
        if let Err(error) = sheets.replace_rows(&sheet_name, &rows).await {
            error!("Error updating spreadsheet for {}: {}", sheet_name, error);
        }

        let key = object_key(&config.folder_name, &paths.year, &paths.month, &paths.json_file);
        if let Err(error) = uploader
            .upload_file(&config.bucket, &key, Path::new(&paths.json_file))
            .await
        {
            error!("Error: {}", error);
        }
    }
    Ok(())
}
