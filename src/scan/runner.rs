use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;

const NUCLEI_USER_AGENT: &str = "User-Agent: Jenkins-Nuclei-Scans";
const EXCLUDED_TEMPLATES: &str = "ssl/untrusted-root-certificate.yaml";

/// File names and object-key parts derived from the folder name and the scan
/// date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPaths {
    pub endpoints_file: String,
    pub log_file: String,
    pub json_file: String,
    pub year: String,
    pub month: String,
}

impl ScanPaths {
    pub fn new(folder_name: &str, date: NaiveDate) -> Self {
        ScanPaths {
            endpoints_file: format!("{}.txt", folder_name),
            log_file: format!("{}.log", folder_name),
            json_file: format!("{}-{}.json", folder_name, date.format("%Y-%m-%d")),
            year: date.format("%Y").to_string(),
            month: date.format("%m").to_string(),
        }
    }
}

pub fn write_endpoints(paths: &ScanPaths, endpoints: Option<&str>) -> Result<()> {
    match endpoints {
        Some(endpoints) => {
            fs::write(&paths.endpoints_file, endpoints)
                .with_context(|| format!("failed to write {}", paths.endpoints_file))?;
            info!("endpoints data saved to {}", paths.endpoints_file);
        }
        None => warn!("Environment variable ENDPOINTS not set."),
    }
    Ok(())
}

pub fn nuclei_args(paths: &ScanPaths) -> Vec<String> {
    vec![
        "-header".to_string(),
        NUCLEI_USER_AGENT.to_string(),
        "-list".to_string(),
        paths.endpoints_file.clone(),
        "-es".to_string(),
        "info".to_string(),
        "-json-export".to_string(),
        paths.json_file.clone(),
        "-o".to_string(),
        paths.log_file.clone(),
        "-exclude-templates".to_string(),
        EXCLUDED_TEMPLATES.to_string(),
    ]
}

pub async fn run_nuclei(paths: &ScanPaths) -> Result<()> {
    let status = Command::new("nuclei")
        .args(nuclei_args(paths))
        .status()
        .await
        .context("failed to launch nuclei")?;
    if !status.success() {
        bail!("nuclei exited with status {}", status);
    }
    Ok(())
}

/// Log files produced for this folder name, sorted for a stable processing
/// order.
pub fn discover_log_files(dir: &Path, folder_name: &str) -> Result<Vec<PathBuf>> {
    let mut log_files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with(folder_name) && file_name.ends_with(".log") {
            log_files.push(entry.path());
        }
    }
    log_files.sort();
    Ok(log_files)
}
