pub mod config;
pub mod findings;
pub mod runner;
pub mod s3_upload_client;
pub mod sheets_client;
