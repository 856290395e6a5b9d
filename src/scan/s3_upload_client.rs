use anyhow::{Context, Result};
use log::info;
use rusoto_core::Region;
use rusoto_s3::{PutObjectRequest, S3Client, S3};
use std::path::Path;

pub struct S3UploadClient {
    client: S3Client,
}

impl S3UploadClient {
    pub fn new(region: Region) -> Self {
        S3UploadClient {
            client: S3Client::new(region),
        }
    }

    pub async fn upload_file(&self, bucket: &str, key: &str, path: &Path) -> Result<()> {
        let contents = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        self.client
            .put_object(PutObjectRequest {
                bucket: bucket.to_string(),
                key: key.to_string(),
                body: Some(contents.into()),
                ..PutObjectRequest::default()
            })
            .await
            .with_context(|| {
                format!("failed to upload {} to s3://{}/{}", path.display(), bucket, key)
            })?;
        info!("File pushed to S3: {}", path.display());
        Ok(())
    }
}

pub fn object_key(folder_name: &str, year: &str, month: &str, file_name: &str) -> String {
    format!("{}/{}/{}/{}", folder_name, year, month, file_name)
}

#[cfg(test)]
mod tests {
    use crate::scan::s3_upload_client::object_key;

    #[test]
    fn test_object_key_is_partitioned_by_date() {
        assert_eq!(
            object_key("external-apps", "2024", "03", "external-apps-2024-03-07.json"),
            "external-apps/2024/03/external-apps-2024-03-07.json"
        );
    }
}
