//! Document source — listing and fetching candidate resumes from object
//! storage. The pipeline only depends on the `DocumentSource` trait; the S3
//! implementation is wired in at startup.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::debug;

use crate::errors::ScreenError;

/// Suffix a stored object must carry to count as a resume document.
const DOCUMENT_SUFFIX: &str = ".pdf";

/// Remote store of resume documents.
///
/// `list` enumerates document ids under a path prefix; `fetch` returns the
/// raw bytes of one document. All transport failures surface as
/// `ScreenError::SourceUnavailable`.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, ScreenError>;
    async fn fetch(&self, document_id: &str) -> Result<Bytes, ScreenError>;
}

/// S3-backed document source. The bucket acts as the container id; document
/// ids are object keys.
pub struct S3DocumentSource {
    client: S3Client,
    bucket: String,
}

impl S3DocumentSource {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl DocumentSource for S3DocumentSource {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, ScreenError> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| ScreenError::SourceUnavailable(e.to_string()))?;

        let keys: Vec<String> = response
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .filter(|key| key.ends_with(DOCUMENT_SUFFIX))
            .map(String::from)
            .collect();

        debug!(
            "Listed {} resume document(s) under s3://{}/{}",
            keys.len(),
            self.bucket,
            prefix
        );

        Ok(keys)
    }

    async fn fetch(&self, document_id: &str) -> Result<Bytes, ScreenError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(document_id)
            .send()
            .await
            .map_err(|e| ScreenError::SourceUnavailable(e.to_string()))?;

        let body = object
            .body
            .collect()
            .await
            .map_err(|e| ScreenError::SourceUnavailable(e.to_string()))?;

        Ok(body.into_bytes())
    }
}
