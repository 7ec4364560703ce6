//! S3 implementation of [`ObjectStorage`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::error::CloudError;
use crate::provider::ObjectStorage;

/// Configuration for the S3 storage provider.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Target bucket name.
    pub bucket: String,
    /// Base URL under which uploaded objects are publicly reachable.
    pub public_base_url: String,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `S3_BUCKET` is not set, signalling that object
    /// storage is not configured.
    ///
    /// | Variable             | Required | Default                                  |
    /// |----------------------|----------|------------------------------------------|
    /// | `S3_BUCKET`          | yes      | —                                        |
    /// | `S3_PUBLIC_BASE_URL` | no       | `https://{bucket}.s3.amazonaws.com`      |
    ///
    /// Region and credentials come from the standard AWS environment
    /// (`AWS_REGION`, `AWS_ACCESS_KEY_ID`, ...).
    pub fn from_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET").ok()?;
        let public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"));
        Some(Self {
            bucket,
            public_base_url,
        })
    }
}

/// Uploads objects to S3 and derives their public URLs.
pub struct S3Provider {
    client: Client,
    config: S3Config,
}

impl S3Provider {
    /// Build a provider from the ambient AWS environment.
    pub async fn from_env(config: S3Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: Client::new(&sdk_config),
            config,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Provider {
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> Result<String, CloudError> {
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| CloudError::Upload(e.to_string()))?;

        tracing::debug!(key, "Uploaded object to S3");
        Ok(format!(
            "{}/{key}",
            self.config.public_base_url.trim_end_matches('/')
        ))
    }
}
