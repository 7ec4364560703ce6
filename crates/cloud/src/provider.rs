use async_trait::async_trait;
use bytes::Bytes;

use crate::error::CloudError;

/// An opaque blob-upload capability.
///
/// Implementations accept a byte buffer plus its content type and
/// return a durable, publicly-reachable URL, or fail. Nothing else
/// about the remote store leaks through this trait.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload `data` under `key`, returning the object's public URL.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> Result<String, CloudError>;
}

/// Build an object key for a project image upload.
///
/// Keys are namespaced per project and salted with a UUID so repeated
/// uploads of the same filename never collide:
/// `projects/{project_id}/{uuid}-{sanitized name}`.
pub fn image_key(project_id: i64, file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("projects/{project_id}/{}-{sanitized}", uuid::Uuid::new_v4())
}
