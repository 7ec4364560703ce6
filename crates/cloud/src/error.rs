/// Error type for object-storage operations.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The remote store rejected or failed the upload.
    #[error("upload failed: {0}")]
    Upload(String),
}
