//! Object-storage capability: bytes in, durable public URL out.
//!
//! The [`ObjectStorage`] trait is the seam the upload orchestrator
//! drives; [`s3::S3Provider`] is the production implementation. Tests
//! substitute their own trait impls.

pub mod error;
pub mod provider;
pub mod s3;

pub use error::CloudError;
pub use provider::ObjectStorage;
pub use s3::{S3Config, S3Provider};
