//! Upload orchestrator: drives one batch of image files through the
//! object store and into the image table.
//!
//! The flow for a batch of N files is:
//!
//! 1. The caller has already verified the project exists and that the
//!    whole batch fits under the 5-image quota (no uploads happen for
//!    an oversized batch).
//! 2. All N upload+persist operations run concurrently, each bounded by
//!    the per-file upload timeout.
//! 3. The batch joins only after every operation settles; the response
//!    is assembled from index-tagged slots, never completion order.
//!
//! Persistence is deliberately per-file, not transactional: a file that
//! uploaded and persisted stays persisted even when a sibling fails.
//! Rolling back would need a compensating delete against the external
//! store, which is out of scope; a remote object whose insert failed is
//! an accepted orphan.

use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;

use folio_cloud::provider::image_key;
use folio_cloud::ObjectStorage;
use folio_core::types::DbId;
use folio_db::repositories::ImageRepo;
use folio_db::DbPool;

/// One file extracted from the multipart request, tagged with its
/// position in the batch.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub index: usize,
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Which stage of the per-file pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The external store rejected, failed, or timed out the upload.
    /// No durable record was written for this file.
    UploadFailed,
    /// The upload succeeded but the image row could not be written.
    /// The remote object exists unreferenced (accepted orphan).
    PersistFailed,
}

/// A per-file failure, tagged with the file's input position.
#[derive(Debug, Clone, Serialize)]
pub struct UploadFailure {
    pub index: usize,
    pub file_name: String,
    pub reason: FailureReason,
    pub detail: String,
}

/// Settled outcome of a whole batch. Both lists are ordered by input
/// index.
#[derive(Debug)]
pub struct BatchOutcome {
    pub urls: Vec<String>,
    pub failures: Vec<UploadFailure>,
}

/// Run one pre-validated batch: fan out, wait for every file to settle,
/// aggregate by input index.
pub async fn run_batch(
    pool: &DbPool,
    storage: &dyn ObjectStorage,
    upload_timeout: Duration,
    project_id: DbId,
    files: Vec<UploadPayload>,
) -> BatchOutcome {
    let tasks = files.into_iter().map(|file| async move {
        let UploadPayload {
            index,
            file_name,
            content_type,
            data,
        } = file;

        let key = image_key(project_id, &file_name);
        let url = match tokio::time::timeout(upload_timeout, storage.put(&key, &content_type, data))
            .await
        {
            Ok(Ok(url)) => url,
            Ok(Err(e)) => {
                return Err(UploadFailure {
                    index,
                    file_name,
                    reason: FailureReason::UploadFailed,
                    detail: e.to_string(),
                });
            }
            Err(_) => {
                return Err(UploadFailure {
                    index,
                    file_name,
                    reason: FailureReason::UploadFailed,
                    detail: format!("upload timed out after {}s", upload_timeout.as_secs_f32()),
                });
            }
        };

        match ImageRepo::insert(pool, project_id, &url).await {
            Ok(_) => Ok((index, url)),
            Err(e) => {
                // The remote object now exists without a record; log it
                // so orphans can be traced later.
                tracing::warn!(project_id, key = %key, error = %e, "Image persisted remotely but insert failed");
                Err(UploadFailure {
                    index,
                    file_name,
                    reason: FailureReason::PersistFailed,
                    detail: e.to_string(),
                })
            }
        }
    });

    let mut successes: Vec<(usize, String)> = Vec::new();
    let mut failures: Vec<UploadFailure> = Vec::new();
    for result in futures::future::join_all(tasks).await {
        match result {
            Ok(success) => successes.push(success),
            Err(failure) => failures.push(failure),
        }
    }

    successes.sort_by_key(|(index, _)| *index);
    failures.sort_by_key(|f| f.index);

    BatchOutcome {
        urls: successes.into_iter().map(|(_, url)| url).collect(),
        failures,
    }
}
