//! Per-project image quota policy.
//!
//! A project may hold at most [`MAX_IMAGES_PER_PROJECT`] attached images.
//! The check is made against an entire upload batch before any upload is
//! attempted, so the decision lives here rather than in the image
//! repository (a single-row insert cannot see the rest of its batch).

/// Maximum number of images attached to one project.
pub const MAX_IMAGES_PER_PROJECT: i64 = 5;

/// Number of additional images a project can still accept, clamped at 0.
pub fn remaining_slots(current_count: i64) -> i64 {
    (MAX_IMAGES_PER_PROJECT - current_count).max(0)
}

/// Whether a batch of `batch_size` new images fits under the quota,
/// given `current_count` already-attached images.
pub fn batch_fits(current_count: i64, batch_size: usize) -> bool {
    current_count + batch_size as i64 <= MAX_IMAGES_PER_PROJECT
}
