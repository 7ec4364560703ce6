//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod booking_repo;
pub mod image_repo;
pub mod project_repo;

pub use booking_repo::BookingRepo;
pub use image_repo::ImageRepo;
pub use project_repo::ProjectRepo;
