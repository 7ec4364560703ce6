//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod booking;
pub mod image;
pub mod project;

pub use booking::{Booking, CreateBooking};
pub use image::Image;
pub use project::{CreateProject, Project, ProjectWithImages, UpdateProject};
