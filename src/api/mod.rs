//! Typed Jenkins API services.
//!
//! Services are reached through accessors on the clients:
//! - `jobs()`, `views()`, `computers()`, `labels()`
//! - `system()` for the root document, controller config, crumbs and scripts
//!
//! Each has an async flavour (`JobsService`) and a blocking one
//! (`BlockingJobsService`) with identical operations.

pub mod computers;
pub mod jobs;
pub mod labels;
pub mod system;
pub mod views;

pub use computers::*;
pub use jobs::*;
pub use labels::*;
pub use system::*;
pub use views::*;
