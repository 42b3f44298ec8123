//! Models decoded from (or sent to) the server.
//!
//! Every model tolerates unknown fields and falls back to defaults for
//! missing ones, so newer servers keep decoding.

pub mod computers;
pub mod jobs;
pub mod labels;
pub mod names;
pub mod nodes;
pub mod system;
pub mod views;

pub use computers::*;
pub use jobs::*;
pub use labels::*;
pub use names::*;
pub use nodes::*;
pub use system::*;
pub use views::*;
