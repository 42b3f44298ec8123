//! Transport wrappers layered under the client.

pub mod hook;

pub use hook::HookLayer;
