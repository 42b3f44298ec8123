//! Jenkins remote management API client.
//!
//! Build a [`BlockingClient`] (default) or an async [`Client`] and reach the
//! typed services through it:
//!
//! ```no_run
//! # #[cfg(feature = "blocking")]
//! # fn main() -> Result<(), jenkins_remote::Error> {
//! use jenkins_remote::BlockingClient;
//!
//! let client = BlockingClient::builder("https://ci.example.com/jenkins")?
//!     .auth_basic("alice", "api-token")
//!     .build()?;
//!
//! if let Some(job) = client.jobs().get("nightly build")? {
//!     println!("{} buildable={}", job.name, job.buildable);
//!     job.delete()?;
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "blocking"))]
//! # fn main() {}
//! ```

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `blocking` (default) or `async`.");

pub mod api;
mod auth;
mod bound;
pub mod client;
mod codec;
mod error;
mod request_hook;
pub mod transport;
pub mod types;
mod util;

pub use auth::{Auth, SecretString};
pub use bound::Bound;
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
pub use codec::{Codec, Format};
pub use error::{BodySnippetConfig, Error, ErrorKind, HttpError, Result, TransportErrorKind};
pub use request_hook::{RequestHook, RequestHookContext};
pub use types::*;
