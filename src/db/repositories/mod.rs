//! Repository implementations.
//!
//! - `local`: in-memory implementation for unit testing and local development
//! - `remote`: HTTP client of the hosted data API

#[cfg(feature = "local-repo")]
pub mod local;
#[cfg(feature = "remote-repo")]
pub mod remote;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use remote::RemoteRepository;
