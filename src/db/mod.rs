//! Data access for the external hosted backend.
//!
//! This module follows the repository pattern: the [`repository`] trait is
//! the abstract read-only interface over the data API, with an in-memory
//! implementation for tests/dev and an HTTP implementation for production.
//! Response-envelope normalization lives in [`envelope`] so the API's shape
//! inconsistencies are decided in exactly one place.
//!
//! Repositories are constructed once at startup and passed explicitly to
//! whatever needs them; there is deliberately no module-level client
//! singleton.

pub mod envelope;
pub mod repositories;
pub mod repository;

use std::sync::Arc;

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::RemoteRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, VenueRepository};

/// Which backend a repository should be built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    #[cfg(feature = "local-repo")]
    Local,
    #[cfg(feature = "remote-repo")]
    Remote,
}

impl RepositoryKind {
    /// Select a backend from `REPOSITORY_BACKEND` (`local` or `remote`),
    /// defaulting to local.
    pub fn from_env() -> RepositoryResult<Self> {
        match std::env::var("REPOSITORY_BACKEND").as_deref() {
            #[cfg(feature = "local-repo")]
            Err(_) | Ok("local") => Ok(Self::Local),
            #[cfg(feature = "remote-repo")]
            Ok("remote") => Ok(Self::Remote),
            other => Err(RepositoryError::configuration(format!(
                "repository backend not available: {}",
                other.unwrap_or("unset")
            ))),
        }
    }
}

/// Construct a repository for the selected backend.
pub fn build_repository(kind: RepositoryKind) -> RepositoryResult<Arc<dyn VenueRepository>> {
    match kind {
        #[cfg(feature = "local-repo")]
        RepositoryKind::Local => Ok(Arc::new(LocalRepository::new())),
        #[cfg(feature = "remote-repo")]
        RepositoryKind::Remote => Ok(Arc::new(RemoteRepository::from_env()?)),
    }
}
