//! Repository factory trait
//!
//! Repositories themselves are per-entity traits in [`crate::repositories`];
//! a factory builds the concrete implementation from a shared handle.

/// A trait for database repository factories
///
/// Generic over the repository type and the handle it is built from.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    fn create_repository(&self, config: C) -> R;
}
