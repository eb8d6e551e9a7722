//! Repository Module
//!
//! In-memory CRUD storage. Each repository exclusively owns its entity map;
//! callers receive clones, never references into the store.

pub mod employee;

pub use employee::EmployeeRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Caller handed the repository something it cannot act on, e.g. an
    /// update for an id that does not exist. Handlers are expected to
    /// pre-check existence so this never reaches the wire.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
///
/// Generic over the entity type and its create/update payloads. Lookups
/// report absence as `None`, never as an error; `update` on an unknown id
/// is an `InvalidArgument` error instead (kept as-is for compatibility
/// with existing callers, which pre-check existence).
pub trait Repository<T, CreateDto, UpdateDto> {
    fn find_all(&self) -> Vec<T>;
    fn find_by_id(&self, id: u32) -> Option<T>;
    fn create(&self, data: CreateDto) -> T;
    fn update(&self, id: u32, data: UpdateDto) -> RepoResult<T>;
    fn delete(&self, id: u32) -> bool;
}
