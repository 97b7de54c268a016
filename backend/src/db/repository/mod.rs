//! Repository trait definitions for feedback storage.
//!
//! - [`error`]: Error types for repository and service operations
//! - [`feedback`]: CRUD operations over feedback records

pub mod error;
pub mod feedback;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use feedback::FeedbackRepository;
