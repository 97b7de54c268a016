//! Error types for repository operations.
//!
//! Every failure a feedback operation can produce is deterministic given its
//! input, so none of these errors is retryable. Each variant carries a
//! human-readable message plus an [`ErrorContext`] for logs.

use std::fmt;

use crate::api::FeedbackId;
use crate::validation::FieldError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "create_feedback", "update_feedback")
    pub operation: Option<String>,
    /// The entity type involved
    pub entity: Option<String>,
    /// The entity ID if applicable
    pub entity_id: Option<String>,
    /// The offending input field, for validation failures
    pub field: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity ID.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set the offending field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref field) = self.field {
            parts.push(format!("field={}", field));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Requested feedback does not exist.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Input failed a field constraint.
    #[error("Validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Update request supplied no fields.
    #[error("Empty update: {message} {context}")]
    EmptyUpdate {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Not-found error for a feedback id.
    pub fn feedback_not_found(id: FeedbackId) -> Self {
        Self::NotFound {
            message: format!("Feedback with UUID {} not found", id),
            context: ErrorContext::default()
                .with_entity("feedback")
                .with_entity_id(id),
        }
    }

    /// Create a validation error for a field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default()
                .with_entity("feedback")
                .with_field(field),
        }
    }

    /// Create an empty-update error.
    pub fn empty_update() -> Self {
        Self::EmptyUpdate {
            message: "At least one field must be provided for update".to_string(),
            context: ErrorContext::default().with_entity("feedback"),
        }
    }

    /// Message without the context suffix, suitable for API responses.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::ValidationError { message, .. }
            | Self::EmptyUpdate { message, .. } => message,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::NotFound { context, .. } => context,
            Self::ValidationError { context, .. } => context,
            Self::EmptyUpdate { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::NotFound { context, .. }
            | Self::ValidationError { context, .. }
            | Self::EmptyUpdate { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

impl From<FieldError> for RepositoryError {
    fn from(err: FieldError) -> Self {
        RepositoryError::validation(err.field, err.message)
    }
}
