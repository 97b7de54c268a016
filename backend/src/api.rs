//! Core domain types shared by the store, the service layer and the HTTP API.
//!
//! JSON field names follow the public wire format (`uuid`, `feedback_content`,
//! `email_address`); Rust field names stay short.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Feedback identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub Uuid);

impl FeedbackId {
    /// Generate a fresh random (v4) identifier.
    pub fn generate() -> Self {
        FeedbackId(Uuid::new_v4())
    }

    pub fn new(value: Uuid) -> Self {
        FeedbackId(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for FeedbackId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(FeedbackId)
    }
}

/// A stored feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "uuid")]
    pub id: FeedbackId,
    #[serde(rename = "feedback_content")]
    pub content: String,
    #[serde(rename = "email_address")]
    pub email: String,
}

impl Feedback {
    /// Build a record from already-validated fields.
    pub fn new(id: FeedbackId, new: NewFeedback) -> Self {
        Self {
            id,
            content: new.content,
            email: new.email,
        }
    }

    /// Return a copy with the present patch fields applied. The id never changes.
    pub fn merged(&self, patch: FeedbackPatch) -> Self {
        Self {
            id: self.id,
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
        }
    }
}

/// Fields required to create a feedback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub content: String,
    pub email: String,
}

impl NewFeedback {
    pub fn new(content: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            email: email.into(),
        }
    }
}

/// Partial update. `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackPatch {
    pub content: Option<String>,
    pub email: Option<String>,
}

impl FeedbackPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            email: None,
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            content: None,
            email: Some(email.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.email.is_none()
    }
}
