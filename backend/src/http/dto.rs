//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies keep every field optional so that missing or `null` fields
//! are reported as validation errors naming the field, instead of generic
//! body-parsing failures.

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{FeedbackPatch, NewFeedback};
use crate::validation::{FieldError, CONTENT_FIELD, EMAIL_FIELD};

pub use crate::api::Feedback;

/// Request body for `POST /feedbacks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFeedbackRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

impl CreateFeedbackRequest {
    /// Check that both required fields are present.
    pub fn into_new_feedback(self) -> Result<NewFeedback, FieldError> {
        let content = self
            .feedback_content
            .ok_or_else(|| FieldError::required(CONTENT_FIELD))?;
        let email = self
            .email_address
            .ok_or_else(|| FieldError::required(EMAIL_FIELD))?;
        Ok(NewFeedback { content, email })
    }
}

/// Request body for `PUT /feedbacks/{uuid}`.
///
/// Each field is tri-state: `None` when absent, `Some(None)` when sent as
/// `null`, `Some(Some(value))` otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFeedbackRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub feedback_content: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_address: Option<Option<String>>,
}

impl UpdateFeedbackRequest {
    /// Convert to a patch, rejecting explicit nulls.
    pub fn into_patch(self) -> Result<FeedbackPatch, FieldError> {
        Ok(FeedbackPatch {
            content: present_value(self.feedback_content, CONTENT_FIELD)?,
            email: present_value(self.email_address, EMAIL_FIELD)?,
        })
    }
}

/// Marks a field as present whenever the key appears, even with a `null` value.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn present_value(
    value: Option<Option<String>>,
    field: &'static str,
) -> Result<Option<String>, FieldError> {
    match value {
        None => Ok(None),
        Some(None) => Err(FieldError::null(field)),
        Some(Some(v)) => Ok(Some(v)),
    }
}

/// Response for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub redoc: String,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub feedbacks: usize,
}
