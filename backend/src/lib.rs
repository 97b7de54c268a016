//! # Feedback Management API
//!
//! An HTTP CRUD service over an in-memory collection of feedback records.
//! Each record holds a text body, an email address and a generated UUID.
//!
//! ## Architecture
//!
//! - [`api`]: Domain types (`Feedback`, `FeedbackId`, `NewFeedback`, `FeedbackPatch`)
//! - [`validation`]: Field validators for content and email
//! - [`db`]: Repository pattern, in-memory store, seed data and service layer
//! - [`config`]: Server configuration (TOML file with CLI/env overrides)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Storage is process-local: every record is lost when the process exits.

pub mod api;
pub mod config;
pub mod db;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;
