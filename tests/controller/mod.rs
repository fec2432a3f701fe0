//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted state, path and session, verifying status
//! codes, authorization and error bodies for the fantasy API.

mod auth;
mod draft;
mod league;
mod team;
mod user;
