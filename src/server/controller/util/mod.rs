//! Utility functions for controller request handling.
//!
//! Provides the single authorization gate every protected endpoint goes through.

pub mod auth;
