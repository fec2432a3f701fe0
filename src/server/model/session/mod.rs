//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored through tower-sessions (Valkey-backed in
//! production). The external login flow writes the user ID; this service only reads and
//! clears it.

pub mod user;
