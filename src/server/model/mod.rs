//! Server application models.
//!
//! Application state shared by every handler and typed wrappers around session data.

pub mod app;
pub mod session;
