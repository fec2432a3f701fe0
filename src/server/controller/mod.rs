//! HTTP controller endpoints for the fantasy league web API.
//!
//! Axum handlers for authentication, leagues, drafts, rosters, transactions, seasons, MLE
//! reference data and user administration. Handlers authorize through
//! [`util::auth::AuthGuard`], delegate to services and return JSON. Every handler is
//! documented for OpenAPI through utoipa.

pub mod auth;
pub mod draft;
pub mod league;
pub mod mle;
pub mod season;
pub mod team;
pub mod transaction;
pub mod user;
pub mod util;
