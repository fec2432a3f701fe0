//! JSON data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod draft;
pub mod league;
pub mod mle;
pub mod roster;
pub mod season;
pub mod transaction;
pub mod user;
