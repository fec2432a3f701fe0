//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate repositories inside database transactions and
//! map results to DTOs. Pure helpers such as draft order generation, round robin scheduling
//! and lineup planning live next to the service that uses them.

pub mod draft;
pub mod league;
pub mod mle;
pub mod roster;
pub mod schedule;
pub mod scoring;
pub mod season;
pub mod transaction;
pub mod user;
