//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor to `TestContext` returning a borrowed fixture helper:
//!
//! - `user` - Fantasy users with roles & statuses
//! - `league` - Fantasy leagues and their member teams
//! - `mle` - MLE reference data, weekly stats and season settings
//! - `roster` - Roster slots, draft picks and matchups
//! - `factory` - Pure in-memory model builders for unit tests

pub mod factory;
pub mod league;
pub mod mle;
pub mod roster;
pub mod user;

pub use league::LeagueFixture;
