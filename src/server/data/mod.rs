//! Database repositories.
//!
//! Each repository wraps a borrowed connection generic over [`sea_orm::ConnectionTrait`] so
//! the same operations run against a pooled connection or inside a
//! [`sea_orm::DatabaseTransaction`].

pub mod draft_pick;
pub mod league;
pub mod matchup;
pub mod mle;
pub mod roster;
pub mod season;
pub mod team;
pub mod trade;
pub mod transaction;
pub mod user;
pub mod waiver;
