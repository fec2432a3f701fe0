//! Server application core modules.
//!
//! This module contains all server-side functionality of the MLE fantasy service: HTTP
//! routing, session authorization, database repositories and the league, draft, roster,
//! transaction and scoring services built on top of them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
