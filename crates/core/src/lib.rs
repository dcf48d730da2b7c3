//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here touches the network or the database: the ownership
//! guard, excerpt derivation and field rules are plain functions so they
//! can be unit tested in isolation.

pub mod blog;
pub mod error;
pub mod ownership;
pub mod roles;
pub mod types;
pub mod validation;
