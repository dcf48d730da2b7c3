//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - A response struct with the owner reference resolved, where the entity
//!   has an owner
//!
//! Wire types use camelCase keys.

pub mod blog_post;
pub mod comment;
pub mod message;
pub mod project;
pub mod user;
