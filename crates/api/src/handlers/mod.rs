//! Request handlers, one module per resource.
//!
//! Mutating handlers on owned resources follow the same sequence: load the
//! row (`NotFound` if absent), run the ownership guard (`Forbidden`), then
//! persist. Ownership is never evaluated for a missing id.

pub mod blog;
pub mod comment;
pub mod contact;
pub mod project;
pub mod users;
