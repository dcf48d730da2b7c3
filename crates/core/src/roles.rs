//! Well-known role name constants.
//!
//! These must match the `chk_users_role` constraint in
//! `20260301000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
