//! Roost Types - Shared domain types
//!
//! Domain types used across roost services: user identity and the token
//! pair handed out at login.

pub mod token;
pub mod user;

pub use token::*;
pub use user::*;
