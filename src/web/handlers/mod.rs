//! API handlers for maskcalc.

pub mod auth;
pub mod convert;

pub use auth::*;
pub use convert::*;
