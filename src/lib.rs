//! maskcalc - Subnet mask / CIDR calculator service
//!
//! A small HTTP service: a credential login that issues signed session
//! tokens, and token-gated subnet mask <-> CIDR prefix-length conversion
//! endpoints.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod netmask;
pub mod web;

pub use auth::{
    salted_hash, verify_credentials, Claims, CredentialError, TokenAuthority, TokenError,
};
pub use config::Config;
pub use db::{CredentialRecord, CredentialRepository, Database};
pub use error::{MaskcalcError, Result};
pub use netmask::{mask_to_prefix_len, prefix_len_to_mask, ConversionError};
pub use web::WebServer;
