//! Authentication module
//!
//! Supplies the token sent in the `Authorization: Token <token>` header.
//! Where the token is stored is up to the caller; the fetch core only asks a
//! `TokenProvider` for the current string.

mod provider;

pub use provider::{authorization_header, EnvToken, StaticToken, TokenProvider};
