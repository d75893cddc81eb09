//! HTTP transport module
//!
//! Provides the transport the fetch engine sends GraphQL requests through.
//!
//! # Features
//!
//! - **Transport trait**: "send body, get body back", so tests can script responses
//! - **reqwest transport**: POST with `Authorization: Token <token>` and a fixed user agent
//! - **Request quota**: optional token bucket using governor

mod client;
mod quota;

pub use client::{
    HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder, Transport, DEFAULT_ENDPOINT,
    DEFAULT_USER_AGENT,
};
pub use quota::{QuotaConfig, RequestQuota};
