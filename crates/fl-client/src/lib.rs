//! # forcelink-client
//!
//! HTTP transport for Salesforce REST APIs.
//!
//! This crate provides the transport layer the API-facing crates sit on:
//! - Authenticated GET/POST requests (bearer token)
//! - Version-qualified REST URL building
//! - Automatic retry with exponential backoff and jitter
//! - Classification of Salesforce error bodies into structured errors
//! - Connection pooling and request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Application Layer                      │
//! │                  (forcelink-rest)                      │
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌────────────────────────────────────────────────────────┐
//! │                 SalesforceClient                       │
//! │  - Holds instance URL, access token, API version       │
//! │  - Builds version-qualified REST URLs                  │
//! │  - Provides typed JSON methods (rest_get, rest_post)   │
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌────────────────────────────────────────────────────────┐
//! │                    HttpClient                          │
//! │  - Raw HTTP with retry and rate-limit handling         │
//! │  - Request building, response classification           │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! The transport issues only GET and POST. Operations with PATCH/DELETE
//! semantics go through the REST API's `_HttpMethod` override parameter,
//! which the API-facing crates append to the URL.

mod client;
mod config;
mod error;
mod request;
mod response;
mod retry;
mod salesforce_client;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};
pub use salesforce_client::SalesforceClient;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("forcelink/", env!("CARGO_PKG_VERSION"));
