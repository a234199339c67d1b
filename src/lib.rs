//! # forcelink
//!
//! A typed Salesforce sObject REST client for Rust.
//!
//! Enumerate the object types in an org, fetch typed describe metadata,
//! create/update/delete records as schema-less field maps, pull binary blob
//! fields, and track deleted or updated record IDs for replication.
//!
//! ## Security
//!
//! Access tokens are redacted in Debug output and skipped by tracing spans.
//!
//! ## Crates
//!
//! - **forcelink-client** - HTTP transport: request building, retry with
//!   backoff, error-body classification
//! - **forcelink-rest** - sObject operations: list, describe, CRUD, blobs,
//!   sync windows
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forcelink::rest::{Record, SObjectClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SObjectClient::new(
//!         "https://myorg.my.salesforce.com",
//!         std::env::var("SF_ACCESS_TOKEN")?,
//!     )?;
//!
//!     for object in client.list_objects().await? {
//!         println!("{}", object["name"]);
//!     }
//!
//!     let mut lead = Record::new();
//!     lead.insert("LastName".into(), "Doe".into());
//!     lead.insert("Company".into(), "Acme, Inc.".into());
//!     let created = client.create("Lead", &lead).await?;
//!     println!("created {}", created["Id"]);
//!
//!     Ok(())
//! }
//! ```

// Re-export both crates for convenient access
pub use forcelink_client as client;
pub use forcelink_rest as rest;

// Re-export commonly used types at the top level
pub use forcelink_client::{ClientConfig, SalesforceClient};
pub use forcelink_rest::{Record, SObjectClient};
