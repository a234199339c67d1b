//! # forcelink-rest
//!
//! Typed client for Salesforce sObject resources over the versioned REST API.
//!
//! ## Features
//!
//! - **List** - Enumerate the sObject types available in an org
//! - **Summary/Describe** - Typed per-type metadata (fields, record types,
//!   child relationships)
//! - **CRUD** - Create, update, and delete records as schema-less field maps
//! - **Blobs** - Fetch binary sub-resources (attachment bodies, avatars)
//! - **Sync windows** - Deleted/updated record IDs within a date range
//!
//! Records are deliberately schema-less: object shapes vary per org and per
//! type, so record payloads are ordered maps of field name to JSON value
//! rather than fixed structs. Metadata responses, by contrast, map onto
//! strongly-typed structs.
//!
//! Update and delete travel as POST with the REST API's `_HttpMethod`
//! override query parameter; that translation is part of the wire contract
//! and is centralized here so operations stay verb-agnostic.
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcelink_rest::{Record, SObjectClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), forcelink_rest::Error> {
//!     let client = SObjectClient::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     )?;
//!
//!     // Typed metadata
//!     let account = client.describe("Account").await?;
//!     println!("{} fields", account.fields.len());
//!
//!     // Schema-less records
//!     let mut lead = Record::new();
//!     lead.insert("LastName".into(), "Doe".into());
//!     lead.insert("Company".into(), "Acme, Inc.".into());
//!     let created = client.create("Lead", &lead).await?;
//!     let id = created["Id"].as_str().unwrap().to_string();
//!
//!     client.delete("Lead", &id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod record;
mod sync;
mod verb;

// Main client
pub use client::SObjectClient;

// Metadata types
pub use describe::{
    ChildRelationship, FieldDescribe, PicklistValue, RecordTypeInfo, SObjectDetail, SObjectSummary,
};

// Error types
pub use error::{Error, Result};

// Record payloads
pub use record::Record;

// Sync window types
pub use sync::{DeletedRecord, GetDeletedResult, GetUpdatedResult};

// Re-export transport types that users might need
pub use forcelink_client::{ClientConfig, ClientConfigBuilder, SalesforceClient};
