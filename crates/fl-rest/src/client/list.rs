//! Object enumeration and metadata: list, summary, describe.

use tracing::instrument;

use crate::client::SObjectClient;
use crate::describe::{SObjectDetail, SObjectSummary};
use crate::error::{Error, Result};
use crate::record::{self, Record};
use crate::verb::Verb;

impl SObjectClient {
    /// List the sObject types available in the org.
    ///
    /// The global-describe wrapper's envelope attributes are discarded;
    /// the per-type descriptors are returned as raw maps in service order.
    /// An org with no accessible types yields an empty vec.
    #[instrument(skip(self))]
    pub async fn list_objects(&self) -> Result<Vec<Record>> {
        let request = self.request(Verb::Get, "sobjects");
        let response = self.inner().execute(request).await?;
        let payload: serde_json::Value = response.json().await?;
        record::object_list(payload)
    }

    /// Get identity and capability metadata for one sObject type.
    #[instrument(skip(self))]
    pub async fn get_summary(&self, object_type: &str) -> Result<SObjectSummary> {
        let request = self.request(Verb::Get, &format!("sobjects/{object_type}"));
        let response = self.inner().execute(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Mapping(e.to_string()))
    }

    /// Get the full structural description of one sObject type: fields,
    /// record types, and child relationships.
    #[instrument(skip(self))]
    pub async fn describe(&self, object_type: &str) -> Result<SObjectDetail> {
        let request = self.request(Verb::Get, &format!("sobjects/{object_type}/describe"));
        let response = self.inner().execute(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Mapping(e.to_string()))
    }
}
