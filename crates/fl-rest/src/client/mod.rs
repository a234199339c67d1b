//! sObject REST API client.

use forcelink_client::{
    ClientConfig, RequestBuilder, RequestMethod, Result as TransportResult, SalesforceClient,
};

use crate::verb::Verb;

mod binary;
mod crud;
mod list;
mod sync;

/// Client for sObject resources under the versioned REST API.
///
/// Thin stateless wrapper over [`SalesforceClient`]; cloning is cheap and
/// concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct SObjectClient {
    client: SalesforceClient,
}

impl SObjectClient {
    /// Create a new sObject client with default configuration.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> TransportResult<Self> {
        Ok(Self {
            client: SalesforceClient::new(instance_url, access_token)?,
        })
    }

    /// Create a new sObject client with custom transport configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> TransportResult<Self> {
        Ok(Self {
            client: SalesforceClient::with_config(instance_url, access_token, config)?,
        })
    }

    /// Wrap an existing Salesforce client.
    pub fn from_client(client: SalesforceClient) -> Self {
        Self { client }
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }

    /// Get the underlying Salesforce client.
    pub fn inner(&self) -> &SalesforceClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Build an authenticated request for a versioned REST path, translating
    /// the logical verb into GET or POST plus the `_HttpMethod` override.
    pub(crate) fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = verb.apply(&self.client.rest_url(path));
        match verb.method() {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
        }
    }
}
