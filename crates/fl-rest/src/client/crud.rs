//! Record mutation: create, update, delete.
//!
//! Update and delete are sent as POST with the `_HttpMethod` override in the
//! query string; the body (when present) is always JSON.

use tracing::instrument;

use crate::client::SObjectClient;
use crate::error::Result;
use crate::record::{self, Record};
use crate::verb::Verb;

impl SObjectClient {
    /// Create a record of the given type.
    ///
    /// Field values round-trip as raw JSON; nothing is coerced or validated
    /// client-side. The returned record carries whatever the service echoes
    /// back, typically the new record's `Id`.
    #[instrument(skip(self, fields))]
    pub async fn create(&self, object_type: &str, fields: &Record) -> Result<Record> {
        let request = self
            .request(Verb::Post, &format!("sobjects/{object_type}"))
            .json(fields)?;
        let response = self.inner().execute(request).await?;
        let body = response.text().await?;
        record::from_body(&body)
    }

    /// Update fields on an existing record.
    ///
    /// Sent as POST with `_HttpMethod=PATCH`. The service usually replies
    /// with an empty body on success, which maps to an empty record.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, object_type: &str, id: &str, fields: &Record) -> Result<Record> {
        let request = self
            .request(Verb::PostAsPatch, &format!("sobjects/{object_type}/{id}"))
            .json(fields)?;
        let response = self.inner().execute(request).await?;
        let body = response.text().await?;
        record::from_body(&body)
    }

    /// Delete a record.
    ///
    /// Sent as POST with `_HttpMethod=DELETE` and no body. Success is
    /// judged by status alone; any response body is ignored.
    #[instrument(skip(self))]
    pub async fn delete(&self, object_type: &str, id: &str) -> Result<()> {
        let request = self.request(Verb::PostAsDelete, &format!("sobjects/{object_type}/{id}"));
        self.inner().execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> SObjectClient {
        SObjectClient::new(server.uri(), "test_token").unwrap()
    }

    fn lead() -> Record {
        let mut fields = Record::new();
        fields.insert("LastName".into(), "Doe".into());
        fields.insert("Company".into(), "Acme, Inc.".into());
        fields
    }

    #[tokio::test]
    async fn test_create() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead"))
            .and(body_json(json!({"LastName": "Doe", "Company": "Acme, Inc."})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"Id": "1234"})))
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server).await.create("Lead", &lead()).await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created["Id"], "1234");
    }

    #[tokio::test]
    async fn test_create_validation_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!([
                {"errorCode": "REQUIRED_FIELD_MISSING",
                 "message": "Required fields are missing: [LastName]",
                 "fields": ["LastName"]}
            ])))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .create("Lead", &Record::new())
            .await
            .unwrap_err();
        match err {
            crate::Error::Validation {
                error_code, fields, ..
            } => {
                assert_eq!(error_code, "REQUIRED_FIELD_MISSING");
                assert_eq!(fields, vec!["LastName".to_string()]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_uses_method_override() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead/abc123"))
            .and(query_param("_HttpMethod", "PATCH"))
            .and(body_json(json!({"LastName": "Doe", "Company": "Acme, Inc."})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let updated = client(&server)
            .await
            .update("Lead", "abc123", &lead())
            .await
            .unwrap();
        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead/nope"))
            .and(query_param("_HttpMethod", "PATCH"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!([
                {"errorCode": "NOT_FOUND", "message": "Provided external ID field does not exist"}
            ])))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .update("Lead", "nope", &lead())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead/nope"))
            .and(query_param("_HttpMethod", "DELETE"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!([
                {"errorCode": "NOT_FOUND", "message": "Provided external ID field does not exist"}
            ])))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .delete("Lead", "nope")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_uses_method_override() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v62.0/sobjects/Lead/abc123"))
            .and(query_param("_HttpMethod", "DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .await
            .delete("Lead", "abc123")
            .await
            .unwrap();
    }
}
