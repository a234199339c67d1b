//! Binary sub-resource retrieval.

use bytes::Bytes;
use tracing::instrument;

use crate::client::SObjectClient;
use crate::error::Result;
use crate::verb::Verb;

impl SObjectClient {
    /// Fetch the binary content of a blob field on a record, e.g. the
    /// `Body` of an Attachment or the `Photo` of a UserProfile.
    ///
    /// The payload is returned exactly as received, with no decoding or
    /// content-type interpretation.
    #[instrument(skip(self))]
    pub async fn get_blob(&self, object_type: &str, id: &str, blob_field: &str) -> Result<Bytes> {
        let request = self.request(
            Verb::Get,
            &format!("sobjects/{object_type}/{id}/{blob_field}"),
        );
        let response = self.inner().execute(request).await?;
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_blob_returns_exact_bytes() {
        let server = MockServer::start().await;
        let payload: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

        Mock::given(method("GET"))
            .and(path(
                "/services/data/v62.0/sobjects/Attachment/00P1234/Body",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(payload, "application/octet-stream"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SObjectClient::new(server.uri(), "test_token").unwrap();
        let blob = client
            .get_blob("Attachment", "00P1234", "Body")
            .await
            .unwrap();
        assert_eq!(blob.as_ref(), payload);
    }

    #[tokio::test]
    async fn test_get_blob_missing_record_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/sobjects/Attachment/nope/Body"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = SObjectClient::new(server.uri(), "test_token").unwrap();
        let err = client
            .get_blob("Attachment", "nope", "Body")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
