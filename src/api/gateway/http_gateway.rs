//! reqwest-backed implementation of [`CollectionsGateway`].

use std::time::Duration;

use async_trait::async_trait;
use http::header::ACCEPT;
use reqwest::{Client, RequestBuilder};

use crate::api::credentials::{ApiCredentials, ApiEndpoint};
use crate::api::error::ApiError;
use crate::api::models::CollectionPage;
use crate::api::query::QueryOptions;

use super::CollectionsGateway;
use super::error_mapping::{map_status_error, map_transport_error};

/// Header carrying a session token.
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Gateway issuing collection queries over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCollectionsGateway {
    client: Client,
    endpoint: ApiEndpoint,
    credentials: ApiCredentials,
}

impl HttpCollectionsGateway {
    /// Creates a gateway for `endpoint` authenticating with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(
        endpoint: ApiEndpoint,
        credentials: ApiCredentials,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    /// Returns the endpoint this gateway talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            ApiCredentials::Token(token) => request.header(AUTH_TOKEN_HEADER, token),
            ApiCredentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

#[async_trait]
impl CollectionsGateway for HttpCollectionsGateway {
    async fn query(
        &self,
        collection: &str,
        options: &QueryOptions,
    ) -> Result<CollectionPage, ApiError> {
        let operation = format!("query {collection}");
        let url = self.endpoint.collection_url(collection)?;
        tracing::debug!(%url, "querying collection");

        let request = self
            .client
            .get(url)
            .query(&options.query_pairs())
            .header(ACCEPT, "application/json");
        let response = self
            .authenticate(request)
            .send()
            .await
            .map_err(|error| map_transport_error(&operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
            return Err(map_status_error(&operation, status, &body));
        }

        response
            .json::<CollectionPage>()
            .await
            .map_err(|error| ApiError::Decode {
                message: format!("{operation} returned malformed JSON: {error}"),
            })
    }
}
