//! HTTP implementation of the gateway.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::Value;
use url::Url;

use super::envelope::{decode_record, error_message, normalize_page, parse_body};
use super::error::RequestError;
use super::{ApiResult, Gateway, ListQuery, Page, PackScope};
use crate::config::Config;
use crate::error::Result;
use crate::types::{NewPallet, OverviewRow, Pack, PackPayload, Pallet, PalletUpdate, RecordId};

/// Client for the pallet/pack REST API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for `base` with a per-request timeout
    pub fn new(base: &Url, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(RequestError::from_reqwest)?;

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Build a client from the loaded configuration and an optional `--api-base` flag
    pub fn from_config(config: &Config, api_base: Option<&str>) -> Result<Self> {
        let (url, source) = config.resolve_api_base(api_base)?;
        tracing::debug!(base = %url, %source, "using API base");
        Ok(Self::new(&url, config.request_timeout())?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "request");
        Ok(self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json"))
    }

    /// Send a request and return its parsed body, mapping failures to [`RequestError`]
    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Value> {
        let response = builder.send().await.map_err(RequestError::from_reqwest)?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(RequestError::from_reqwest)?;
        let body = parse_body(&bytes);

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(%status, %message, "request failed");
            return Err(RequestError::Status { status, message });
        }

        Ok(body)
    }

    async fn get_page<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> ApiResult<Page<T>> {
        let builder = self.request(Method::GET, path)?.query(pairs);
        let body = self.execute(builder).await?;
        Ok(normalize_page(body))
    }
}

impl Gateway for ApiClient {
    async fn health(&self) -> ApiResult<()> {
        let builder = self.request(Method::GET, "/api/health")?;
        self.execute(builder).await?;
        Ok(())
    }

    async fn list_pallets(&self, query: &ListQuery) -> ApiResult<Page<Pallet>> {
        self.get_page("/api/pallets", &query.to_pairs()).await
    }

    async fn get_pallet(&self, id: RecordId) -> ApiResult<Pallet> {
        let builder = self.request(Method::GET, &format!("/api/pallets/{id}"))?;
        decode_record(self.execute(builder).await?)
    }

    async fn create_pallet(&self, payload: &NewPallet) -> ApiResult<Pallet> {
        let builder = self.request(Method::POST, "/api/pallets")?.json(payload);
        decode_record(self.execute(builder).await?)
    }

    async fn update_pallet(&self, id: RecordId, payload: &PalletUpdate) -> ApiResult<Pallet> {
        let builder = self
            .request(Method::PUT, &format!("/api/pallets/{id}"))?
            .json(payload);
        decode_record(self.execute(builder).await?)
    }

    async fn delete_pallet(&self, id: RecordId) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, &format!("/api/pallets/{id}"))?;
        self.execute(builder).await?;
        Ok(())
    }

    async fn list_packs(&self, scope: PackScope, query: &ListQuery) -> ApiResult<Page<Pack>> {
        let pairs = ListQuery::new(query.limit, query.offset).to_pairs();
        self.get_page(&scope.collection_path(), &pairs).await
    }

    async fn create_pack(&self, scope: PackScope, payload: &PackPayload) -> ApiResult<Pack> {
        let builder = self
            .request(Method::POST, &scope.collection_path())?
            .json(payload);
        decode_record(self.execute(builder).await?)
    }

    async fn update_pack(&self, id: RecordId, payload: &PackPayload) -> ApiResult<Pack> {
        let builder = self
            .request(Method::PUT, &format!("/api/packs/{id}"))?
            .json(payload);
        decode_record(self.execute(builder).await?)
    }

    async fn delete_pack(&self, id: RecordId) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, &format!("/api/packs/{id}"))?;
        self.execute(builder).await?;
        Ok(())
    }

    async fn list_overview(&self, query: &ListQuery) -> ApiResult<Page<OverviewRow>> {
        self.get_page("/api/packs/overview", &query.to_pairs()).await
    }
}
