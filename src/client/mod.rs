//! Graph API client
//!
//! Builds requests from the shared configuration, sends them through the
//! transport, and attaches paging links to every response.
//!
//! Links come from the response's cursors when the strategy can compute
//! them, and otherwise from the `paging.next` / `paging.previous` URLs the
//! API returned. The client also keeps the most recent pair so
//! [`GraphClient::get_page`] can follow it; that pair is last-write-wins
//! across concurrent calls, so callers that interleave requests should use
//! the links on each [`GraphResponse`] with [`GraphClient::fetch_link`].

mod response;

pub use response::GraphResponse;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpTransport, Request, RequestFactory, Transport};
use crate::pagination::{api_links, ApiProvidedLinks, LinkStrategy, PagingLinks, SimpleCursorLinks};
use crate::types::{Direction, Method, Params};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Client shared by every resource wrapper
pub struct GraphClient {
    config: ClientConfig,
    factory: RequestFactory,
    transport: Arc<dyn Transport>,
    links: RwLock<PagingLinks>,
}

impl GraphClient {
    /// Create a client talking HTTP with settings from `config`
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(config.transport_config())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            factory: config.request_factory(),
            config,
            transport,
            links: RwLock::new(PagingLinks::default()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn request_factory(&self) -> &RequestFactory {
        &self.factory
    }

    /// Build a request with this client's host, version and token
    pub fn request(&self, method: Method, endpoint: &str, params: Params) -> Request {
        self.factory.build(method, endpoint, params)
    }

    /// GET `endpoint`
    pub async fn get(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.send(Method::GET, endpoint, params).await
    }

    /// POST `endpoint` with a form body
    pub async fn post(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.send(Method::POST, endpoint, params).await
    }

    /// DELETE `endpoint`
    pub async fn delete(&self, endpoint: &str, params: Params) -> Result<GraphResponse> {
        self.send(Method::DELETE, endpoint, params).await
    }

    /// Send a request, computing links from top-level cursors
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
    ) -> Result<GraphResponse> {
        let strategy = SimpleCursorLinks::new(endpoint, params.clone());
        self.send_with(method, endpoint, params, &strategy).await
    }

    /// Send a request, computing links with `strategy`
    pub async fn send_with(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
        strategy: &dyn LinkStrategy,
    ) -> Result<GraphResponse> {
        let request = self.request(method, endpoint, params);
        self.dispatch(&request, strategy).await
    }

    /// GET an absolute URL as-is
    pub async fn fetch_custom(&self, url: &str) -> Result<GraphResponse> {
        self.fetch_custom_with(url, &ApiProvidedLinks).await
    }

    /// GET an absolute URL, computing links with `strategy`
    pub async fn fetch_custom_with(
        &self,
        url: &str,
        strategy: &dyn LinkStrategy,
    ) -> Result<GraphResponse> {
        let request = Request::custom(Method::GET, url);
        self.dispatch(&request, strategy).await
    }

    /// Follow the most recently held link in `direction`
    ///
    /// Without a held link this returns an empty response and sends nothing.
    pub async fn get_page(&self, direction: Direction) -> Result<GraphResponse> {
        let links = self.paging_links().await;
        self.fetch_link(&links, direction).await
    }

    /// Follow a link from a response the caller kept
    pub async fn fetch_link(
        &self,
        links: &PagingLinks,
        direction: Direction,
    ) -> Result<GraphResponse> {
        match links.get(direction) {
            Some(url) => self.fetch_custom(url).await,
            None => {
                debug!("No {direction:?} page link held");
                Ok(GraphResponse::empty())
            }
        }
    }

    /// Snapshot of the links from the latest response
    pub async fn paging_links(&self) -> PagingLinks {
        self.links.read().await.clone()
    }

    async fn dispatch(
        &self,
        request: &Request,
        strategy: &dyn LinkStrategy,
    ) -> Result<GraphResponse> {
        let body = self.transport.send(request).await?;

        let links = strategy.compute(&body, &self.factory).or(api_links(&body));
        *self.links.write().await = links.clone();

        Ok(GraphResponse::new(body, links))
    }
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("graph_version", &self.config.graph_version)
            .field("graph_base_url", &self.config.graph_base_url)
            .field("has_access_token", &self.factory.access_token().is_some())
            .finish_non_exhaustive()
    }
}
