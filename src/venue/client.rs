use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::DeleteError;
use crate::venue::model::{DeletionResponse, VenueId};

/// Server-side venue operations the page depends on.
#[async_trait]
pub trait VenueApi: Send + Sync {
    /// Ask the server to delete `id` and decode whatever it answers.
    ///
    /// The HTTP status is not consulted; only the body decides the outcome.
    async fn delete_venue(&self, id: &VenueId) -> Result<DeletionResponse, DeleteError>;
}

#[derive(Debug, Clone)]
pub struct HttpVenueClient {
    base: Url,
    client: Client,
}

impl HttpVenueClient {
    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not an absolute http(s)-style url.
    pub fn new(base_url: &str) -> Result<Self, DeleteError> {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, ...).
    ///
    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not an absolute http(s)-style url.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, DeleteError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(DeleteError::BaseUrl(format!("{base_url} cannot be a base")));
        }
        Ok(Self { base, client })
    }

    /// `{base}/venues/{id}`, with the id encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the id is empty, `.` or `..`, or if the base url
    /// has no path to extend.
    pub fn venue_url(&self, id: &VenueId) -> Result<Url, DeleteError> {
        if !id.is_single_segment() {
            return Err(DeleteError::InvalidVenueId(id.to_string()));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| DeleteError::BaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["venues", id.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl VenueApi for HttpVenueClient {
    async fn delete_venue(&self, id: &VenueId) -> Result<DeletionResponse, DeleteError> {
        let url = self.venue_url(id)?;
        let resp = self
            .client
            .delete(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        debug!("DELETE {url} -> {}", resp.status());

        let bytes = resp.bytes().await?;
        let decoded = DeletionResponse::from_body(&bytes)?;
        info!("{}", decoded.body);
        Ok(decoded)
    }
}
