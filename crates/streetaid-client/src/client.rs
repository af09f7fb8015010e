//! HTTP client for the directory API.
//!
//! Wraps `reqwest` with typed endpoint methods and deserialization
//! context. Each method issues exactly one GET request — no retry, no
//! deduplication, no timeout beyond the client default — and surfaces
//! every failure as a [`FetchError`] for the caller to handle.

use std::time::Duration;

use reqwest::{Client, Url};

use streetaid_core::{AppConfig, Coordinate};

use crate::error::FetchError;
use crate::types::{AccommodationDetail, AccommodationResponse, CategoryServices};

/// Client for the directory API.
///
/// Manages the HTTP client and base URL. Use [`DirectoryClient::new`] for
/// production or [`DirectoryClient::with_base_url`] to point at a mock
/// server in tests.
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Creates a new client pointed at the configured API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidEndpoint`] if the
    /// configured endpoint is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            &config.api_endpoint,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a new client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so
        // that joined paths extend it rather than replacing the last
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FetchError::InvalidEndpoint {
            endpoint: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches full accommodation detail by record id.
    ///
    /// Calls `GET {base}/accommodation/{id}` and unwraps the `data`
    /// envelope.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FetchError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn accommodation(&self, id: &str) -> Result<AccommodationDetail, FetchError> {
        let url = self.build_url(&["accommodation", id]);
        let body = self.request_json(&url).await?;

        let envelope: AccommodationResponse =
            serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
                context: format!("accommodation(id={id})"),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Fetches the category-by-day service listing, optionally scoped to
    /// a coordinate.
    ///
    /// Calls `GET {base}/category-services-by-day/{category}` — with a
    /// trailing `/long/{longitude}/lat/{latitude}` when `location` is
    /// supplied — and returns the parsed [`CategoryServices`].
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FetchError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn category_services_by_day(
        &self,
        category: &str,
        location: Option<Coordinate>,
    ) -> Result<CategoryServices, FetchError> {
        let url = match location {
            Some(coord) => self.build_url(&[
                "category-services-by-day",
                category,
                "long",
                &coord.longitude.to_string(),
                "lat",
                &coord.latitude.to_string(),
            ]),
            None => self.build_url(&["category-services-by-day", category]),
        };

        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
            context: format!("category_services_by_day(category={category})"),
            source: e,
        })
    }

    /// Appends path segments to the stored base URL, percent-encoding
    /// each segment.
    fn build_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // The base URL is validated as http(s) at construction, so it is
        // never a cannot-be-a-base URL.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty();
            parts.extend(segments);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on network failure,
    /// [`FetchError::UnexpectedStatus`] for a non-2xx status, and
    /// [`FetchError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, FetchError> {
        tracing::debug!(%url, "requesting directory data");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
