pub mod rate_limit;
pub mod types;

use std::env::consts;
use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Method, Response,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Error, Result};

use self::rate_limit::RateLimit;
use self::types::{CuratedResult, Photo, SearchResult};

pub const PEXELS_API_BASE_URL: &str = "https://api.pexels.com/v1";

/// Highest curated page the random photo lookup may land on.
pub const RANDOM_PAGE_MAX: u32 = 1000;

pub struct PexelsClientBuilder {
    token: String,
    base_url: String,
    seed: Option<u64>,
    timeout: Option<Duration>,
}

impl PexelsClientBuilder {
    /// Point the client at another deployment of the API, e.g. a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make the random photo lookup deterministic.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<PexelsClient> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!(
                "{}/{} on {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                consts::OS
            ));

        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        let client = client.build().map_err(|source| Error::Request { source })?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(PexelsClient {
            client,
            token: self.token,
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            rate_limit: RateLimit::default(),
            rng,
        })
    }
}

/// Client for the Pexels photo API.
///
/// Every operation takes `&mut self` because each response updates the
/// rate limit counters. Share it between tasks behind a lock, or give each
/// task its own client.
pub struct PexelsClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    rate_limit: RateLimit,
    rng: StdRng,
}

impl PexelsClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    pub fn builder(token: impl Into<String>) -> PexelsClientBuilder {
        PexelsClientBuilder {
            token: token.into(),
            base_url: PEXELS_API_BASE_URL.to_owned(),
            seed: None,
            timeout: None,
        }
    }

    /// Requests left in the current quota window, as last reported by the API.
    pub fn rate_limit_remaining(&self) -> Option<i64> {
        self.rate_limit.remaining
    }

    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    /// Search photos by a free-text query.
    #[instrument(skip(self))]
    pub async fn search_photos(
        &mut self,
        query: &str,
        per_page: i64,
        page: i64,
    ) -> Result<SearchResult> {
        let url = search_url(&self.base_url, query, per_page, page)?;
        self.get_json(url).await
    }

    /// List a page of the curated feed.
    #[instrument(skip(self))]
    pub async fn curated_photos(&mut self, per_page: i64, page: i64) -> Result<CuratedResult> {
        let url = curated_url(&self.base_url, per_page, page)?;
        self.get_json(url).await
    }

    /// Look up a single photo by its id.
    #[instrument(skip(self))]
    pub async fn get_photo(&mut self, id: u64) -> Result<Photo> {
        let url = photo_url(&self.base_url, id)?;
        let photo: Photo = self.get_json(url).await?;

        if photo.is_blank() {
            return Err(Error::BlankPhoto);
        }

        Ok(photo)
    }

    /// The API has no random endpoint, so this picks a one-photo page of the
    /// curated feed at a random offset. Pages past the end of the feed are
    /// empty, in which case `None` is returned.
    #[instrument(skip(self))]
    pub async fn get_random_photo(&mut self) -> Result<Option<Photo>> {
        let page = random_page(&mut self.rng);

        debug!(page, "Picked random curated page");

        let mut result = self.curated_photos(1, page.into()).await?;

        if result.photos.len() != 1 {
            return Ok(None);
        }

        Ok(result.photos.pop())
    }

    async fn get_json<T>(&mut self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request_with_auth(Method::GET, url).await?;
        let status = response.status();

        let bytes = response
            .bytes()
            .await
            .map_err(|source| Error::ReadBody { source })?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();

            warn!(%status, %body, "Pexels API responded with an error status");

            return Err(Error::BadStatus { status, body });
        }

        serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
            source,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Sends an authorized request and records the rate limit headers of
    /// whatever response comes back. The body is left unread.
    async fn request_with_auth(&mut self, method: Method, url: Url) -> Result<Response> {
        debug!(%method, %url, "Sending Pexels API request");

        let response = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, &self.token)
            .send()
            .await
            .map_err(|source| Error::Request { source })?;

        self.rate_limit.observe(response.headers());

        Ok(response)
    }
}

fn random_page(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..=RANDOM_PAGE_MAX)
}

fn endpoint(base_url: &str, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let url = format!("{base_url}/{path}");

    // `parse_with_params` leaves a dangling `?` when there are no params
    let url = if query.is_empty() {
        Url::parse(&url)
    } else {
        Url::parse_with_params(&url, query)
    };

    url.map_err(|source| Error::InvalidUrl { source })
}

fn search_url(base_url: &str, query: &str, per_page: i64, page: i64) -> Result<Url> {
    endpoint(
        base_url,
        "search",
        &[
            ("query", query.to_owned()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ],
    )
}

fn curated_url(base_url: &str, per_page: i64, page: i64) -> Result<Url> {
    endpoint(
        base_url,
        "curated",
        &[
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ],
    )
}

fn photo_url(base_url: &str, id: u64) -> Result<Url> {
    endpoint(base_url, &format!("photos/{id}"), &[])
}
