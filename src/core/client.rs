use crate::config::sanity::SanityConfig;
use crate::domain::ports::ContentSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Response envelope of the Sanity query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// HTTP implementation of [`ContentSource`] against the Sanity content API.
/// One GET per fetch, no retries, no caching.
pub struct SanityClient {
    config: SanityConfig,
    base_url: Url,
    client: Client,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self> {
        let host = if config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        let base_url = Url::parse(&format!("https://{}.{}", config.project_id, host))?;
        Ok(Self::with_base_url(config, base_url))
    }

    /// Points the client at an explicit base URL. Test servers use this.
    pub fn with_base_url(config: SanityConfig, base_url: Url) -> Self {
        Self {
            config,
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn query_url(&self, query: &str) -> Result<Url> {
        let path = format!(
            "v{}/data/query/{}",
            self.config.api_version, self.config.dataset
        );
        let mut url = self.base_url.join(&path)?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch(&self, query: &str) -> Result<Option<serde_json::Value>> {
        let url = self.query_url(query)?;
        tracing::debug!(%url, "querying Sanity content API");

        let response = self.client.get(url).send().await?;
        tracing::debug!(status = %response.status(), "Sanity API response");

        let envelope: QueryResponse = response.error_for_status()?.json().await?;

        // `result: null` means no document of this type exists yet.
        Ok(envelope.result.filter(|value| !value.is_null()))
    }
}
