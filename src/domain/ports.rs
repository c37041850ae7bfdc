use crate::utils::error::Result;
use async_trait::async_trait;

/// The CMS fetch contract: one query in, the matching document (or nothing)
/// out. Implemented by the HTTP client and by test doubles.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Option<serde_json::Value>>;
}
