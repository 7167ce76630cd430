use crate::domain::model::NeighborhoodRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of `path`, used in notices.
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn table_id(&self) -> Option<&str>;
}

/// Fetch, parse and persist, one stage per method.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, html: String) -> Result<Vec<NeighborhoodRecord>>;
    async fn load(&self, records: &[NeighborhoodRecord]) -> Result<String>;
}
