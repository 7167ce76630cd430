use crate::core::fetch::Fetcher;
use crate::core::rows::parse_rows;
use crate::core::table::{locator_for, TableLocator};
use crate::core::{ConfigProvider, NeighborhoodRecord, Pipeline, Storage};
use crate::utils::error::{Result, ScrapeError};
use scraper::Html;

pub struct NeighborhoodPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: Fetcher,
    pub(crate) locator: Box<dyn TableLocator>,
}

impl<S: Storage, C: ConfigProvider> NeighborhoodPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = Fetcher::new(config.user_agent());
        let locator = locator_for(config.table_id());
        Self {
            storage,
            config,
            fetcher,
            locator,
        }
    }

    /// Replaces the table locating strategy picked from the configuration.
    pub fn with_locator(mut self, locator: Box<dyn TableLocator>) -> Self {
        self.locator = locator;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NeighborhoodPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        self.fetcher.fetch(self.config.source_url()).await
    }

    async fn transform(&self, html: String) -> Result<Vec<NeighborhoodRecord>> {
        let document = Html::parse_document(&html);
        tracing::debug!(
            "Parsed document with {} parse warnings",
            document.errors.len()
        );

        let table = self
            .locator
            .locate(&document)
            .ok_or_else(|| ScrapeError::TableNotFound {
                locator: self.locator.describe(),
            })?;

        let records = parse_rows(table);
        tracing::debug!(
            "Extracted {} records from {}",
            records.len(),
            self.locator.describe()
        );
        Ok(records)
    }

    async fn load(&self, records: &[NeighborhoodRecord]) -> Result<String> {
        let file_name = self.config.output_file();
        let json_data = serde_json::to_string_pretty(records)?;

        tracing::debug!(
            "Writing {} records ({} bytes) to storage",
            records.len(),
            json_data.len()
        );
        self.storage
            .write_file(file_name, json_data.as_bytes())
            .await?;

        Ok(self.storage.display_path(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::{DEFAULT_URL, DEFAULT_USER_AGENT};
    use crate::core::table::FirstTable;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn display_path(&self, path: &str) -> String {
            format!("memory://{}", path)
        }
    }

    struct MockConfig {
        table_id: Option<String>,
    }

    impl ConfigProvider for MockConfig {
        fn source_url(&self) -> &str {
            DEFAULT_URL
        }

        fn user_agent(&self) -> &str {
            DEFAULT_USER_AGENT
        }

        fn output_path(&self) -> &str {
            "."
        }

        fn output_file(&self) -> &str {
            "mahalleler.json"
        }

        fn table_id(&self) -> Option<&str> {
            self.table_id.as_deref()
        }
    }

    fn pipeline(table_id: Option<&str>) -> NeighborhoodPipeline<MockStorage, MockConfig> {
        NeighborhoodPipeline::new(
            MockStorage::new(),
            MockConfig {
                table_id: table_id.map(str::to_string),
            },
        )
    }

    const PAGE: &str = r#"<html><body>
        <table id="toc"><tr><td>İçindekiler</td></tr></table>
        <table id="data-table">
          <tr><th>Mahalle</th><th>İlçe</th></tr>
          <tr><td>Moda</td><td>Kadıköy</td></tr>
        </table>
    </body></html>"#;

    #[tokio::test]
    async fn test_transform_missing_table() {
        let result = pipeline(None)
            .transform("<html><body><p>yok</p></body></html>".to_string())
            .await;

        match result {
            Err(ScrapeError::TableNotFound { locator }) => assert_eq!(locator, "first <table>"),
            other => panic!("expected TableNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transform_blank_body_is_missing_table() {
        for body in ["", "   ", "  \n"] {
            let result = pipeline(None).transform(body.to_string()).await;
            match result {
                Err(ScrapeError::TableNotFound { locator }) => {
                    assert_eq!(locator, "first <table>")
                }
                other => panic!("expected TableNotFound, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_transform_uses_configured_table_id() {
        let first = pipeline(None).transform(PAGE.to_string()).await.unwrap();
        assert!(first.is_empty());

        let by_id = pipeline(Some("data-table"))
            .transform(PAGE.to_string())
            .await
            .unwrap();
        assert_eq!(by_id, vec![NeighborhoodRecord::new("Moda", "Kadıköy")]);

        let overridden = pipeline(Some("data-table"))
            .with_locator(Box::new(FirstTable))
            .transform(PAGE.to_string())
            .await
            .unwrap();
        assert!(overridden.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_pretty_json() {
        let pipeline = pipeline(None);
        let records = vec![
            NeighborhoodRecord::new("Fikirtepe", "Kadıköy"),
            NeighborhoodRecord::new("Taksim", "Beyoğlu"),
        ];

        let path = pipeline.load(&records).await.unwrap();
        assert_eq!(path, "memory://mahalleler.json");

        let written = pipeline.storage.get_file("mahalleler.json").await.unwrap();
        let text = String::from_utf8(written).unwrap();
        assert!(text.starts_with("[\n  {\n    \"mahalle\": \"Fikirtepe\""));
        assert!(text.contains("\"ilce\": \"Beyoğlu\""));

        let round_trip: Vec<NeighborhoodRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(round_trip, records);
    }
}
