use crate::core::{aggregate::FrequencyAggregator, report};
use crate::domain::model::{SearchParams, SearchResponse};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{JobCloudError, Result};
use reqwest::Client;

pub struct JobSearchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> JobSearchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for JobSearchPipeline<S, C> {
    async fn load_locations(&self) -> Result<Vec<String>> {
        let raw = self.storage.read_file(self.config.city_list()).await?;
        let content = String::from_utf8(raw).map_err(|e| JobCloudError::ProcessingError {
            message: format!("City list is not valid UTF-8: {}", e),
        })?;

        // 一行一個城市，保留行內空白
        Ok(content.lines().map(str::to_string).collect())
    }

    fn build_params(&self, locations: &[String]) -> Vec<SearchParams> {
        SearchParams::per_location(locations, self.config.keyword(), self.config.result_limit())
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        tracing::debug!(
            "Searching '{}' in '{}' via {}",
            params.query,
            params.location,
            self.config.api_endpoint()
        );

        let limit = params.limit.to_string();
        let response = self
            .client
            .get(self.config.api_endpoint())
            .query(&[
                ("publisher", self.config.publisher_id()),
                ("q", params.query.as_str()),
                ("l", params.location.as_str()),
                ("userip", params.user_ip.as_str()),
                ("useragent", params.user_agent.as_str()),
                ("limit", limit.as_str()),
                ("format", "json"),
                ("v", "2"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let mut parsed: SearchResponse = serde_json::from_str(&body)?;

        // 服務未回傳 location 時補上查詢參數的值
        if parsed.location.is_empty() {
            parsed.location = params.location.clone();
        }

        tracing::debug!(
            "Search for '{}' returned {} postings",
            parsed.location,
            parsed.results.len()
        );
        Ok(parsed)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching posting page: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn write_report(&self, words: &FrequencyAggregator) -> Result<String> {
        let rendered = report::render(words);
        self.storage
            .write_file(self.config.output_file(), rendered.as_bytes())
            .await?;

        tracing::debug!("Wrote {} words to {}", words.len(), self.config.output_file());
        Ok(self.config.output_file().to_string())
    }
}
