use crate::core::aggregate::FrequencyAggregator;
use crate::domain::model::{SearchParams, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn publisher_id(&self) -> &str;
    fn keyword(&self) -> &str;
    fn city_list(&self) -> &str;
    fn output_file(&self) -> &str;
    fn result_limit(&self) -> u32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load_locations(&self) -> Result<Vec<String>>;
    fn build_params(&self, locations: &[String]) -> Vec<SearchParams>;
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse>;
    async fn fetch_page(&self, url: &str) -> Result<String>;
    async fn write_report(&self, words: &FrequencyAggregator) -> Result<String>;
}
