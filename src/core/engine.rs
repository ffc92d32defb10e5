use crate::core::aggregate::FrequencyAggregator;
use crate::core::extract;
use crate::core::progress::{ConsoleProgress, ProgressReporter};
use crate::domain::model::SearchResponse;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the whole run: load cities, one search per city, then per city
/// fetch each posting, aggregate its words, and rewrite the report. The
/// engine owns the frequency map; only the city-list load can abort a run.
pub struct WordCloudEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    progress: Box<dyn ProgressReporter>,
}

impl<P: Pipeline> WordCloudEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            progress: Box::new(ConsoleProgress),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading city list...");
        let locations = self.pipeline.load_locations().await?;
        tracing::info!("Loaded {} locations", locations.len());

        let params = self.pipeline.build_params(&locations);
        self.monitor.log_stats("Setup");

        // 搜尋階段：每個城市一次請求，失敗視為零結果
        let mut searches = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            self.progress.search_request(index + 1, params.len());
            match self.pipeline.search(param).await {
                Ok(response) => searches.push(response),
                Err(e) => {
                    tracing::warn!("Search failed for '{}': {}", param.location, e);
                    searches.push(SearchResponse::empty(&param.location));
                }
            }
        }
        self.progress.search_done();
        self.monitor.log_stats("Search");

        // 彙整階段：抓取每則職缺頁面並累計字數，每個城市結束後重寫報告
        let mut words = FrequencyAggregator::new();
        let mut report_path = None;
        let total = searches.len();
        for (index, search) in searches.iter().enumerate() {
            self.progress.location_update(
                index + 1,
                total,
                &search.location,
                search.results.len(),
            );

            for job in &search.results {
                let html = match self.pipeline.fetch_page(&job.url).await {
                    Ok(html) => html,
                    Err(e) => {
                        tracing::warn!("Failed to fetch {}: {}", job.url, e);
                        continue;
                    }
                };
                words.ingest(extract::pull_description(&html));
            }

            match self.pipeline.write_report(&words).await {
                Ok(path) => report_path = Some(path),
                Err(e) => tracing::warn!("Failed to write report: {}", e),
            }
        }
        self.monitor.log_stats("Aggregate");

        // 確保輸出檔存在，即使沒有任何城市完成寫入
        let report_path = match report_path {
            Some(path) => path,
            None => self.pipeline.write_report(&words).await?,
        };

        self.monitor.log_final_stats();
        self.progress.finished();
        Ok(report_path)
    }
}
