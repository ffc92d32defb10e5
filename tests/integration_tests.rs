use httpmock::prelude::*;
use jobcloud::{CliConfig, JobSearchPipeline, LocalStorage, WordCloudEngine};
use tempfile::TempDir;

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig {
        api_endpoint: server.url("/search"),
        publisher_id: "test-publisher".to_string(),
        keyword: "android".to_string(),
        city_list: "cities.txt".to_string(),
        output_file: "output.txt".to_string(),
        result_limit: 25,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_two_cities() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("cities.txt"), "Boston, MA\nAustin, TX\n").unwrap();

    let server = MockServer::start();

    let boston_search = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "android")
            .query_param("l", "boston, ma");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "location": "boston, ma",
                "results": [{"url": server.url("/job/boston")}]
            }));
    });

    let austin_search = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "android")
            .query_param("l", "austin, tx");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "location": "austin, tx",
                "results": [{"url": server.url("/job/austin")}]
            }));
    });

    let boston_page = server.mock(|when, then| {
        when.method(GET).path("/job/boston");
        then.status(200)
            .body(r#"<span id="job_summary" class="summary">Rust developer, Rust</span>"#);
    });

    let austin_page = server.mock(|when, then| {
        when.method(GET).path("/job/austin");
        then.status(200)
            .body(r#"<span id="job_summary" class="summary">Go systems; Go Go</span>"#);
    });

    let config = config_for(&server);
    let storage = LocalStorage::new(base.clone());
    let pipeline = JobSearchPipeline::new(storage, config);
    let engine = WordCloudEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "output.txt");

    boston_search.assert();
    austin_search.assert();
    boston_page.assert();
    austin_page.assert();

    let output = std::fs::read_to_string(temp_dir.path().join("output.txt")).unwrap();
    assert_eq!(output, "3 -> go\n2 -> rust\n1 -> developer\n1 -> systems\n");
}

#[tokio::test]
async fn test_end_to_end_zero_postings_creates_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("cities.txt"), "Boston, MA\n").unwrap();

    let server = MockServer::start();
    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "location": "boston, ma",
                "results": []
            }));
    });

    let config = config_for(&server);
    let storage = LocalStorage::new(base.clone());
    let pipeline = JobSearchPipeline::new(storage, config);
    let engine = WordCloudEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    search_mock.assert();

    // 沒有職缺仍會產生（空的）輸出檔
    let output_path = temp_dir.path().join("output.txt");
    assert!(output_path.exists());
    assert_eq!(std::fs::read_to_string(output_path).unwrap(), "");
}

#[tokio::test]
async fn test_end_to_end_search_failure_skips_city() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("cities.txt"), "Boston, MA\nAustin, TX\n").unwrap();

    let server = MockServer::start();

    let boston_search = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("l", "boston, ma");
        then.status(500);
    });

    let austin_search = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("l", "austin, tx");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "location": "austin, tx",
                "results": [{"url": server.url("/job/austin")}]
            }));
    });

    let austin_page = server.mock(|when, then| {
        when.method(GET).path("/job/austin");
        then.status(200)
            .body(r#"<span id="job_summary" class="summary">Rust</span>"#);
    });

    let config = config_for(&server);
    let storage = LocalStorage::new(base.clone());
    let pipeline = JobSearchPipeline::new(storage, config);
    let engine = WordCloudEngine::new(pipeline);

    // 單一城市的搜尋失敗不會中斷整個執行
    let result = engine.run().await;
    assert!(result.is_ok());

    boston_search.assert();
    austin_search.assert();
    austin_page.assert();

    let output = std::fs::read_to_string(temp_dir.path().join("output.txt")).unwrap();
    assert_eq!(output, "1 -> rust\n");
}

#[tokio::test]
async fn test_end_to_end_missing_city_list_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let config = config_for(&server);
    let storage = LocalStorage::new(base);
    let pipeline = JobSearchPipeline::new(storage, config);
    let engine = WordCloudEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_page_without_marker_counts_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("cities.txt"), "Boston, MA\n").unwrap();

    let server = MockServer::start();

    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "location": "boston, ma",
                "results": [{"url": server.url("/job/1")}]
            }));
    });

    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/job/1");
        then.status(200).body("<html><body>No summary span</body></html>");
    });

    let config = config_for(&server);
    let storage = LocalStorage::new(base.clone());
    let pipeline = JobSearchPipeline::new(storage, config);
    let engine = WordCloudEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    search_mock.assert();
    page_mock.assert();

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("output.txt")).unwrap(),
        ""
    );
}
