#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Flag defaults carry the fixed configuration: the search endpoint, the
/// keyword, and the file paths are constants unless overridden.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jobcloud")]
#[command(about = "Builds a word-cloud frequency file from job postings across US cities")]
pub struct CliConfig {
    #[arg(long, default_value = "http://api.indeed.com/ads/apisearch")]
    pub api_endpoint: String,

    #[arg(long, default_value = "YOUR_PUBLISHER_ID")]
    pub publisher_id: String,

    #[arg(long, default_value = "android")]
    pub keyword: String,

    #[arg(long, default_value = "list_of_cities.txt")]
    pub city_list: String,

    #[arg(long, default_value = "output.txt")]
    pub output_file: String,

    #[arg(long, default_value = "25")]
    pub result_limit: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn publisher_id(&self) -> &str {
        &self.publisher_id
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn city_list(&self) -> &str {
        &self.city_list
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn result_limit(&self) -> u32 {
        self.result_limit
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("publisher_id", &self.publisher_id)?;
        validate_non_empty_string("keyword", &self.keyword)?;
        validate_path("city_list", &self.city_list)?;
        validate_path("output_file", &self.output_file)?;
        validate_range("result_limit", self.result_limit, 1, 25)?;
        Ok(())
    }
}
