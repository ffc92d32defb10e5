use serde::{Deserialize, Serialize};

// Fixed requester identity sent with every search call.
pub const USER_IP: &str = "1.2.3.4";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_8_2)";

/// One independent parameter set per location. The location is lowercased
/// here; the keyword passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub location: String,
    pub user_ip: String,
    pub user_agent: String,
    pub limit: u32,
}

impl SearchParams {
    pub fn per_location(locations: &[String], query: &str, limit: u32) -> Vec<SearchParams> {
        locations
            .iter()
            .map(|location| SearchParams {
                query: query.to_string(),
                location: location.to_lowercase(),
                user_ip: USER_IP.to_string(),
                user_agent: USER_AGENT.to_string(),
                limit,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub url: String,
    #[serde(default)]
    pub jobtitle: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// The search service's answer for one location: a location echo plus the
/// postings found there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub results: Vec<JobPosting>,
}

impl SearchResponse {
    pub fn empty(location: &str) -> Self {
        Self {
            location: location.to_string(),
            results: Vec::new(),
        }
    }
}
