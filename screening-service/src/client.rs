use crate::config::ScreeningConfig;
use crate::error::{Result, ScreeningError};
use crate::types::{CandidateRecord, Query};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

// Fixed upstream request parameters: exact-match threshold, one list.
const MIN_MATCH_SCORE: u32 = 100;
const SOURCE_LISTS: &[&str] = &["SDN"];
const ENTITY_TYPES: &[&str] = &["individual"];

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    api_key: &'a str,
    min_score: u32,
    source: &'a [&'a str],
    cases: Vec<SearchCase<'a>>,
    #[serde(rename = "type")]
    entity_types: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct SearchCase<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    matches: HashMap<String, Vec<CandidateRecord>>,
}

/// Candidate records keyed by the exact name string the upstream echoes
/// back. The key lookup is treated as fallible: a name the service did not
/// echo resolves to an empty candidate list, never a panic.
#[derive(Debug)]
pub struct SearchMatches {
    by_name: HashMap<String, Vec<CandidateRecord>>,
}

impl SearchMatches {
    pub fn candidates_for(&self, name: &str) -> &[CandidateRecord] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Client for the upstream SDN search API. One POST per lookup, no
/// retries: a failed attempt surfaces immediately to the orchestrator.
pub struct LookupClient {
    config: ScreeningConfig,
    http_client: Client,
}

impl LookupClient {
    pub fn new(config: ScreeningConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(LookupClient {
            config,
            http_client,
        })
    }

    /// Search the sanctions dataset for individuals whose name matches the
    /// query exactly.
    pub async fn search(&self, query: &Query) -> Result<SearchMatches> {
        let request = SearchRequest {
            api_key: &self.config.api_key,
            min_score: MIN_MATCH_SCORE,
            source: SOURCE_LISTS,
            cases: vec![SearchCase {
                name: &query.full_name,
            }],
            entity_types: ENTITY_TYPES,
        };

        let response = self
            .http_client
            .post(&self.config.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Sanctions search request failed: {}", e);
                ScreeningError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            error!("Sanctions search returned status {}: {}", status, reason);
            return Err(ScreeningError::Upstream {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.json::<SearchResponse>().await?;

        debug!(
            "Sanctions search returned candidates for {} name(s)",
            body.matches.len()
        );

        Ok(SearchMatches {
            by_name: body.matches,
        })
    }
}
