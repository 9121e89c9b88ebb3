use crate::client::LookupClient;
use crate::config::ScreeningConfig;
use crate::error::Result;
use crate::scorer;
use crate::types::{LookupResult, RawQuery};
use crate::validator;
use tracing::{debug, info};

/// The single public operation exposed to the UI collaborator: validate
/// the raw fields, search the upstream sanctions API, score every
/// candidate.
pub struct ScreeningService {
    client: LookupClient,
}

impl ScreeningService {
    pub fn new(config: ScreeningConfig) -> Result<Self> {
        Ok(ScreeningService {
            client: LookupClient::new(config)?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ScreeningConfig::from_env()?)
    }

    /// Run one lookup. Three distinct terminal states:
    /// - `Ok(LookupResult::Invalid { .. })`: validation failed; no
    ///   network call was made.
    /// - `Ok(LookupResult::Matches { .. })`: upstream answered; an empty
    ///   list is a meaningful "no hit", not an error.
    /// - `Err(_)`: the upstream call itself failed; the caller surfaces
    ///   this as an unexpected-failure state, never as a validation error.
    pub async fn lookup(&self, raw: &RawQuery) -> Result<LookupResult> {
        let query = match validator::validate(raw) {
            Ok(query) => query,
            Err(errors) => {
                debug!("Lookup rejected by validation: {} field(s)", errors.len());
                return Ok(LookupResult::Invalid { errors });
            }
        };

        let matches = self.client.search(&query).await?;
        let outcomes = scorer::score(&query, matches.candidates_for(&query.full_name));

        info!(
            "Screened '{}': {} candidate(s)",
            query.full_name,
            outcomes.len()
        );

        Ok(LookupResult::Matches { matches: outcomes })
    }
}
