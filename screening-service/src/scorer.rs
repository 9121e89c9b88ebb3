use crate::types::{CandidateRecord, MatchOutcome, Query};

/// Compute the per-candidate attribute agreement for every candidate the
/// upstream returned, preserving upstream order.
///
/// Pure function: never mutates the query or the candidates, and a missing
/// or malformed candidate field degrades that attribute to `false` rather
/// than failing the candidate. An empty candidate list yields an empty
/// outcome list (the "no hit" case), not an all-false outcome.
pub fn score(query: &Query, candidates: &[CandidateRecord]) -> Vec<MatchOutcome> {
    candidates
        .iter()
        .map(|candidate| score_candidate(query, candidate))
        .collect()
}

fn score_candidate(query: &Query, candidate: &CandidateRecord) -> MatchOutcome {
    // The candidate is only in the list because the upstream matched the
    // name at the exact-match threshold.
    MatchOutcome {
        full_name: true,
        birth_year: birth_year_of(candidate) == Some(query.birth_year),
        country: first_address_country(candidate) == Some(query.country.as_str()),
    }
}

// Upstream DOB strings vary ("12 Jan 1970", "1970"); the year is the last
// whitespace-delimited token when present.
fn birth_year_of(candidate: &CandidateRecord) -> Option<i32> {
    candidate
        .dob
        .as_deref()?
        .split_whitespace()
        .last()?
        .parse::<i32>()
        .ok()
}

fn first_address_country(candidate: &CandidateRecord) -> Option<&str> {
    candidate.addresses.first()?.country.as_deref()
}
