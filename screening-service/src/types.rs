use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw form fields as submitted by the UI collaborator, before validation.
/// Every field is optional; the validator reports what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuery {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub birth_year: Option<BirthYearInput>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Birth year as it arrives from a form: either a number or a numeric
/// string. Coercion to an integer happens during validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BirthYearInput {
    Number(i64),
    Text(String),
}

/// A query that passed validation. Immutable for the duration of one
/// lookup; `full_name` is trimmed and non-empty, `birth_year` is positive
/// and not in the future.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub full_name: String,
    pub birth_year: i32,
    pub country: String,
}

/// Field name -> one or more human-readable validation messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// One search hit from the upstream sanctions API. Only the fields the
/// scorer inspects are modeled; everything else in the record is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub addresses: Vec<CandidateAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateAddress {
    #[serde(default)]
    pub country: Option<String>,
}

/// Per-candidate attribute agreement. `full_name` is true for every
/// outcome produced: presence in the candidate list already means the
/// upstream matched the name at the exact-match threshold.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchOutcome {
    pub full_name: bool,
    pub birth_year: bool,
    pub country: bool,
}

/// Terminal result of one lookup. The two shapes are mutually exclusive:
/// either the query validated and produced a (possibly empty) outcome
/// list, or validation failed and the field errors are returned instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum LookupResult {
    Matches { matches: Vec<MatchOutcome> },
    Invalid { errors: FieldErrors },
}

/// Static country reference entry for the UI autocomplete; `id` is the
/// position in the list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountryItem {
    pub id: usize,
    pub name: String,
}
