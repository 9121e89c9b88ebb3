pub mod client;
pub mod config;
pub mod countries;
pub mod error;
pub mod scorer;
pub mod screening;
pub mod types;
pub mod validator;

pub use client::{LookupClient, SearchMatches};
pub use config::ScreeningConfig;
pub use countries::countries;
pub use error::{Result, ScreeningError};
pub use screening::ScreeningService;
pub use types::{
    BirthYearInput, CandidateRecord, CountryItem, FieldErrors, LookupResult, MatchOutcome, Query,
    RawQuery,
};
pub use validator::validate;
