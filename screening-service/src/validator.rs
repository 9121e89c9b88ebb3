use crate::types::{BirthYearInput, FieldErrors, Query, RawQuery};
use chrono::{Datelike, Utc};

/// Validate and normalize raw form fields into a [`Query`].
///
/// All failing fields are reported together, keyed by field name, so the
/// caller can render every problem in one pass. The birth-year upper bound
/// is the current calendar year at call time.
pub fn validate(raw: &RawQuery) -> Result<Query, FieldErrors> {
    validate_against_year(raw, Utc::now().year())
}

fn validate_against_year(raw: &RawQuery, current_year: i32) -> Result<Query, FieldErrors> {
    let mut errors = FieldErrors::new();

    let full_name = match &raw.full_name {
        Some(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                push_error(&mut errors, "full_name", "Name is required");
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => {
            push_error(&mut errors, "full_name", "Name is required");
            None
        }
    };

    let birth_year = match &raw.birth_year {
        Some(input) => match coerce_year(input) {
            Some(year) if year <= 0 => {
                push_error(&mut errors, "birth_year", "Birth year must be positive");
                None
            }
            Some(year) if year > current_year => {
                push_error(
                    &mut errors,
                    "birth_year",
                    "Birth year must not be in the future",
                );
                None
            }
            Some(year) => Some(year),
            None => {
                push_error(&mut errors, "birth_year", "Birth year must be a number");
                None
            }
        },
        None => {
            push_error(&mut errors, "birth_year", "Birth year is required");
            None
        }
    };

    let country = match &raw.country {
        Some(country) if !country.is_empty() => Some(country.clone()),
        _ => {
            push_error(&mut errors, "country", "Country is required");
            None
        }
    };

    match (full_name, birth_year, country) {
        (Some(full_name), Some(birth_year), Some(country)) => Ok(Query {
            full_name,
            birth_year,
            country,
        }),
        _ => Err(errors),
    }
}

// String-typed form input is coerced to an integer year; anything that
// does not parse cleanly is rejected rather than guessed at.
fn coerce_year(input: &BirthYearInput) -> Option<i32> {
    match input {
        BirthYearInput::Number(n) => i32::try_from(*n).ok(),
        BirthYearInput::Text(s) => s.trim().parse::<i32>().ok(),
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
