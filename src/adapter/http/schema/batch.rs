use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::infra::constants::{MAX_BATCH_COUNT, MIN_BATCH_COUNT};

pub const COUNT_FIELD: &str = "count";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BatchRequest {
    /// How many new profiles to fetch.
    #[validate(range(min = 1, max = 5000, message = "Ensure this value is between 1 and 5000."))]
    #[schema(minimum = 1, maximum = 5000, example = 10)]
    pub count: i64,
}

/// Describes the batch form embedded in the list page.
#[derive(Debug, Serialize, ToSchema)]
pub struct BatchFormSchema {
    pub field: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub min: i64,
    pub max: i64,
}

impl Default for BatchFormSchema {
    fn default() -> Self {
        Self {
            field: COUNT_FIELD,
            label: "Number of people to load",
            placeholder: "Enter a number (1 to 5000)",
            min: MIN_BATCH_COUNT,
            max: MAX_BATCH_COUNT,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchSuccessResponse {
    pub success: bool,
    pub saved: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchErrorResponse {
    pub success: bool,
    /// Field name to list of errors.
    #[schema(value_type = Object)]
    pub errors: Value,
    pub message: String,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(COUNT_FIELD, ValidationError::new(code).with_message(message.into()));
    errors
}

/// Accepts `"12"`, `" 12 "` and `"12.0"`, rejects anything else that is not a whole number.
fn parse_whole_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = match trimmed.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => trimmed,
    };
    digits.parse::<i64>().ok()
}

/// Validates the raw `count` field of a batch request.
pub fn validate_batch_count(raw: Option<&str>) -> Result<u32, ValidationErrors> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(field_error("required", "This field is required.")),
    };

    let count = parse_whole_number(raw).ok_or_else(|| field_error("invalid", "Enter a whole number."))?;

    let request = BatchRequest { count };
    request.validate()?;

    u32::try_from(request.count).map_err(|_| field_error("range", "Ensure this value is between 1 and 5000."))
}
