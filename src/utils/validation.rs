use crate::utils::error::{Result, ZooError};

/// Returns the trimmed value, or a validation error when nothing is left after trimming.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ZooError::Validation {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

pub fn validate_non_negative(field_name: &str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| ZooError::Range {
        field: field_name.to_string(),
        value: i64::from(value),
        message: "Value cannot be negative".to_string(),
    })
}

pub fn parse_integer(field_name: &str, input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ZooError::InvalidNumber {
            field: field_name.to_string(),
            input: input.to_string(),
        })
}

/// `k` (kyllä) in any case is yes; every other answer is no.
pub fn parse_yes_no(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("k")
}
