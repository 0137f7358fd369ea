use crate::domain::model::ValidInput;
use crate::utils::error::{MatchError, Result};
use url::Url;

/// Minimum length of each free-text description, measured in characters
/// after trimming surrounding whitespace.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

pub const CLIENT_INTEREST_FIELD: &str = "client_interest";
pub const VENDOR_CAPABILITY_FIELD: &str = "vendor_capability";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks both descriptions before any request is issued. The client
/// interest error wins when both fields are too short. On success the
/// original untrimmed strings are returned so the backend receives exactly
/// what the user wrote.
pub fn validate_submission(client_interest: &str, vendor_capability: &str) -> Result<ValidInput> {
    ensure_min_chars(
        CLIENT_INTEREST_FIELD,
        "Please describe client interests in at least 10 characters.",
        client_interest,
    )?;
    ensure_min_chars(
        VENDOR_CAPABILITY_FIELD,
        "Please describe vendor capabilities in at least 10 characters.",
        vendor_capability,
    )?;

    Ok(ValidInput::new(
        client_interest.to_string(),
        vendor_capability.to_string(),
    ))
}

fn ensure_min_chars(field: &'static str, message: &str, value: &str) -> Result<()> {
    if value.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(MatchError::ValidationError {
            field,
            message: message.to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MatchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_route_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path must start with '/'".to_string(),
        });
    }

    if path.contains(char::is_whitespace) {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
