use crate::utils::error::{EtlError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Validates an A1-style range reference such as `Sheet1!A1` or `Sheet1!A1:D50`.
/// Only the coarse shape is checked; the Sheets API is the final authority.
pub fn validate_range(field_name: &str, range: &str) -> Result<()> {
    validate_non_empty_string(field_name, range)?;

    let cell_part = match range.split_once('!') {
        Some((sheet, cells)) if !sheet.is_empty() => cells,
        _ => range,
    };

    if !cell_part
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ':')
        || cell_part.is_empty()
    {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: range.to_string(),
            reason: "Expected an A1-style reference like 'Sheet1!A1'".to_string(),
        });
    }

    Ok(())
}
