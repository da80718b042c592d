use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidFieldError {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if email_regex().is_match(value.trim()) {
        Ok(())
    } else {
        Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Invalid e-mail address".to_string(),
        })
    }
}

pub fn validate_date(field_name: &str, value: &str) -> Result<()> {
    match chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(e) => Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("image_url", "https://example.com/a.jpg").is_ok());
        assert!(validate_url("image_url", "http://example.com").is_ok());
        assert!(validate_url("image_url", "").is_err());
        assert!(validate_url("image_url", "not-a-url").is_err());
        assert!(validate_url("image_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "info@dmarketinglab.com").is_ok());
        assert!(validate_email("email", "  padded@example.org ").is_ok());
        assert!(validate_email("email", "missing-at.example.org").is_err());
        assert!(validate_email("email", "two@@example.org").is_err());
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("event_date", "2024-06-15").is_ok());
        assert!(validate_date("event_date", "June 15, 2024").is_err());
        assert!(validate_date("event_date", "2024-13-01").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Dalia").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
