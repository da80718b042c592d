use crate::core::store::LatencyProfile;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site-wide configuration, loaded from an optional TOML file. Everything
/// has a sensible default so the demo runs with no file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub data: Option<DataConfig>,
    pub latency: Option<LatencyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Dataset path overrides. Collections without an override load the
/// embedded dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub services: Option<String>,
    pub workshops: Option<String>,
    pub posts: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo {
                name: "D Marketing System Lab".to_string(),
                contact_email: "info@dmarketinglab.com".to_string(),
                phone: Some("+1 (555) 123-4567".to_string()),
                location: Some("Digital City, DC 12345".to_string()),
            },
            data: None,
            latency: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| SiteError::ConfigError {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Artificial delays for the mock repositories, per configuration.
    pub fn latency_profile(&self) -> LatencyProfile {
        let enabled = self.latency.as_ref().map(|l| l.enabled).unwrap_or(true);
        if enabled {
            LatencyProfile::realistic()
        } else {
            LatencyProfile::none()
        }
    }

    pub fn data(&self) -> DataConfig {
        self.data.clone().unwrap_or_default()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_email("site.contact_email", &self.site.contact_email)?;

        if let Some(data) = &self.data {
            if let Some(path) = &data.services {
                validation::validate_path("data.services", path)?;
            }
            if let Some(path) = &data.workshops {
                validation::validate_path("data.workshops", path)?;
            }
            if let Some(path) = &data.posts {
                validation::validate_path("data.posts", path)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_site_config() {
        let toml_content = r#"
[site]
name = "D Marketing System Lab"
contact_email = "info@dmarketinglab.com"

[latency]
enabled = false
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.name, "D Marketing System Lab");
        assert_eq!(config.latency_profile().get, std::time::Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_latency_defaults_to_realistic() {
        let config = SiteConfig::default();
        assert_eq!(
            config.latency_profile().list,
            std::time::Duration::from_millis(300)
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CONTACT_EMAIL", "lab@example.org");

        let toml_content = r#"
[site]
name = "test"
contact_email = "${TEST_CONTACT_EMAIL}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.contact_email, "lab@example.org");

        std::env::remove_var("TEST_CONTACT_EMAIL");
    }

    #[test]
    fn test_invalid_contact_email_fails_validation() {
        let toml_content = r#"
[site]
name = "test"
contact_email = "not-an-address"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[site]
name = "file-test"
contact_email = "file@example.org"

[data]
services = "data/services.json"
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "file-test");
        assert_eq!(config.data().services.as_deref(), Some("data/services.json"));
    }
}
