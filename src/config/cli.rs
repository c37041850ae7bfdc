use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Homepage,
    About,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "klagen-content")]
#[command(about = "Fetch normalized page content for the SDN Klagen 1 website")]
pub struct CliConfig {
    /// Page document to fetch
    #[arg(long, value_enum, default_value = "homepage")]
    pub page: Page,

    /// Override SANITY_API_VERSION
    #[arg(long)]
    pub api_version: Option<String>,

    /// Query the live API host instead of the CDN
    #[arg(long)]
    pub no_cdn: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(api_version) = &self.api_version {
            validate_non_empty_string("api_version", api_version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_api_version_override() {
        let config = CliConfig {
            page: Page::Homepage,
            api_version: Some("  ".to_string()),
            no_cdn: false,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_default_arguments() {
        let config = CliConfig::parse_from(["klagen-content"]);
        assert_eq!(config.page, Page::Homepage);
        assert!(config.validate().is_ok());
    }
}
