//! Site configuration (`site.toml`).
//!
//! Every key is optional; command-line flags are layered on top with
//! [`SiteConfig::apply`] and the result is checked by [`SiteConfig::validate`].

use std::path::{Path, PathBuf};

use fleetos_landing::{DEFAULT_STYLESHEET, DEFAULT_TITLE, PageOptions};
use serde::Deserialize;
use thiserror::Error;

/// Years accepted for the copyright line
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=9999;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("copyright year {0} is outside 1970..=9999")]
    InvalidYear(i32),
    #[error("page title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub stylesheet: String,
    pub output_dir: PathBuf,
    /// Defaults to the current year at render time
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            output_dir: PathBuf::from("dist"),
            copyright_year: None,
        }
    }
}

/// Values given on the command line; `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub stylesheet: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub copyright_year: Option<i32>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(stylesheet) = overrides.stylesheet {
            self.stylesheet = stylesheet;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if overrides.copyright_year.is_some() {
            self.copyright_year = overrides.copyright_year;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        match self.copyright_year {
            Some(year) if !YEAR_RANGE.contains(&year) => Err(ConfigError::InvalidYear(year)),
            _ => Ok(()),
        }
    }

    pub fn page_options(&self) -> PageOptions {
        let defaults = PageOptions::default();
        PageOptions {
            title: self.title.clone(),
            stylesheet_href: self.stylesheet.clone(),
            year: self.copyright_year.unwrap_or(defaults.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn parses_all_keys() {
        let config: SiteConfig = toml::from_str(
            r#"
            title = "FleetOS Demo"
            stylesheet = "assets/app.css"
            output_dir = "public"
            copyright_year = 2026
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            SiteConfig {
                title: "FleetOS Demo".into(),
                stylesheet: "assets/app.css".into(),
                output_dir: PathBuf::from("public"),
                copyright_year: Some(2026),
            }
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = toml::from_str::<SiteConfig>("theme = \"dark\"").unwrap_err();
        assert!(err.to_string().contains("theme"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = SiteConfig {
            title: "From file".into(),
            copyright_year: Some(2024),
            ..Default::default()
        }
        .apply(Overrides {
            title: Some("From flag".into()),
            copyright_year: Some(2027),
            ..Default::default()
        });

        assert_eq!(config.title, "From flag");
        assert_eq!(config.copyright_year, Some(2027));
        assert_eq!(config.stylesheet, DEFAULT_STYLESHEET);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_year = SiteConfig {
            copyright_year: Some(123),
            ..Default::default()
        };
        assert!(matches!(bad_year.validate(), Err(ConfigError::InvalidYear(123))));

        let blank_title = SiteConfig {
            title: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(blank_title.validate(), Err(ConfigError::EmptyTitle)));

        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn page_options_use_configured_year() {
        let config = SiteConfig {
            copyright_year: Some(2028),
            ..Default::default()
        };
        assert_eq!(config.page_options().year, 2028);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
