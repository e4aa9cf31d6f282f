//! # CampusBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for CampusBot, handling
//! loading, merging, validation, and access to configuration data. Every
//! setting has a built-in default, so CampusBot runs without any file.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (used alone, no merging)
//! 2. Project-specific `.campusbot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/campusbot/config.toml`
//! 4. Default values defined in the code
//!
//! Project values override user values field by field. The `courses`,
//! `professors` and `jokes` tables replace the built-in tables when non-empty.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! jokes = ["Why did the student eat his homework? The teacher said it was a piece of cake."]
//!
//! [institution]
//! name = "Riverside Institute of Technology"
//! principal = "Dr. A. Rao"
//!
//! [search]
//! endpoint = "https://duckduckgo.com/"
//!
//! [server]
//! port = 9000
//! max_input_length = 300
//!
//! [[courses]]
//! key = "mech"
//! name = "Mechanical Engineering"
//! duration = "4 years"
//! fees = "$13,000/year"
//! specializations = ["Robotics"]
//! website = "/mech"
//! ```
//!
use crate::assistant::boundary::DEFAULT_MAX_INPUT_LENGTH;
use crate::assistant::knowledge::{Course, Institution, KnowledgeStore, Professor};
use crate::core::error::{CampusError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use url::Url;

/// Search endpoint used when none is configured.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

const PROJECT_CONFIG_FILENAME: &str = ".campusbot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub institution: Institution,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerSettings,
    /// Replaces the built-in course table when non-empty.
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Replaces the built-in professor table when non-empty.
    #[serde(default)]
    pub professors: Vec<Professor>,
    /// Replaces the built-in joke list when non-empty.
    #[serde(default)]
    pub jokes: Vec<String>,
}

/// Settings for the web search answer.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Base URL; the search terms are appended as the `q` query parameter.
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
        }
    }
}

/// Settings for `campusbot srv` and the input boundary.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    /// Messages longer than this many characters are rejected.
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interface to bind to; parsed as an IP address during validation.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            max_input_length: default_max_input_length(),
            port: default_port(),
            host: default_host(),
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}
fn default_max_input_length() -> usize {
    DEFAULT_MAX_INPUT_LENGTH
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_enable_cors() -> bool {
    true
}

impl Config {
    /// The knowledge store described by this configuration: the built-in
    /// tables with any configured replacements applied.
    pub fn knowledge(&self) -> KnowledgeStore {
        let mut store = KnowledgeStore::builtin();
        store.institution = self.institution.clone();
        if !self.courses.is_empty() {
            store.courses = self.courses.clone();
        }
        if !self.professors.is_empty() {
            store.professors = self.professors.clone();
        }
        if !self.jokes.is_empty() {
            store.jokes = self.jokes.clone();
        }
        store
    }

    /// The configured bind address.
    pub fn host_addr(&self) -> Result<IpAddr> {
        self.server.host.parse::<IpAddr>().map_err(|_| {
            anyhow!(CampusError::Config(format!(
                "Invalid server host '{}'. Expected an IP address.",
                self.server.host
            )))
        })
    }
}

/// Loads, merges and validates the configuration.
///
/// With `explicit` set, only that file is read (it must exist). Otherwise the
/// user and project files are looked up and merged over the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CampusBot", "campusbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_project_config_from(&current_dir))
}

/// Walks from `start` up to the filesystem root looking for the project
/// file. Stops at the first directory containing `.git`.
fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.institution = merge_institution(
        user.institution,
        project_cfg.institution,
        &defaults.institution,
    );

    merged.search.endpoint = if project_cfg.search.endpoint != defaults.search.endpoint {
        project_cfg.search.endpoint
    } else {
        user.search.endpoint
    };

    merged.server.max_input_length =
        if project_cfg.server.max_input_length != defaults.server.max_input_length {
            project_cfg.server.max_input_length
        } else {
            user.server.max_input_length
        };
    merged.server.port = if project_cfg.server.port != defaults.server.port {
        project_cfg.server.port
    } else {
        user.server.port
    };
    merged.server.host = if project_cfg.server.host != defaults.server.host {
        project_cfg.server.host
    } else {
        user.server.host
    };
    merged.server.enable_cors = if project_cfg.server.enable_cors != defaults.server.enable_cors {
        project_cfg.server.enable_cors
    } else {
        user.server.enable_cors
    };

    merged.courses = if !project_cfg.courses.is_empty() {
        project_cfg.courses
    } else {
        user.courses
    };
    merged.professors = if !project_cfg.professors.is_empty() {
        project_cfg.professors
    } else {
        user.professors
    };
    merged.jokes = if !project_cfg.jokes.is_empty() {
        project_cfg.jokes
    } else {
        user.jokes
    };
    merged
}

fn merge_institution(user: Institution, project: Institution, defaults: &Institution) -> Institution {
    let pick = |project: String, user: String, default: &String| {
        if &project != default {
            project
        } else {
            user
        }
    };
    Institution {
        name: pick(project.name, user.name, &defaults.name),
        principal: pick(project.principal, user.principal, &defaults.principal),
        phone: pick(project.phone, user.phone, &defaults.phone),
        email: pick(project.email, user.email, &defaults.email),
        address: pick(project.address, user.address, &defaults.address),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");

    let endpoint = Url::parse(&config.search.endpoint)
        .map_err(CampusError::from)
        .with_context(|| format!("Invalid search endpoint '{}'", config.search.endpoint))?;
    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(anyhow!(CampusError::Config(format!(
            "Search endpoint '{}' must use http or https.",
            config.search.endpoint
        ))));
    }

    if config.server.max_input_length == 0 {
        return Err(anyhow!(CampusError::Config(
            "server.max_input_length must be greater than zero.".to_string()
        )));
    }

    config.host_addr()?;

    config
        .knowledge()
        .validate()
        .context("Configured knowledge tables are invalid")?;

    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            jokes = ["Knock knock."]

            [institution]
            name = "Riverside Institute"

            [server]
            port = 9000

            [[courses]]
            key = "mech"
            name = "Mechanical Engineering"
            duration = "4 years"
            fees = "$13,000/year"
            specializations = ["Robotics"]
            website = "/mech"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.institution.name, "Riverside Institute");
        assert_eq!(config.institution.principal, "Dr. Syed Ariff"); // Default
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_input_length, 200); // Default
        assert!(config.server.enable_cors); // Default
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT); // Default
        assert_eq!(config.courses.len(), 1);
        assert_eq!(config.jokes, vec!["Knock knock."]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[server]\ncolour = \"blue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_knowledge_applies_replacements() {
        let config: Config = toml::from_str(
            r#"
            jokes = ["Only joke."]

            [institution]
            name = "Riverside Institute"
            "#,
        )
        .unwrap();
        let store = config.knowledge();
        assert_eq!(store.institution.name, "Riverside Institute");
        assert_eq!(store.jokes, vec!["Only joke."]);
        assert_eq!(store.courses, KnowledgeStore::builtin().courses); // Kept
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user: Config = toml::from_str(
            r#"
            [institution]
            name = "User College"
            phone = "111"

            [server]
            port = 7000
            "#,
        )
        .unwrap();
        let project: Config = toml::from_str(
            r#"
            [institution]
            name = "Project College"

            [search]
            endpoint = "https://duckduckgo.com/"
            "#,
        )
        .unwrap();

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.institution.name, "Project College");
        assert_eq!(merged.institution.phone, "111");
        assert_eq!(merged.server.port, 7000);
        assert_eq!(merged.search.endpoint, "https://duckduckgo.com/");
    }

    #[test]
    fn test_merge_without_project_returns_user() {
        let user = Config {
            jokes: vec!["a".to_string()],
            ..Default::default()
        };
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_endpoint() {
        let config = Config {
            search: SearchConfig {
                endpoint: "ftp://example.com/search".to_string(),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must use http or https"));
    }

    #[test]
    fn test_validate_config_invalid_host() {
        let config = Config {
            server: ServerSettings {
                host: "localhost:80".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid server host"));
    }

    #[test]
    fn test_validate_config_zero_length_cap() {
        let config = Config {
            server: ServerSettings {
                max_input_length: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_duplicate_professor() {
        let config: Config = toml::from_str(
            r#"
            [[professors]]
            key = "rao"
            name = "Dr. A. Rao"
            department = "Physics"
            qualification = "PhD"
            experience = "10 years"
            email = "rao@example.edu"
            research = "Optics"

            [[professors]]
            key = "rao"
            name = "Dr. B. Rao"
            department = "Chemistry"
            qualification = "PhD"
            experience = "12 years"
            email = "brao@example.edu"
            research = "Catalysis"
            "#,
        )
        .unwrap();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Duplicate professor key 'rao'"));
    }

    #[test]
    fn test_load_config_from_explicit_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("campusbot.toml");
        fs::write(&path, "[institution]\nname = \"Hill College\"\n")?;

        let config = load_config(Some(path.as_path()))?;
        assert_eq!(config.institution.name, "Hill College");
        Ok(())
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let result = load_config(Some(missing.as_path()));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read configuration file"));
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            find_project_config_from(&nested),
            Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_from(&repo), None);
    }
}
