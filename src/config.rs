//! User configuration: optional JSON file plus environment overrides.
//!
//! Lookup order for every setting is command-line flag, then environment
//! variable (where one exists), then `~/.config/nba-compare/config.json`,
//! then the built-in default.

use crate::{core::compare::DEFAULT_PALETTE, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

/// Environment variable holding the rankings API base URL.
pub const API_URL_ENV_VAR: &str = "NBA_COMPARE_API_URL";

/// Path: ~/.config/nba-compare/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("nba-compare").join("config.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: Option<String>,
    pub palette: Option<Vec<String>>,
    pub default_slots: Option<usize>,
    pub limit: Option<u32>,
}

impl Settings {
    /// Load from [`config_path`]; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from `path`; a missing file yields defaults, a malformed one is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(contents) => {
                debug!("loaded config from {}", path.display());
                Ok(serde_json::from_str(&contents)?)
            }
            None => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Series colours: the configured palette if non-empty, else the default.
    pub fn palette(&self) -> Vec<String> {
        match &self.palette {
            Some(p) if !p.is_empty() => p.clone(),
            _ => DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(crate::api::DEFAULT_LIMIT)
    }
}

/// Resolve the API base URL from flag, [`API_URL_ENV_VAR`], or config.
pub fn resolve_api_url(flag: Option<String>, settings: &Settings) -> Option<String> {
    let non_blank = |url: &String| !url.trim().is_empty();
    flag.filter(non_blank)
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok().filter(non_blank))
        .or_else(|| settings.api_url.clone())
}
