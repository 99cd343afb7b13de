// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ConfigError;
use crate::models::ApiSettings;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Costbook", "costbook"));

pub const ENV_SITE_URL: &str = "COSTBOOK_SITE_URL";
pub const ENV_API_KEY: &str = "COSTBOOK_API_KEY";
pub const ENV_EXPORT_DIR: &str = "COSTBOOK_EXPORT_DIR";

/// Startup configuration. Credentials only ever come from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub site_url: String,
    pub api_key: String,
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::new(self.site_url.clone(), self.api_key.clone())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Overlays values from an environment lookup; empty variables are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.is_empty());
        if let Some(v) = get(ENV_SITE_URL) {
            self.site_url = v;
        }
        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = v;
        }
        if let Some(v) = get(ENV_EXPORT_DIR) {
            self.export_dir = Some(PathBuf::from(v));
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Reads a JSON config file. A missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// File (explicit or platform default), then environment.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    let mut cfg = load_file(&path)?;
    cfg.apply_env(|k| std::env::var(k).ok());
    Ok(cfg)
}
