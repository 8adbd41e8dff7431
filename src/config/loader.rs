//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading CLT rules
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CltRules, RegimesFile, RulesFile};

/// Loads and provides access to CLT rule configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── rules.yaml    # Night window, night hour, break rules, daily cap
/// └── regimes.yaml  # Weekly limit, per-regime distribution, monthly conventions
/// ```
///
/// # Example
///
/// ```no_run
/// use jornada_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Night hour: {} minutes", loader.rules().night.night_hour_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: CltRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A value breaks one of the invariants checked by [`CltRules::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules_file = Self::load_yaml::<RulesFile>(&path.join("rules.yaml"))?;
        let regimes_file = Self::load_yaml::<RegimesFile>(&path.join("regimes.yaml"))?;

        let rules = CltRules::from_files(rules_file, regimes_file)?;
        tracing::debug!(path = %path.display(), "Loaded CLT rules");

        Ok(Self { rules })
    }

    /// Wraps an already-built rule set after validating it.
    pub fn from_rules(rules: CltRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &CltRules {
        &self.rules
    }

    /// Consumes the loader and returns the rules.
    pub fn into_rules(self) -> CltRules {
        self.rules
    }
}
