use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const SCORE_FILE_ENV_VAR: &str = "CHEF_SCORE_FILE";
pub const CATALOG_CSV_ENV_VAR: &str = "CHEF_CATALOG_CSV";
pub const LOG_LEVEL_ENV_VAR: &str = "CHEF_LOG_LEVEL";
pub const SEED_ENV_VAR: &str = "CHEF_SEED";

const DEFAULT_SCORE_FILE: &str = "chef_score.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved runtime settings for the command-line host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    pub score_file: PathBuf,
    /// Catalog CSV to load instead of the built-in recipes.
    pub catalog_csv: Option<PathBuf>,
    pub log_level: String,
    /// Fixed seed for the chef's random choices.
    pub seed: Option<u64>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            catalog_csv: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed: None,
        }
    }
}

impl KitchenConfig {
    /// Loads `.env` if present, then reads settings from the environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed = non_empty(SEED_ENV_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer, got '{}'", SEED_ENV_VAR, raw))
            })
            .transpose()?;

        Ok(Self {
            score_file: non_empty(SCORE_FILE_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.score_file),
            catalog_csv: non_empty(CATALOG_CSV_ENV_VAR).map(PathBuf::from),
            log_level: non_empty(LOG_LEVEL_ENV_VAR).unwrap_or(defaults.log_level),
            seed,
        })
    }

    /// Applies values given on the command line, which win over the environment.
    pub fn with_overrides(
        mut self,
        score_file: Option<PathBuf>,
        catalog_csv: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(path) = score_file {
            self.score_file = path;
        }
        if catalog_csv.is_some() {
            self.catalog_csv = catalog_csv;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
