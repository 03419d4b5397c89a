use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde_json::{Map, Value, json};
use std::path::Path;

use super::BenchConfig;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Picked up from the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "parbench.toml";

pub const ENV_PREFIX: &str = "PARBENCH_";

/// Values supplied on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threads: Option<usize>,
    pub seed: Option<u64>,
    pub low: Option<i32>,
    pub high: Option<i32>,
    pub minmax_size: Option<usize>,
    pub sort_sizes: Option<Vec<usize>>,
    pub compare_pool: Option<bool>,
}

impl ConfigOverrides {
    /// Nested `{section: {key: value}}` document holding only the set values
    fn to_value(&self) -> Value {
        let mut root = Map::new();
        let mut set = |section: &str, key: &str, value: Value| {
            let entry = root
                .entry(section.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(map) = entry {
                map.insert(key.to_string(), value);
            }
        };

        if let Some(threads) = self.threads {
            set("parallel", "max_threads", json!(threads));
        }
        if let Some(seed) = self.seed {
            set("data", "seed", json!(seed));
        }
        if let Some(low) = self.low {
            set("data", "low", json!(low));
        }
        if let Some(high) = self.high {
            set("data", "high", json!(high));
        }
        if let Some(size) = self.minmax_size {
            set("minmax", "size", json!(size));
        }
        if let Some(sizes) = &self.sort_sizes {
            set("sort", "sizes", json!(sizes));
        }
        if let Some(compare_pool) = self.compare_pool {
            set("sort", "compare_pool", json!(compare_pool));
        }

        Value::Object(root)
    }
}

impl BenchConfig {
    /// Load, merge and validate the configuration
    pub fn load(custom_config: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let figment = Self::figment(custom_config, overrides)?;
        let config: BenchConfig = figment
            .extract()
            .context("Failed to parse parbench configuration")?;

        config.validate()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// The merged provider chain, before extraction
    pub fn figment(custom_config: Option<&Path>, overrides: &ConfigOverrides) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        figment = match custom_config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                tracing::debug!("Using config file {}", path.display());
                merge_file(figment, path)
            }
            None => figment.merge(Toml::file(CONFIG_FILE_NAME)),
        };

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides.to_value())))
    }
}

/// Merge a config file, choosing the format from its extension
fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}
