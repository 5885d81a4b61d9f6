use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::Path,
    str::FromStr,
};
use toml::{value::Table, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Configuration for the scaffolder itself.
    pub scaffold: ScaffoldConfig,

    /// Any remaining configuration, retained for other tooling.
    rest: Value,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open config file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read config file")?;

        Config::from_str(&buffer)
    }

    /// Load `scaffold.toml` from the given root directory, falling
    /// back to defaults when the file is absent.
    pub fn load_or_default(root: impl AsRef<Path>) -> Result<Config> {
        let location = root.as_ref().join("scaffold.toml");

        if location.exists() {
            Config::load(location)
        } else {
            Ok(Config::default())
        }
    }

    /// Deserialize a retained configuration section by its table name.
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self
            .rest
            .get(key)
            .with_context(|| format!("Missing configuration section: {key}"))?;

        value
            .clone()
            .try_into()
            .with_context(|| format!("Failed to deserialize configuration section: {key}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scaffold: ScaffoldConfig::default(),
            rest: Value::Table(Table::default()),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Value::deserialize(deserializer)?;
        let Value::Table(mut table) = raw else {
            return Err(D::Error::custom("scaffold.toml must always be a toml table"));
        };

        let scaffold: ScaffoldConfig = table
            .remove("scaffold")
            .map(|scaffold| scaffold.try_into().map_err(D::Error::custom))
            .transpose()?
            .unwrap_or_default();

        let config = Config {
            scaffold,
            rest: Value::Table(table),
        };

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Directory under the site root that receives generated content.
    pub content_dir: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            content_dir: String::from("content"),
        }
    }
}
