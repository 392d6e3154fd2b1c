use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "classlink.toml";

/// Deep link settings, usually read from `classlink.toml`.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct LinkConfig {
    /// URL prefixes removed from incoming links before decoding,
    /// e.g. `https://classes.example.edu/` or `classlink://`.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Prepended to encoded paths when a full URL is wanted.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to load data from `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LinkConfig {
    pub fn load<T>(source_path: T) -> Result<LinkConfig, ConfigError>
    where
        T: AsRef<Path>,
    {
        let mut filename = source_path.as_ref().to_path_buf();
        filename.push(CONFIG_FILE_NAME);

        let contents = std::fs::read_to_string(&filename).map_err(|source| ConfigError::Read {
            path: filename.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: filename,
            source,
        })
    }

    /// Removes the longest matching configured prefix, if any.
    pub fn strip_prefix<'a>(&self, link: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .filter_map(|prefix| link.strip_prefix(prefix.as_str()))
            .min_by_key(|rest| rest.len())
            .unwrap_or(link)
    }

    /// Joins `base_url` and `path` with exactly one `/`.
    pub fn join_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

impl FromStr for LinkConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
