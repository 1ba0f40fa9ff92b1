use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::warn;

/// Defaults bundled into the binary, used when no config file is present.
const BUNDLED: &str = include_str!("../resources/config.toml");

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "FOCUS_PROMPT_CONFIG";

pub const INTERVAL_MIN: &str = "interval.min";
pub const INTERVAL_MAX: &str = "interval.max";
pub const SNOOZE_DURATION: &str = "snooze.duration";
pub const PROMPT_MESSAGE: &str = "prompt.message";
pub const PROMPT_HEADER: &str = "prompt.header";
pub const VERBOSE: &str = "verbose";
pub const NOTIFY_ENABLED: &str = "notify.enabled";

pub const DEFAULT_INTERVAL_MIN: i64 = 1800;
pub const DEFAULT_INTERVAL_MAX: i64 = 3600;
pub const DEFAULT_SNOOZE_DURATION: i64 = 300;
pub const DEFAULT_PROMPT_MESSAGE: &str = "Are you wandering off or doing the actionable task?";
pub const DEFAULT_PROMPT_HEADER: &str = "Focus Check";

/// Flat, read-only key/value configuration.
///
/// Nested TOML tables are flattened into dotted keys, so `[interval] min = 10`
/// and `interval.min = 10` are the same entry. Lookups never fail: a missing
/// key or a value that does not parse yields the caller's default.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// A configuration with no entries; every lookup returns its default.
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".config/focus-prompt"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads `$FOCUS_PROMPT_CONFIG`, else the user's config file, else the
    /// bundled defaults. A path named explicitly must exist.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if !path.exists() {
                bail!("{CONFIG_ENV} points at {}, which does not exist", path.display());
            }
            return Self::load_from(&path);
        }

        Self::load_from(&Self::config_path()?)
    }

    /// Reads `config_path`, falling back to the bundled defaults when it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Self::parse(BUNDLED).context("Failed to parse bundled config");
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let table: Table = content.parse()?;
        let mut values = HashMap::new();
        flatten("", &table, &mut values);
        Ok(Self { values })
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key).map(|v| v.trim()) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// `get_int` for durations in seconds; negative values clamp to zero.
    pub fn get_secs(&self, key: &str, default: i64) -> u64 {
        let value = self.get_int(key, default);
        u64::try_from(value).unwrap_or_else(|_| {
            warn!(value, "{key} is negative, using 0");
            0
        })
    }

    pub fn verbose(&self) -> bool {
        self.get_bool(VERBOSE, false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(inner) => flatten(&full_key, inner, out),
            Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}
