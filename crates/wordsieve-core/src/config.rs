//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `wordsieve.toml` + `wordsieve.<env>.toml` +
//! `WORDSIEVE_*` env vars (`__` separates nested keys). Relative paths are
//! resolved against the directory the config was loaded from.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::MatchMode;

pub const CONFIG_FILE: &str = "wordsieve.toml";
pub const ENV_PREFIX: &str = "WORDSIEVE_";

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Loads from the current directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Loads `wordsieve.toml` and `wordsieve.<env>.toml` from `base_dir`,
    /// then `WORDSIEVE_*` variables on top.
    pub fn load_from(base_dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(base_dir, &env_name)
    }

    pub fn load_for_env(base_dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(base_dir.join(CONFIG_FILE)));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("wordsieve.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("wordsieve.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("wordsieve.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = Self { figment, base_dir: base_dir.to_path_buf() };
        config.settings()?;
        Ok(config)
    }

    /// Typed settings with every path resolved against the config directory.
    pub fn settings(&self) -> Result<Settings> {
        let raw: Settings = self
            .figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        raw.validate()?;
        Ok(raw.resolved(&self.base_dir))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub normalize: NormalizeSettings,
    pub vocabulary: VocabularySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub input_dir: PathBuf,
    pub blocklist_dir: PathBuf,
    pub filtered_dir: PathBuf,
    pub output_dir: PathBuf,
    pub marker_file: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/to_lemmatize"),
            blocklist_dir: PathBuf::from("data/blocklist"),
            filtered_dir: PathBuf::from("data/filtered"),
            output_dir: PathBuf::from("data/vocabulary"),
            marker_file: PathBuf::from("data/done.txt"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    pub workers: usize,
    pub match_mode: MatchMode,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self { workers: 4, match_mode: MatchMode::Token }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularySettings {
    pub chunk_size: usize,
    pub min_word_len: usize,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self { chunk_size: 5000, min_word_len: 2 }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.normalize.workers == 0 {
            return Err(Error::InvalidConfig("normalize.workers must be at least 1".into()));
        }
        if self.vocabulary.chunk_size == 0 {
            return Err(Error::InvalidConfig("vocabulary.chunk_size must be at least 1".into()));
        }
        if self.vocabulary.min_word_len == 0 {
            return Err(Error::InvalidConfig("vocabulary.min_word_len must be at least 1".into()));
        }
        Ok(())
    }

    fn resolved(mut self, base: &Path) -> Self {
        let p = &mut self.paths;
        for path in [&mut p.input_dir, &mut p.blocklist_dir, &mut p.filtered_dir, &mut p.output_dir, &mut p.marker_file] {
            let resolved = resolve_with_base(base, path.to_string_lossy());
            *path = resolved;
        }
        self
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
