//! Startup configuration.
//!
//! The credential is read exactly once, before any request path exists, and
//! then travels as an explicit [`Settings`] value into the backend builder.
use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use adcopy_core::error::Result;
use adcopy_openai::{OpenAiAdapter, OpenAiAdapterBuilder};
use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found. Please add your OpenAI API key to the .env file.")]
    MissingApiKey,

    #[error("failed to load environment file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Values the generator needs, loaded once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_key: String,
    base_url: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let base_url = non_blank(BASE_URL_VAR);

        Ok(Self { api_key, base_url })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Build the OpenAI backend from these settings.
    pub fn backend(&self) -> Result<OpenAiAdapter> {
        let builder = OpenAiAdapterBuilder::new().with_api_key(self.api_key.clone());
        let builder = match &self.base_url {
            Some(base_url) => builder.with_base_url(base_url.clone()),
            None => builder,
        };
        builder.build()
    }
}

/// Load `KEY=value` pairs into the process environment.
///
/// With an explicit `path` the file must exist. Otherwise `.env` is looked
/// up from the working directory upwards and silently skipped when absent.
/// Variables already set in the environment win over the file.
pub fn load_env_file(path: Option<&Path>) -> std::result::Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => dotenvy::from_path(path)
            .map(|()| Some(path.to_path_buf()))
            .map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            }),
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(err) if err.not_found() => Ok(None),
            Err(source) => Err(ConfigError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
        },
    }
}
