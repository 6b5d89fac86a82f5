//! Provider configuration loaded from `~/.config/multiplayer/providers.toml`.
//!
//! ```toml
//! wrapper = '<div class="video">%s</div>'
//! policy = "unset-only"
//!
//! [params]
//! wmode = "opaque"
//!
//! [providers.service]
//! id = '#service\.com/video/(?<id>[0-9]+)#i'
//! url = "http://service.com/player/%s"
//!
//! [providers.service.map]
//! autoPlay = "play"
//! showInfos = ["title", "author"]
//! ```
//!
//! Providers named like a built-in one replace it; others are appended in
//! file order. With `replace_defaults = true` only the listed providers are
//! used. `[params]` holds options applied to every embed unless the caller
//! sets them too. Unknown keys are rejected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::engine::Multiplayer;
use crate::options::OptionSet;
use crate::provider::ProviderDescriptor;
use crate::registry::Registry;
use crate::translate::EmptinessPolicy;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Wrapper template used when none is given per call.
    pub wrapper: Option<String>,
    pub policy: EmptinessPolicy,
    /// Default options, overridden per call.
    pub params: OptionSet,
    /// Ignore the built-in providers entirely.
    pub replace_defaults: bool,
    pub providers: IndexMap<String, ProviderDescriptor>,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid provider configuration")
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    pub fn registry(&self) -> Registry {
        let providers = self.providers.clone();
        if self.replace_defaults {
            Registry::from_providers(providers)
        } else {
            Registry::new(providers)
        }
    }

    pub fn into_multiplayer(self) -> Multiplayer {
        let mut multiplayer = Multiplayer::with_registry(self.registry())
            .policy(self.policy)
            .defaults(self.params);
        if let Some(wrapper) = self.wrapper {
            multiplayer = multiplayer.wrapper(wrapper);
        }
        multiplayer
    }
}

/// Return the path to the default configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("multiplayer")
        .join("providers.toml")
}
