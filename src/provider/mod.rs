//! Provider descriptors.
//!
//! A provider is described by data only: an identification pattern, a player
//! URL template, and a [`ParameterMap`] translating generic options into the
//! provider's own query parameters.
//!
//! # Configuration
//!
//! Descriptors deserialize from TOML (see [`crate::config`]):
//!
//! ```toml
//! [providers.service]
//! id = '#service\.com/video/(?<id>[0-9]+)#i'
//! url = "http://service.com/player/%s"
//!
//! [providers.service.map]
//! autoPlay = "play"                                   # rename
//! showInfos = ["title", "author"]                     # fan-out
//! highlightColor = { param = "color", prefix = "#" }  # prefixed rename
//! ```

pub mod defaults;
pub mod pattern;

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MultiplayerError, Result};
use crate::options::GenericOption;

/// How a generic option becomes provider parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    /// Direct rename to a single parameter.
    Rename(String),
    /// Same value assigned to every listed parameter.
    FanOut(Vec<String>),
    /// Rename with an optional prefix on truthy values (e.g. `#` for colors).
    ///
    /// A rule without `param` is inert: the option is silently dropped.
    Prefixed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        param: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
}

impl TargetSpec {
    pub fn rename(param: impl Into<String>) -> Self {
        TargetSpec::Rename(param.into())
    }

    pub fn fan_out<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetSpec::FanOut(params.into_iter().map(Into::into).collect())
    }

    pub fn prefixed(param: impl Into<String>, prefix: impl Into<String>) -> Self {
        TargetSpec::Prefixed {
            param: Some(param.into()),
            prefix: Some(prefix.into()),
        }
    }

    /// Parameter names this rule writes to.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            TargetSpec::Rename(param) => vec![param.as_str()],
            TargetSpec::FanOut(params) => params.iter().map(String::as_str).collect(),
            TargetSpec::Prefixed { param, .. } => param.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for TargetSpec {
    fn from(param: &str) -> Self {
        TargetSpec::rename(param)
    }
}

impl From<Vec<&str>> for TargetSpec {
    fn from(params: Vec<&str>) -> Self {
        TargetSpec::fan_out(params)
    }
}

/// Generic option → provider rule, in declaration order.
pub type ParameterMap = IndexMap<GenericOption, TargetSpec>;

/// Everything needed to recognize and embed one provider's videos.
///
/// Missing fields are tolerated at construction and reported as
/// [`MultiplayerError::InvalidConfiguration`] the first time they are needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderDescriptor {
    /// Identification pattern, with a named `id` group.
    #[serde(default, alias = "pattern", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Player URL template with a single `%s` slot for the video id.
    #[serde(default, alias = "player", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub map: ParameterMap,
    #[serde(skip)]
    compiled: OnceCell<Regex>,
}

impl ProviderDescriptor {
    pub fn new(pattern: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Some(pattern.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Replace the whole parameter map.
    #[must_use]
    pub fn with_map(mut self, map: ParameterMap) -> Self {
        self.map = map;
        self
    }

    /// Add (or replace) the rule for one generic option.
    #[must_use]
    pub fn map_param(mut self, option: GenericOption, target: impl Into<TargetSpec>) -> Self {
        self.map.insert(option, target.into());
        self
    }

    /// Extract the video id from `source`, compiling the pattern on first use.
    ///
    /// `provider` is only used for error context.
    pub fn video_id(&self, provider: &str, source: &str) -> Result<Option<String>> {
        let regex = self.regex(provider)?;
        let Some(caps) = regex.captures(source) else {
            return Ok(None);
        };

        match caps.name(pattern::ID_GROUP) {
            Some(id) => Ok(Some(id.as_str().to_string())),
            None => Err(MultiplayerError::invalid_config(
                provider,
                "pattern matched without capturing an id",
            )),
        }
    }

    /// The player URL template, or an error when the descriptor has none.
    pub fn url_template(&self, provider: &str) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| MultiplayerError::invalid_config(provider, "missing player url"))
    }

    fn regex(&self, provider: &str) -> Result<&Regex> {
        self.compiled.get_or_try_init(|| {
            let raw = self.id.as_deref().ok_or_else(|| {
                MultiplayerError::invalid_config(provider, "missing identification pattern")
            })?;
            pattern::compile(provider, raw)
        })
    }
}
