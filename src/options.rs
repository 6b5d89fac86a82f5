//! Generic, provider-agnostic player options.
//!
//! Callers describe how a player should behave with a small closed set of
//! [`GenericOption`]s. Each provider translates them into its own query
//! parameters (see [`crate::translate`]). Any other key set on an
//! [`OptionSet`] is an *extra*: it bypasses translation and lands verbatim in
//! the player URL.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A display setting understood by every provider, but only meaningful once mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenericOption {
    /// Whether to start the video as soon as it is loaded.
    AutoPlay,
    /// Whether to show the title, author and similar overlays.
    ShowInfos,
    /// Whether to show the provider's logo.
    ShowBranding,
    /// Whether to show related videos at the end.
    ShowRelated,
    /// Hex code of the player's background color.
    BackgroundColor,
    /// Hex code of the player's foreground color.
    ForegroundColor,
    /// Hex code of the player's highlight color.
    HighlightColor,
    /// Offset in seconds at which playback starts.
    Start,
}

impl GenericOption {
    /// Every generic option, in declaration order.
    pub const ALL: [GenericOption; 8] = [
        GenericOption::AutoPlay,
        GenericOption::ShowInfos,
        GenericOption::ShowBranding,
        GenericOption::ShowRelated,
        GenericOption::BackgroundColor,
        GenericOption::ForegroundColor,
        GenericOption::HighlightColor,
        GenericOption::Start,
    ];

    /// Name used in option sets and provider tables.
    pub fn as_str(self) -> &'static str {
        match self {
            GenericOption::AutoPlay => "autoPlay",
            GenericOption::ShowInfos => "showInfos",
            GenericOption::ShowBranding => "showBranding",
            GenericOption::ShowRelated => "showRelated",
            GenericOption::BackgroundColor => "backgroundColor",
            GenericOption::ForegroundColor => "foregroundColor",
            GenericOption::HighlightColor => "highlightColor",
            GenericOption::Start => "start",
        }
    }

    /// Returns `true` if `name` is one of the generic option names.
    pub fn is_generic(name: &str) -> bool {
        name.parse::<GenericOption>().is_ok()
    }
}

impl fmt::Display for GenericOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenericOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenericOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Returned when parsing a name that is not a [`GenericOption`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown generic option: {0}")]
pub struct UnknownOption(pub String);

/// Value of a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl OptionValue {
    /// Loose truthiness: `false`, `0`, `""` and `"0"` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Int(n) => *n != 0,
            OptionValue::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Rendering used in query strings (`true` → `1`, `false` → `0`).
    pub fn to_query_value(&self) -> String {
        match self {
            OptionValue::Bool(true) => "1".to_string(),
            OptionValue::Bool(false) => "0".to_string(),
            OptionValue::Int(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
        }
    }

    /// Interpret a raw command-line value.
    ///
    /// `true`/`false` become booleans, anything that parses as an integer
    /// becomes an integer, everything else stays text.
    pub fn parse_cli(raw: &str) -> Self {
        match raw {
            "true" => OptionValue::Bool(true),
            "false" => OptionValue::Bool(false),
            _ => raw
                .parse::<i64>()
                .map_or_else(|_| OptionValue::Text(raw.to_string()), OptionValue::Int),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Options for one embed, keyed by name, in insertion order.
///
/// # Example
///
/// ```rust
/// use multiplayer::{GenericOption, OptionSet};
///
/// let options = OptionSet::new()
///     .set(GenericOption::AutoPlay, true)
///     .set("highlightColor", "ff0000")
///     .set("quality", "hd720");
///
/// assert_eq!(options.len(), 3);
/// assert_eq!(options.extras().count(), 1);
/// ```
///
/// Deserializing skips `null` entries, so `{"autoPlay": null}` leaves the
/// option unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Option<OptionValue>>",
    into = "IndexMap<String, OptionValue>"
)]
pub struct OptionSet {
    values: IndexMap<String, OptionValue>,
}

impl OptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn set(mut self, name: impl OptionName, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an option. Re-setting a name keeps its original position.
    pub fn insert(&mut self, name: impl OptionName, value: impl Into<OptionValue>) {
        self.values.insert(name.into_name(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Value of a generic option, if set.
    pub fn generic(&self, option: GenericOption) -> Option<&OptionValue> {
        self.values.get(option.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Options whose names are not generic, in insertion order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.iter().filter(|(name, _)| !GenericOption::is_generic(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// These options layered over `defaults`.
    ///
    /// Every option set here keeps its value and position; defaults that are
    /// not set here follow in their own order.
    #[must_use]
    pub fn with_defaults(&self, defaults: &OptionSet) -> OptionSet {
        let mut merged = self.clone();
        for (name, value) in &defaults.values {
            if !merged.values.contains_key(name) {
                merged.values.insert(name.clone(), value.clone());
            }
        }
        merged
    }
}

impl From<IndexMap<String, Option<OptionValue>>> for OptionSet {
    fn from(raw: IndexMap<String, Option<OptionValue>>) -> Self {
        Self {
            values: raw
                .into_iter()
                .filter_map(|(name, value)| Some((name, value?)))
                .collect(),
        }
    }
}

impl From<OptionSet> for IndexMap<String, OptionValue> {
    fn from(options: OptionSet) -> Self {
        options.values
    }
}

impl<K: OptionName, V: Into<OptionValue>> FromIterator<(K, V)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = OptionSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Anything usable as an option name: a [`GenericOption`] or a raw string.
pub trait OptionName {
    fn into_name(self) -> String;
}

impl OptionName for GenericOption {
    fn into_name(self) -> String {
        self.as_str().to_string()
    }
}

impl OptionName for &str {
    fn into_name(self) -> String {
        self.to_string()
    }
}

impl OptionName for String {
    fn into_name(self) -> String {
        self
    }
}
