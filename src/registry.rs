//! Ordered provider registry.
//!
//! Built once from the default table merged with caller overrides and never
//! mutated afterwards, so a single registry can be shared freely between
//! threads. Providers are tried in insertion order; the first match wins.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::provider::defaults::default_providers;
use crate::provider::ProviderDescriptor;

/// A source successfully attributed to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVideo {
    pub provider: String,
    pub video_id: String,
}

/// A resolved video along with the descriptor that recognized it.
#[derive(Debug, Clone)]
pub struct ProviderMatch<'a> {
    pub video: ResolvedVideo,
    pub descriptor: &'a ProviderDescriptor,
}

/// Provider descriptors indexed by name, in matching order.
#[derive(Debug, Clone)]
pub struct Registry {
    providers: IndexMap<String, ProviderDescriptor>,
}

impl Registry {
    /// Merge `overrides` over the built-in providers.
    ///
    /// Merging is shallow: an override fully replaces the provider of the
    /// same name, keeping that provider's position. New providers are
    /// appended in the order given.
    pub fn new<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, ProviderDescriptor)>,
        K: Into<String>,
    {
        let mut providers = default_providers();
        for (name, descriptor) in overrides {
            providers.insert(name.into(), descriptor);
        }
        Self { providers }
    }

    /// A registry holding exactly `providers`, in the order given.
    pub fn from_providers<I, K>(providers: I) -> Self
    where
        I: IntoIterator<Item = (K, ProviderDescriptor)>,
        K: Into<String>,
    {
        Self {
            providers: providers
                .into_iter()
                .map(|(name, descriptor)| (name.into(), descriptor))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.providers.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderDescriptor)> {
        self.providers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Find the first provider whose pattern matches `source`.
    ///
    /// Returns `Ok(None)` when nothing matches. Malformed descriptors raise
    /// only when they are reached.
    pub fn identify(&self, source: &str) -> Result<Option<ResolvedVideo>> {
        Ok(self.lookup(source)?.map(|found| found.video))
    }

    /// Like [`identify`](Self::identify), but also hands back the descriptor
    /// that matched.
    pub fn lookup(&self, source: &str) -> Result<Option<ProviderMatch<'_>>> {
        for (name, descriptor) in &self.providers {
            if let Some(video_id) = descriptor.video_id(name, source)? {
                debug!(provider = %name, video_id = %video_id, "identified video");
                return Ok(Some(ProviderMatch {
                    video: ResolvedVideo {
                        provider: name.clone(),
                        video_id,
                    },
                    descriptor,
                }));
            }
        }

        debug!("no provider matched source");
        Ok(None)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_providers(default_providers())
    }
}
