//! The embed engine.
//!
//! Each call runs `identify → translate → build url → wrap`. When no
//! provider recognizes the source it is returned unchanged.

use tracing::debug;

use crate::error::Result;
use crate::options::OptionSet;
use crate::provider::ProviderDescriptor;
use crate::registry::{Registry, ResolvedVideo};
use crate::template::{build_url, wrap, DEFAULT_WRAPPER};
use crate::translate::{translate, EmptinessPolicy};

/// Builds HTML embed codes for videos.
///
/// Immutable once built; share it by reference (or behind an `Arc`) between
/// threads.
///
/// # Example
///
/// ```rust
/// use multiplayer::{GenericOption, Multiplayer, OptionSet};
///
/// let multiplayer = Multiplayer::default();
/// let options = OptionSet::new().set(GenericOption::AutoPlay, true);
///
/// let html = multiplayer
///     .html_with("https://vimeo.com/76979871", &options, "%s", &[])
///     .unwrap();
/// assert_eq!(html, "http://player.vimeo.com/video/76979871?autoplay=1");
/// ```
#[derive(Debug, Clone)]
pub struct Multiplayer {
    registry: Registry,
    wrapper: String,
    policy: EmptinessPolicy,
    defaults: OptionSet,
}

impl Multiplayer {
    /// An engine whose registry is the defaults merged with `overrides`.
    pub fn new<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, ProviderDescriptor)>,
        K: Into<String>,
    {
        Self::with_registry(Registry::new(overrides))
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            wrapper: DEFAULT_WRAPPER.to_string(),
            policy: EmptinessPolicy::default(),
            defaults: OptionSet::new(),
        }
    }

    /// Replace the wrapper used by [`html`](Self::html).
    #[must_use]
    pub fn wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: EmptinessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Options applied to every embed unless the caller sets them too.
    #[must_use]
    pub fn defaults(mut self, defaults: OptionSet) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn default_wrapper(&self) -> &str {
        &self.wrapper
    }

    pub fn resolve(&self, source: &str) -> Result<Option<ResolvedVideo>> {
        self.registry.identify(source)
    }

    /// The player URL for `source`, or `None` when no provider matches.
    pub fn embed_url(&self, source: &str, options: &OptionSet) -> Result<Option<String>> {
        let Some(found) = self.registry.lookup(source)? else {
            return Ok(None);
        };
        let (video, descriptor) = (found.video, found.descriptor);

        let options = options.with_defaults(&self.defaults);
        let params = translate(&descriptor.map, &options, self.policy);
        let url_template = descriptor.url_template(&video.provider)?;
        let url = build_url(&video.provider, url_template, &video.video_id, &params)?;
        debug!(provider = %video.provider, %url, "built player url");

        Ok(Some(url))
    }

    /// Build an embed code with the configured wrapper.
    pub fn html(&self, source: &str, options: &OptionSet) -> Result<String> {
        self.html_with(source, options, &self.wrapper, &[])
    }

    /// Build an embed code with an explicit wrapper.
    ///
    /// The wrapper's first `%s` receives the player URL; the following slots
    /// receive `layout` values (width, height, class...) in order.
    pub fn html_with(
        &self,
        source: &str,
        options: &OptionSet,
        wrapper: &str,
        layout: &[&str],
    ) -> Result<String> {
        match self.embed_url(source, options)? {
            Some(url) => wrap(wrapper, &url, layout),
            None => Ok(source.to_string()),
        }
    }
}

impl Default for Multiplayer {
    fn default() -> Self {
        Self::with_registry(Registry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MultiplayerError;
    use crate::options::GenericOption;

    fn service() -> ProviderDescriptor {
        ProviderDescriptor::new(
            r"#service\.com/video/(?<id>[0-9]+)#i",
            "http://service.com/player/%s",
        )
        .map_param(GenericOption::AutoPlay, "play")
        .map_param(GenericOption::ShowInfos, vec!["title", "author"])
        .map_param(GenericOption::HighlightColor, "color")
    }

    #[test]
    fn unmatched_source_is_returned_unchanged() {
        let multiplayer = Multiplayer::new([("service", service())]);
        let source = "<p>not a video</p>";
        assert_eq!(multiplayer.html(source, &OptionSet::new()).unwrap(), source);
        assert_eq!(
            multiplayer.embed_url(source, &OptionSet::new()).unwrap(),
            None
        );
    }

    #[test]
    fn default_wrapper_is_an_iframe() {
        let multiplayer = Multiplayer::new([("service", service())]);
        assert_eq!(
            multiplayer
                .html("service.com/video/42", &OptionSet::new())
                .unwrap(),
            r#"<iframe src="http://service.com/player/42" frameborder="0" webkitAllowFullScreen mozallowfullscreen allowFullScreen></iframe>"#
        );
    }

    #[test]
    fn configured_wrapper_and_layout() {
        let multiplayer =
            Multiplayer::new([("service", service())]).wrapper(r#"<embed src="%s">"#);
        assert_eq!(
            multiplayer
                .html("service.com/video/42", &OptionSet::new())
                .unwrap(),
            r#"<embed src="http://service.com/player/42">"#
        );

        let html = multiplayer
            .html_with(
                "service.com/video/42",
                &OptionSet::new(),
                r#"<iframe src="%s" width="%s" height="%s"></iframe>"#,
                &["640", "360"],
            )
            .unwrap();
        assert_eq!(
            html,
            r#"<iframe src="http://service.com/player/42" width="640" height="360"></iframe>"#
        );
    }

    #[test]
    fn missing_layout_values_are_an_error() {
        let multiplayer = Multiplayer::new([("service", service())]);
        let err = multiplayer
            .html_with("service.com/video/42", &OptionSet::new(), "%s %s", &[])
            .unwrap_err();
        assert!(matches!(err, MultiplayerError::TemplateArity { .. }));
    }

    #[test]
    fn malformed_override_fails_at_use() {
        let mut broken = ProviderDescriptor::new(r"#service\.com/video/(?<id>[0-9]+)#", "");
        broken.url = None;
        let multiplayer = Multiplayer::new([("service", broken)]);

        let err = multiplayer
            .html("service.com/video/42", &OptionSet::new())
            .unwrap_err();
        assert!(matches!(err, MultiplayerError::InvalidConfiguration { .. }));
        assert!(multiplayer
            .html("https://vimeo.com/1", &OptionSet::new())
            .is_ok());
    }

    #[test]
    fn construction_defaults_apply_under_caller_options() {
        let defaults = OptionSet::new()
            .set(GenericOption::AutoPlay, true)
            .set("wmode", "opaque");
        let multiplayer = Multiplayer::new([("service", service())]).defaults(defaults);

        assert_eq!(
            multiplayer
                .embed_url("service.com/video/42", &OptionSet::new())
                .unwrap()
                .as_deref(),
            Some("http://service.com/player/42?play=1&wmode=opaque")
        );

        let options = OptionSet::new().set(GenericOption::AutoPlay, false);
        assert_eq!(
            multiplayer
                .embed_url("service.com/video/42", &options)
                .unwrap()
                .as_deref(),
            Some("http://service.com/player/42?wmode=opaque")
        );
    }

    #[test]
    fn unset_only_policy_keeps_false_values() {
        let multiplayer = Multiplayer::default().policy(EmptinessPolicy::UnsetOnly);
        let options = OptionSet::new().set(GenericOption::AutoPlay, false);
        assert_eq!(
            multiplayer
                .embed_url("https://youtu.be/abc", &options)
                .unwrap()
                .as_deref(),
            Some("http://www.youtube-nocookie.com/embed/abc?autoplay=0")
        );
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let multiplayer = std::sync::Arc::new(Multiplayer::default());
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let multiplayer = std::sync::Arc::clone(&multiplayer);
                std::thread::spawn(move || {
                    multiplayer
                        .html_with(&format!("https://vimeo.com/{n}"), &OptionSet::new(), "%s", &[])
                        .unwrap()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap(),
                format!("http://player.vimeo.com/video/{n}")
            );
        }
    }
}
