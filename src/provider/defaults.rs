//! Built-in providers: Dailymotion, Vimeo and `YouTube`, in that order.

use indexmap::IndexMap;

use super::{ProviderDescriptor, TargetSpec};
use crate::options::GenericOption;

/// Names of the built-in providers, in registration order.
pub const DEFAULT_PROVIDER_NAMES: [&str; 3] = ["dailymotion", "vimeo", "youtube"];

/// A fresh copy of the built-in provider table.
pub fn default_providers() -> IndexMap<String, ProviderDescriptor> {
    let mut providers = IndexMap::new();
    providers.insert("dailymotion".to_string(), dailymotion());
    providers.insert("vimeo".to_string(), vimeo());
    providers.insert("youtube".to_string(), youtube());
    providers
}

fn dailymotion() -> ProviderDescriptor {
    ProviderDescriptor::new(
        r"#dailymotion\.com/(?:embed/)?video/(?<id>[a-z0-9]+)#i",
        "http://www.dailymotion.com/embed/video/%s",
    )
    .map_param(GenericOption::AutoPlay, "autoplay")
    .map_param(GenericOption::ShowInfos, "info")
    .map_param(GenericOption::ShowBranding, "logo")
    .map_param(GenericOption::ShowRelated, "related")
    .map_param(
        GenericOption::BackgroundColor,
        TargetSpec::prefixed("background", "#"),
    )
    .map_param(
        GenericOption::ForegroundColor,
        TargetSpec::prefixed("foreground", "#"),
    )
    .map_param(
        GenericOption::HighlightColor,
        TargetSpec::prefixed("highlight", "#"),
    )
    .map_param(GenericOption::Start, "start")
}

fn vimeo() -> ProviderDescriptor {
    ProviderDescriptor::new(
        r"#vimeo\.com/(?:video/)?(?<id>[0-9]+)#i",
        "http://player.vimeo.com/video/%s",
    )
    .map_param(GenericOption::AutoPlay, "autoplay")
    .map_param(GenericOption::ShowInfos, vec!["byline", "portrait"])
    .map_param(GenericOption::HighlightColor, "color")
}

fn youtube() -> ProviderDescriptor {
    ProviderDescriptor::new(
        r"#(?:v=|v/|embed/|youtu\.be/)(?<id>[a-z0-9_-]+)#i",
        "http://www.youtube-nocookie.com/embed/%s",
    )
    .map_param(GenericOption::AutoPlay, "autoplay")
    .map_param(GenericOption::ShowInfos, "showinfo")
    .map_param(GenericOption::ShowRelated, "rel")
    .map_param(GenericOption::Start, "start")
}
