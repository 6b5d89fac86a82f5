//! Generic option → provider parameter translation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::options::{OptionSet, OptionValue};
use crate::provider::{ParameterMap, TargetSpec};

/// Provider query parameters, in the order they were produced.
pub type QueryParams = IndexMap<String, String>;

/// Which generic option values are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptinessPolicy {
    /// Skip unset options and falsy ones (`false`, `0`, `""`, `"0"`).
    #[default]
    SkipFalsy,
    /// Skip only unset options; `autoPlay = false` becomes `autoplay=0`.
    UnsetOnly,
}

impl EmptinessPolicy {
    fn skips(self, value: &OptionValue) -> bool {
        match self {
            EmptinessPolicy::SkipFalsy => !value.is_truthy(),
            EmptinessPolicy::UnsetOnly => false,
        }
    }
}

/// Translate `options` through `map`.
///
/// Rules run in `map` order. Option names outside the generic set are then
/// appended untranslated, in `options` order, without overwriting any
/// parameter a rule already produced.
pub fn translate(map: &ParameterMap, options: &OptionSet, policy: EmptinessPolicy) -> QueryParams {
    let mut params = QueryParams::new();

    for (option, target) in map {
        let Some(value) = options.generic(*option) else {
            continue;
        };
        if policy.skips(value) {
            trace!(option = %option, "skipping empty option");
            continue;
        }

        match target {
            TargetSpec::Rename(param) => {
                params.insert(param.clone(), value.to_query_value());
            }
            TargetSpec::FanOut(names) => {
                for name in names {
                    params.insert(name.clone(), value.to_query_value());
                }
            }
            TargetSpec::Prefixed {
                param: Some(param),
                prefix,
            } => {
                let rendered = match prefix {
                    Some(prefix) if value.is_truthy() => {
                        format!("{prefix}{}", value.to_query_value())
                    }
                    _ => value.to_query_value(),
                };
                params.insert(param.clone(), rendered);
            }
            TargetSpec::Prefixed { param: None, .. } => {
                debug!(option = %option, "mapping rule has no param, option dropped");
            }
        }
    }

    for (name, value) in options.extras() {
        if params.contains_key(name) {
            trace!(param = name, "extra option shadowed by mapped parameter");
            continue;
        }
        params.insert(name.to_string(), value.to_query_value());
    }

    params
}
