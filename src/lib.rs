//! `multiplayer` - Normalized HTML embed codes for video hosting services
//!
//! # Features
//!
//! - **Provider resolution**: recognizes Dailymotion, Vimeo and `YouTube` URLs
//!   (or existing embed snippets) and extracts the video id
//! - **Option translation**: one generic option set (autoplay, colors, start
//!   offset...) mapped to each provider's own query parameters
//! - **Overridable registry**: add or replace providers in code or from a
//!   TOML file
//!
//! # Example
//!
//! ```rust
//! use multiplayer::{GenericOption, Multiplayer, OptionSet};
//!
//! let multiplayer = Multiplayer::default();
//! let options = OptionSet::new()
//!     .set(GenericOption::AutoPlay, true)
//!     .set(GenericOption::HighlightColor, "ffcc00");
//!
//! let html = multiplayer
//!     .html("http://www.dailymotion.com/video/x7tgad0", &options)
//!     .unwrap();
//! assert!(html.contains("embed/video/x7tgad0?autoplay=1&highlight=%23ffcc00"));
//!
//! // Unknown sources come back untouched.
//! assert_eq!(multiplayer.html("hello", &options).unwrap(), "hello");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod options;
pub mod provider;
pub mod registry;
pub mod template;
pub mod translate;

pub use config::Config;
pub use engine::Multiplayer;
pub use error::{MultiplayerError, Result};
pub use options::{GenericOption, OptionSet, OptionValue};
pub use provider::{ParameterMap, ProviderDescriptor, TargetSpec};
pub use registry::{ProviderMatch, Registry, ResolvedVideo};
pub use template::DEFAULT_WRAPPER;
pub use translate::{translate, EmptinessPolicy, QueryParams};

/// Version of multiplayer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
