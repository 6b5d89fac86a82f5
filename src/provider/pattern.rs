//! Identification pattern compilation.
//!
//! Provider tables written for PCRE-style engines wrap their expressions in
//! delimiters with trailing flags, e.g. `#vimeo\.com/(?<id>[0-9]+)#i`. Both
//! that form and a bare Rust regex are accepted here.

use regex::Regex;

use crate::error::{MultiplayerError, Result};

/// Characters accepted as pattern delimiters.
const DELIMITERS: &[char] = &['#', '/', '~', '!', '@', '%', ';', ',', '`'];

/// Trailing modifiers understood after the closing delimiter.
const FLAGS: &str = "imsxUu";

/// Name of the capture group holding the video id.
pub const ID_GROUP: &str = "id";

/// Compile `raw` into a regex that is guaranteed to declare an `id` group.
pub fn compile(provider: &str, raw: &str) -> Result<Regex> {
    let expression = match split_delimited(raw) {
        Some((body, flags)) => with_inline_flags(body, flags),
        None => raw.to_string(),
    };

    let regex = Regex::new(&expression).map_err(|source| MultiplayerError::InvalidPattern {
        provider: provider.to_string(),
        source,
    })?;

    if !regex.capture_names().any(|name| name == Some(ID_GROUP)) {
        return Err(MultiplayerError::invalid_config(
            provider,
            format!("pattern '{raw}' has no '{ID_GROUP}' capture group"),
        ));
    }

    Ok(regex)
}

/// Split `#body#flags` into its body and flags.
///
/// Returns `None` for bare expressions. Text after the last delimiter that is
/// not made of known flags means the expression is bare, as in
/// `/video/(?<id>\d+)/embed`.
fn split_delimited(raw: &str) -> Option<(&str, &str)> {
    let delimiter = raw.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let end = raw.rfind(delimiter)?;
    if end == 0 {
        return None;
    }

    let flags = &raw[end + 1..];
    if !flags.chars().all(|c| FLAGS.contains(c)) {
        return None;
    }

    Some((&raw[delimiter.len_utf8()..end], flags))
}

fn with_inline_flags(body: &str, flags: &str) -> String {
    let mut inline = String::new();
    // `u` is dropped: patterns always run on UTF-8 text.
    for flag in flags.chars().filter(|&c| c != 'u') {
        if !inline.contains(flag) {
            inline.push(flag);
        }
    }

    if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{inline}){body}")
    }
}
