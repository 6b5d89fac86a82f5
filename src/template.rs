//! Positional `%s` templates, query encoding and URL/HTML assembly.

use crate::error::{MultiplayerError, Result};
use crate::translate::QueryParams;

/// Wrapper used when the caller does not supply one.
pub const DEFAULT_WRAPPER: &str = r#"<iframe src="%s" frameborder="0" webkitAllowFullScreen mozallowfullscreen allowFullScreen></iframe>"#;

/// Number of `%s` slots in `template` (`%%` is a literal percent sign).
pub fn slot_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('s') => count += 1,
                Some(_) | None => {}
            }
        }
    }
    count
}

/// Fill the `%s` slots of `template` with `args`, in order.
///
/// Surplus arguments are ignored. `%` followed by anything but `s` or `%`
/// is kept as is.
pub fn substitute(template: &str, args: &[&str]) -> Result<String> {
    let expected = slot_count(template);
    if args.len() < expected {
        return Err(MultiplayerError::TemplateArity {
            expected,
            given: args.len(),
        });
    }

    let extra: usize = args.iter().map(|a| a.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut args = args.iter();
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => {
                if let Some(arg) = args.next() {
                    out.push_str(arg);
                }
            }
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }

    Ok(out)
}

/// Encode parameters as `k=v` pairs joined by `&`, percent-encoded, in order.
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Substitute `video_id` into a player URL template and append the query.
///
/// The template must contain exactly one slot.
pub fn build_url(
    provider: &str,
    url_template: &str,
    video_id: &str,
    params: &QueryParams,
) -> Result<String> {
    let slots = slot_count(url_template);
    if slots != 1 {
        return Err(MultiplayerError::invalid_config(
            provider,
            format!("player url '{url_template}' must contain exactly one %s slot, found {slots}"),
        ));
    }

    let mut url = substitute(url_template, &[video_id])?;
    if !params.is_empty() {
        url.push('?');
        url.push_str(&encode_query(params));
    }
    Ok(url)
}

/// Substitute the player URL, then `layout` values, into a wrapper template.
pub fn wrap(wrapper: &str, url: &str, layout: &[&str]) -> Result<String> {
    let mut args = Vec::with_capacity(layout.len() + 1);
    args.push(url);
    args.extend_from_slice(layout);
    substitute(wrapper, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn counts_slots_ignoring_escaped_percent() {
        assert_eq!(slot_count("http://service.com/player/%s"), 1);
        assert_eq!(slot_count("%s %%s %s"), 2);
        assert_eq!(slot_count("no slots"), 0);
    }

    #[test]
    fn substitutes_positionally() {
        let out = substitute(r#"<iframe src="%s" width="%s" height="%s">"#, &["u", "640", "360"])
            .unwrap();
        assert_eq!(out, r#"<iframe src="u" width="640" height="360">"#);
    }

    #[test]
    fn keeps_literal_percent_signs() {
        assert_eq!(substitute("100%% of %s", &["x"]).unwrap(), "100% of x");
        assert_eq!(substitute("a%20b/%s", &["x"]).unwrap(), "a%20b/x");
    }

    #[test]
    fn too_few_arguments_is_an_error() {
        let err = substitute("%s %s", &["only"]).unwrap_err();
        assert!(matches!(
            err,
            MultiplayerError::TemplateArity {
                expected: 2,
                given: 1
            }
        ));
    }

    #[test]
    fn encodes_query_in_order() {
        let query = encode_query(&params(&[("title", "1"), ("color", "#ff0000"), ("q", "a b")]));
        assert_eq!(query, "title=1&color=%23ff0000&q=a%20b");
    }

    #[test]
    fn builds_url_without_query_when_no_params() {
        let url = build_url("service", "http://service.com/player/%s", "42", &QueryParams::new())
            .unwrap();
        assert_eq!(url, "http://service.com/player/42");
    }

    #[test]
    fn builds_url_with_query() {
        let url = build_url(
            "service",
            "http://service.com/player/%s",
            "42",
            &params(&[("play", "1")]),
        )
        .unwrap();
        assert_eq!(url, "http://service.com/player/42?play=1");
    }

    #[test]
    fn url_template_needs_exactly_one_slot() {
        assert!(build_url("service", "http://service.com/player", "42", &QueryParams::new()).is_err());
        assert!(build_url("service", "http://%s/%s", "42", &QueryParams::new()).is_err());
    }

    #[test]
    fn wraps_url_and_layout() {
        let html = wrap(r#"<div class="%s">%s</div>"#, "u", &["video"]).unwrap();
        assert_eq!(html, r#"<div class="u">video</div>"#);
        assert!(DEFAULT_WRAPPER.starts_with(r#"<iframe src="%s""#));
    }
}
