use anyhow::{Context, Result};

use multiplayer::{Multiplayer, OptionSet, OptionValue};

pub struct EmbedArgs<'a> {
    pub source: &'a str,
    pub set: &'a [String],
    pub options_json: Option<&'a str>,
    pub wrapper: Option<&'a str>,
    pub layout: &'a [String],
    pub url_only: bool,
}

pub fn cmd_embed(multiplayer: &Multiplayer, args: &EmbedArgs<'_>) -> Result<()> {
    let mut options = match args.options_json {
        Some(json) => serde_json::from_str::<OptionSet>(json)
            .context("--options must be a JSON object of scalar values")?,
        None => OptionSet::new(),
    };
    for (name, value) in parse_option_args(args.set)? {
        options.insert(name, value);
    }

    if args.url_only {
        let url = multiplayer.embed_url(args.source, &options)?;
        println!("{}", url.as_deref().unwrap_or(args.source));
        return Ok(());
    }

    let layout: Vec<&str> = args.layout.iter().map(String::as_str).collect();
    let wrapper = args.wrapper.unwrap_or(multiplayer.default_wrapper());
    let html = multiplayer.html_with(args.source, &options, wrapper, &layout)?;
    println!("{html}");

    Ok(())
}

/// Parse option arguments from CLI (e.g., "autoPlay=true")
pub fn parse_option_args(option_args: &[String]) -> Result<Vec<(String, OptionValue)>> {
    option_args
        .iter()
        .map(|arg| match arg.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                Ok((name.to_string(), OptionValue::parse_cli(value)))
            }
            _ => anyhow::bail!("Invalid option format: '{arg}'. Expected 'name=value'"),
        })
        .collect()
}
