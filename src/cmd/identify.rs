use anyhow::Result;

use multiplayer::Multiplayer;

/// Print the provider and video id for `source`.
///
/// Returns `false` when no provider recognizes it.
pub fn cmd_identify(multiplayer: &Multiplayer, source: &str, json: bool) -> Result<bool> {
    let Some(video) = multiplayer.resolve(source)? else {
        if json {
            println!("null");
        }
        eprintln!("No provider matched: {source}");
        return Ok(false);
    };

    if json {
        println!("{}", serde_json::to_string(&video)?);
    } else {
        println!("{} {}", video.provider, video.video_id);
    }

    Ok(true)
}
