//! Media command implementations

use std::path::Path;

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, confirm_delete};
use crate::client::{JournalApi, MediaCreate};
use crate::error::{Error, Result};
use crate::models::MediaDisplay;
use crate::output::{self, json};

/// Run the media create command: upload `file` to an event
pub async fn create(
    opts: &GlobalOptions,
    event_id: i64,
    file: &Path,
    caption: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let data = std::fs::read(file)
        .map_err(|e| Error::Other(format!("Cannot read {}: {}", file.display(), e)))?;
    log::debug!("Uploading {} ({} bytes)", file.display(), data.len());

    let request = MediaCreate {
        event_id,
        data,
        caption,
    };
    let media = ctx.client.create_media(&request).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&media)?),
        OutputFormat::Table => output::print_rows(&[MediaDisplay::from(&media)], ctx.format)?,
        OutputFormat::Pretty => {
            println!(
                "{} Uploaded media {} to event {}",
                "✓".green(),
                media.id,
                event_id
            );
            if let Some(url) = &media.url {
                println!("  {}", url.as_str().cyan());
            }
        }
    }
    Ok(())
}

/// Run the media delete command
pub async fn delete(opts: &GlobalOptions, media_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    if !confirm_delete(&format!("media {}", media_id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.client.delete_media(media_id).await?;
    println!("{} Deleted media {}", "✓".green(), media_id);
    Ok(())
}
