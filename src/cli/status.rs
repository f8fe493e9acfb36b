//! Status command implementation

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::{formatters, json};

/// Status report for JSON output
#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_found: bool,
    api_host: String,
    username: Option<String>,
    authenticated: bool,
    session_expired: bool,
    expires_in_seconds: Option<i64>,
}

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.client.session();
    let token = session.current_token();
    let remaining = token
        .as_ref()
        .and_then(|t| t.expiration_date)
        .map(|at| at.signed_duration_since(Utc::now()));

    let report = StatusReport {
        config_path: ctx.config_path.display().to_string(),
        config_found: ctx.config_path.exists(),
        api_host: ctx.client.base_url().to_string(),
        username: ctx.config.username.clone(),
        authenticated: token.is_some(),
        session_expired: session.expired_at_startup(),
        expires_in_seconds: remaining.map(|r| r.num_seconds()),
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "TripJournal Status".bold());

    if report.config_found {
        println!("Config file: {}", report.config_path.cyan());
    } else {
        println!(
            "Config file: {} {}",
            report.config_path.cyan(),
            "(not created yet, using defaults)".dimmed()
        );
    }
    println!("API host: {}", report.api_host.cyan());
    println!();

    match (&report.username, report.authenticated) {
        (Some(name), true) => {
            let lifetime = remaining
                .map(formatters::format_remaining)
                .unwrap_or_else(|| "no expiry recorded".to_string());
            println!(
                "{} Logged in as {} (expires in {})",
                "✓".green(),
                name.bold(),
                lifetime
            );
        }
        (None, true) => println!("{} Logged in", "✓".green()),
        (_, false) if report.session_expired => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Run 'tripjournal login' to start a new one");
        }
        (_, false) => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'tripjournal login' or 'tripjournal register'");
        }
    }

    println!();
    Ok(())
}
