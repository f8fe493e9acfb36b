//! Register, login and logout commands

use std::path::Path;

use colored::Colorize;
use log::warn;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, CredentialArgs, GlobalOptions, OutputFormat};
use crate::client::{Credentials, JournalApi, Token};
use crate::config::Config;
use crate::error::Result;
use crate::output::{formatters, json};

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "TRIPJOURNAL_PASSWORD";

/// Run the register command
pub async fn register(opts: &GlobalOptions, args: &CredentialArgs) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(&ctx, args, true)?;

    let token = ctx.client.register(&credentials).await?;
    remember_username(&mut ctx.config, &ctx.config_path, &credentials.username);

    report(&ctx, "Account created", &credentials.username, &token)
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, args: &CredentialArgs) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(&ctx, args, false)?;

    let token = ctx.client.login(&credentials).await?;
    remember_username(&mut ctx.config, &ctx.config_path, &credentials.username);

    report(&ctx, "Logged in", &credentials.username, &token)
}

/// Run the logout command. Local only: the service is not contacted.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_authenticated = ctx.client.session().is_authenticated();
    ctx.client.logout();

    if was_authenticated {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }
    Ok(())
}

fn prompt_credentials(
    ctx: &CommandContext,
    args: &CredentialArgs,
    confirm: bool,
) -> Result<Credentials> {
    let theme = ColorfulTheme::default();

    let username = match args.username.clone().or_else(|| ctx.config.username.clone()) {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };

    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => {
            let prompt = Password::with_theme(&theme).with_prompt(format!("Password for {}", username));
            if confirm {
                prompt
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?
            } else {
                prompt.interact()?
            }
        }
    };

    Ok(Credentials::new(username, password))
}

/// Save the username as the next default. The session is already stored,
/// so a config write failure only costs the default.
fn remember_username(config: &mut Config, path: &Path, username: &str) {
    if config.username.as_deref() == Some(username) {
        return;
    }

    config.username = Some(username.to_string());
    if let Err(e) = config.save_to(path) {
        warn!("Could not save username to {}: {}", path.display(), e);
    }
}

fn report(ctx: &CommandContext, action: &str, username: &str, token: &Token) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        let body = serde_json::json!({
            "username": username,
            "expiration_date": token.expiration_date,
        });
        println!("{}", json::format_json(&body)?);
        return Ok(());
    }

    let lifetime = token
        .expiration_date
        .map(|at| formatters::format_remaining(at - chrono::Utc::now()))
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "{} {} as {} (session valid for {})",
        "✓".green(),
        action,
        username.bold(),
        lifetime
    );
    Ok(())
}
