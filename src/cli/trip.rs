//! Trip command implementations

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, confirm_delete};
use crate::client::{JournalApi, Trip, TripCreate, TripUpdate};
use crate::error::Result;
use crate::models::{EventDisplay, TripDisplay};
use crate::output::{self, formatters, json, table};

/// Run the trip list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let trips = ctx.client.get_trips().await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&trips)?);
        return Ok(());
    }

    let rows: Vec<TripDisplay> = trips.iter().map(TripDisplay::from).collect();
    output::print_rows(&rows, ctx.format)
}

/// Run the trip get command
pub async fn get(opts: &GlobalOptions, trip_id: i64) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let trip = ctx.client.get_trip(trip_id).await?;
    print_trip(&trip, ctx.format)
}

/// Run the trip create command
pub async fn create(
    opts: &GlobalOptions,
    name: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let request = TripCreate {
        name,
        start_date: start,
        end_date: end,
    };

    let trip = ctx.client.create_trip(&request).await?;
    if ctx.format == OutputFormat::Pretty {
        println!("{} Created trip {}", "✓".green(), trip.id);
    }
    print_trip(&trip, ctx.format)
}

/// Run the trip update command.
///
/// The service replaces the whole trip, so unspecified fields are filled
/// from the current server copy.
pub async fn update(
    opts: &GlobalOptions,
    trip_id: i64,
    name: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let current = ctx.client.get_trip(trip_id).await?;

    let mut request = TripUpdate::from(&current);
    if let Some(name) = name {
        request.name = name;
    }
    if let Some(start) = start {
        request.start_date = start;
    }
    if let Some(end) = end {
        request.end_date = end;
    }

    let trip = ctx.client.update_trip(trip_id, &request).await?;
    if ctx.format == OutputFormat::Pretty {
        println!("{} Updated trip {}", "✓".green(), trip.id);
    }
    print_trip(&trip, ctx.format)
}

/// Run the trip delete command
pub async fn delete(opts: &GlobalOptions, trip_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    if !confirm_delete(&format!("trip {} and all of its events", trip_id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.client.delete_trip(trip_id).await?;
    println!("{} Deleted trip {}", "✓".green(), trip_id);
    Ok(())
}

fn print_trip(trip: &Trip, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(trip)?),
        OutputFormat::Table => {
            println!("{}", table::format_table(&[TripDisplay::from(trip)]));
            if !trip.events.is_empty() {
                let events: Vec<EventDisplay> = trip.events.iter().map(EventDisplay::from).collect();
                println!("{}", table::format_table(&events));
            }
        }
        OutputFormat::Pretty => print_trip_pretty(trip),
    }
    Ok(())
}

fn print_trip_pretty(trip: &Trip) {
    println!();
    println!("{} {}", trip.name.bold(), format!("#{}", trip.id).dimmed());
    println!(
        "{} → {}",
        formatters::format_date_local(&trip.start_date),
        formatters::format_date_local(&trip.end_date)
    );
    println!();

    if trip.events.is_empty() {
        println!("{}", "No events yet.".dimmed());
        println!();
        return;
    }

    for event in &trip.events {
        if let Some(transition) = event.transition_from_previous.as_deref() {
            println!("  {} {}", "↓".dimmed(), transition.dimmed());
        }
        println!(
            "  {} {} {}",
            formatters::format_date_local(&event.date).cyan(),
            event.name.bold(),
            format!("#{}", event.id).dimmed()
        );
        if event.location.is_some() {
            println!(
                "      {}",
                formatters::format_location(event.location.as_ref())
            );
        }
        if let Some(note) = event.note.as_deref().filter(|n| !n.is_empty()) {
            println!("      {}", note);
        }
        if !event.medias.is_empty() {
            let ids: Vec<String> = event.medias.iter().map(|m| m.id.to_string()).collect();
            println!("      media: {}", ids.join(", ").dimmed());
        }
    }
    println!();
}
