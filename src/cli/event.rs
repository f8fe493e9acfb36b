//! Event command implementations

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, LocationArgs, OutputFormat, confirm_delete};
use crate::client::{Event, EventCreate, EventUpdate, JournalApi};
use crate::error::{Error, Result};
use crate::models::EventDisplay;
use crate::output::{self, formatters, json};

/// Fields for a new event, as given on the command line
#[derive(Debug)]
pub struct NewEvent {
    pub trip_id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub location: LocationArgs,
    pub transition: Option<String>,
}

/// Fields to change on an existing event
#[derive(Debug)]
pub struct EventChanges {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub location: LocationArgs,
    pub transition: Option<String>,
}

impl EventChanges {
    /// Apply the changes on top of the current event.
    fn apply(self, current: &Event) -> EventUpdate {
        let mut update = EventUpdate::from(current);
        if let Some(name) = self.name {
            update.name = name;
        }
        if let Some(date) = self.date {
            update.date = date;
        }
        if let Some(note) = self.note {
            update.note = Some(note);
        }
        update.location = self.location.merge_onto(current.location.as_ref());
        if let Some(transition) = self.transition {
            update.transition_from_previous = Some(transition);
        }
        update
    }
}

/// Run the event create command
pub async fn create(opts: &GlobalOptions, new: NewEvent) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let request = EventCreate {
        trip_id: new.trip_id,
        name: new.name,
        note: new.note,
        date: new.date,
        location: new.location.to_location(),
        transition_from_previous: new.transition,
    };

    let event = ctx.client.create_event(&request).await?;
    if ctx.format == OutputFormat::Pretty {
        println!(
            "{} Added event {} to trip {}",
            "✓".green(),
            event.id,
            new.trip_id
        );
    }
    print_event(&event, ctx.format)
}

/// Run the event update command.
///
/// Events have no read endpoint of their own; the current copy is taken
/// from the owning trip.
pub async fn update(
    opts: &GlobalOptions,
    event_id: i64,
    trip_id: i64,
    changes: EventChanges,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let trip = ctx.client.get_trip(trip_id).await?;
    let current = trip
        .events
        .iter()
        .find(|e| e.id == event_id)
        .ok_or_else(|| Error::Other(format!("Event {} not found in trip {}", event_id, trip_id)))?;

    let event = ctx
        .client
        .update_event(event_id, &changes.apply(current))
        .await?;
    if ctx.format == OutputFormat::Pretty {
        println!("{} Updated event {}", "✓".green(), event.id);
    }
    print_event(&event, ctx.format)
}

/// Run the event delete command
pub async fn delete(opts: &GlobalOptions, event_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    if !confirm_delete(&format!("event {}", event_id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.client.delete_event(event_id).await?;
    println!("{} Deleted event {}", "✓".green(), event_id);
    Ok(())
}

fn print_event(event: &Event, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(event)?),
        OutputFormat::Table => output::print_rows(&[EventDisplay::from(event)], format)?,
        OutputFormat::Pretty => {
            println!(
                "  {} {}",
                formatters::format_date_local(&event.date).cyan(),
                event.name.bold()
            );
            if event.location.is_some() {
                println!(
                    "  {}",
                    formatters::format_location(event.location.as_ref())
                );
            }
            if let Some(note) = event.note.as_deref().filter(|n| !n.is_empty()) {
                println!("  {}", note);
            }
        }
    }
    Ok(())
}
