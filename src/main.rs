//! TripJournal CLI - keep a journal of your trips from the terminal

use clap::Parser;

use tripjournal::cli::{
    self, Cli, Commands, EventCommands, GlobalOptions, MediaCommands, TripCommands,
    event::{EventChanges, NewEvent},
};
use tripjournal::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise RUST_LOG decides, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register(args) => cli::auth::register(&opts, &args).await,
        Commands::Login(args) => cli::auth::login(&opts, &args).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("tripjournal version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Trip(trip_cmd) => match trip_cmd {
            TripCommands::List => cli::trip::list(&opts).await,
            TripCommands::Get { trip_id } => cli::trip::get(&opts, trip_id).await,
            TripCommands::Create { name, start, end } => {
                cli::trip::create(&opts, name, start, end).await
            }
            TripCommands::Update {
                trip_id,
                name,
                start,
                end,
            } => cli::trip::update(&opts, trip_id, name, start, end).await,
            TripCommands::Delete { trip_id, yes } => cli::trip::delete(&opts, trip_id, yes).await,
        },
        Commands::Event(event_cmd) => match event_cmd {
            EventCommands::Create {
                trip_id,
                name,
                date,
                note,
                location,
                transition,
            } => {
                let new = NewEvent {
                    trip_id,
                    name,
                    date,
                    note,
                    location,
                    transition,
                };
                cli::event::create(&opts, new).await
            }
            EventCommands::Update {
                event_id,
                trip_id,
                name,
                date,
                note,
                location,
                transition,
            } => {
                let changes = EventChanges {
                    name,
                    date,
                    note,
                    location,
                    transition,
                };
                cli::event::update(&opts, event_id, trip_id, changes).await
            }
            EventCommands::Delete { event_id, yes } => {
                cli::event::delete(&opts, event_id, yes).await
            }
        },
        Commands::Media(media_cmd) => match media_cmd {
            MediaCommands::Create {
                event_id,
                file,
                caption,
            } => cli::media::create(&opts, event_id, &file, caption).await,
            MediaCommands::Delete { media_id, yes } => {
                cli::media::delete(&opts, media_id, yes).await
            }
        },
    }
}
