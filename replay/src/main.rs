use std::path::PathBuf;

use clap::Parser;
use dobutsu::GameConfig;
use replay::{load_events, replay_events, Recorder};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the input events, one JSON object per line
    events: PathBuf,

    /// Path to a game config JSON file. Without it, the game starts from the standard position
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record every frame of the replay as JSON into this file
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// Print the board after every event that passed the turn
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut game = config.build()?;
    let events = load_events(&args.events)?;
    info!(num_events = events.len(), "Starting replay");

    let mut recorder = if let Some(path) = args.record_to {
        Some(Recorder::new(path)?)
    } else {
        None
    };

    let summary = replay_events(&mut game, &events, &mut recorder, |game| {
        if args.verbose {
            eprintln!("{}\n", game);
        }
    });

    if let Some(rec) = &mut recorder {
        rec.write_recording()?;
    }

    eprintln!(
        "End result:\n- {} moves ({} captures)\n- {} drops\n- {} inputs ignored",
        summary.moves, summary.captures, summary.drops, summary.ignored
    );
    println!("{}", game);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
