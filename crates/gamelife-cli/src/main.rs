use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gamelife-cli", version, about = "GameLife CLI")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Attribute levels and achievements
    Attr {
        #[command(subcommand)]
        action: commands::attr::AttrAction,
    },
    /// Timeline view and visible range
    Timeline {
        #[command(subcommand)]
        action: commands::timeline::TimelineAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Discard all progress and restore the starter habits
    Reset {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}

fn reset(yes: bool) -> commands::CliResult {
    if !yes {
        return Err("reset discards all progress; re-run with --yes to confirm".into());
    }
    let config = gamelife_core::Config::load_or_default();
    let mut app = commands::open_app(&config)?;
    app.reset();
    app.flush()?;
    println!("state reset to defaults");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("GAMELIFE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Attr { action } => commands::attr::run(action),
        Commands::Timeline { action } => commands::timeline::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => reset(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
