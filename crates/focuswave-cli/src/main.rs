use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focuswave-cli", version, about = "FocusWave CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze lifestyle inputs into a focus profile
    Analyze(commands::analyze::AnalyzeArgs),
    /// User record lookup
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Focus session control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Session statistics
    Stats {
        /// User id to summarize
        user_id: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::User { action } => commands::user::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Stats { user_id } => commands::stats::run(&user_id),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
