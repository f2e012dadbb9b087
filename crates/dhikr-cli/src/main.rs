use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dhikr", version, about = "Dhikr counter")]
struct Cli {
    /// Log engine transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session on your own dhikr list
    Tasbih {
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Manage the dhikr list
    Items {
        #[command(subcommand)]
        action: commands::items::ItemsAction,
    },
    /// Salawat campaign counter
    Campaign {
        #[command(subcommand)]
        action: commands::campaign::CampaignAction,
    },
    /// Hisn al-Muslim categories
    Adhkar {
        #[command(subcommand)]
        action: commands::adhkar::AdhkarAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Tasbih { json } => commands::tasbih::run(json),
        Commands::Items { action } => commands::items::run(action),
        Commands::Campaign { action } => commands::campaign::run(action),
        Commands::Adhkar { action } => commands::adhkar::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dhikr", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
