// ===== cipherforge/src/main.rs =====
use cipherforge::scorer::{loader, NgramTables, Scorer};
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TSV n-gram table (NGRAM<TAB>WEIGHT) overriding the built-in preset
    #[arg(global = true, short, long)]
    ngrams: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Solve(cmd::solve::SolveArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing CipherForge...");

    let preset = match &cli.command {
        Commands::Solve(args) => args.config.tables.preset,
        Commands::Score(args) => args.config.tables.preset,
    };

    let tables = if let Some(path) = &cli.ngrams {
        info!("📂 Loading n-gram table from: {}", path);
        match loader::load_tables_from_path(path) {
            Ok(t) => t,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    } else {
        info!("⚖️  Using built-in '{}' table preset.", preset);
        NgramTables::preset(preset)
    };

    let scorer = Arc::new(Scorer::new(tables));

    let result = match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, scorer),
        Commands::Score(args) => cmd::score::run(args, scorer),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
