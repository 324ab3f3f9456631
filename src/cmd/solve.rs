use crate::reports;
use cipherforge::annealer::{AnnealOptions, Annealer};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::scorer::Scorer;
use clap::Args;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// File holding the ciphertext
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Literal ciphertext
    #[arg(short, long)]
    pub text: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Emit the result as JSON instead of the report tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SolveArgs, scorer: Arc<Scorer>) -> CfResult<()> {
    let ciphertext = super::read_input(&args.input, &args.text)?;

    let mut options = AnnealOptions::from(&args.config);
    options.seed = args.seed;
    let chains = options.chains;

    let annealer = Annealer::new(scorer, options)?;

    info!(
        "🔥 Annealing {} characters over {} chain(s)",
        ciphertext.len(),
        chains
    );

    let start = Instant::now();
    let solution = annealer.solve(&ciphertext);
    let elapsed = start.elapsed();

    if args.json {
        reports::print_solution_json(&solution)?;
    } else {
        reports::print_solution(&solution, elapsed);
    }
    Ok(())
}
