// ===== cipherforge/src/config.rs =====
use crate::key::MutationWeighting;
use crate::scorer::TablePreset;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub tables: TableParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = 1000.0)]
    pub initial_temperature: f64,

    #[arg(long, default_value_t = 0.00002)]
    pub cooling_rate: f64,

    #[arg(long, value_enum, default_value_t = MutationWeighting::FrequencyWeighted)]
    pub mutation_weighting: MutationWeighting,

    /// Hard per-chain iteration budget. 0 disables the budget.
    #[arg(long, default_value_t = 0)]
    pub max_iterations: usize,

    /// Independent annealing chains run in parallel; best final score wins.
    #[arg(long, default_value_t = 1)]
    pub chains: usize,
}

#[derive(Args, Debug, Clone)]
pub struct TableParams {
    /// Built-in n-gram weight table to score with.
    #[arg(long, value_enum, default_value_t = TablePreset::Standard)]
    pub preset: TablePreset,
}
