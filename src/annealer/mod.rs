// ===== cipherforge/src/annealer/mod.rs =====
use crate::config::Config;
use crate::decoder::decrypt;
use crate::error::{CfResult, CipherForgeError};
use crate::key::{Key, MutationWeighting};
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// The search stops once temperature falls to this floor. It also keeps
/// the acceptance exponent's denominator strictly positive.
pub const TEMP_FLOOR: f64 = 1.0;

const PROGRESS_INTERVAL: usize = 100_000;

pub struct AnnealOptions {
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub weighting: MutationWeighting,
    /// Hard iteration budget per chain. 0 = temperature floor only.
    pub max_iterations: usize,
    pub chains: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for AnnealOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            initial_temperature: cfg.search.initial_temperature,
            cooling_rate: cfg.search.cooling_rate,
            weighting: cfg.search.mutation_weighting,
            max_iterations: cfg.search.max_iterations,
            chains: cfg.search.chains,
            seed: None, // Set manually if needed
        }
    }
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.00002,
            weighting: MutationWeighting::FrequencyWeighted,
            max_iterations: 0,
            chains: 1,
            seed: None,
        }
    }
}

impl AnnealOptions {
    pub fn validate(&self) -> CfResult<()> {
        if self.initial_temperature <= TEMP_FLOOR {
            return Err(CipherForgeError::Config(format!(
                "initial_temperature must exceed the floor of {}, got {}",
                TEMP_FLOOR, self.initial_temperature
            )));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(CipherForgeError::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.chains == 0 {
            return Err(CipherForgeError::Config(
                "chains must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Best decryption found, plus run diagnostics.
#[derive(Debug, Clone)]
pub struct Solution {
    pub plaintext: String,
    pub key: Key,
    pub score: f64,
    /// Score of the chain's initial random key, for convergence checks.
    pub initial_score: f64,
    pub iterations: usize,
    pub accepted: usize,
}

/// State of one chain: replaced as a unit on every accepted move.
struct SearchState {
    key: Key,
    plaintext: String,
    score: f64,
    temperature: f64,
}

/// Single-chain Metropolis anneal with geometric cooling. No restarts,
/// no reheating; convergence is heuristic and the result may differ
/// between unseeded runs.
pub struct Annealer {
    scorer: Arc<Scorer>,
    options: AnnealOptions,
}

impl Annealer {
    pub fn new(scorer: Arc<Scorer>, options: AnnealOptions) -> CfResult<Self> {
        options.validate()?;
        Ok(Self { scorer, options })
    }

    pub fn options(&self) -> &AnnealOptions {
        &self.options
    }

    /// Runs the search and returns the best decryption found. Never fails:
    /// any input, including an empty or letterless one, terminates once the
    /// temperature crosses the floor.
    pub fn solve(&self, ciphertext: &str) -> Solution {
        let cipher = ciphertext.to_ascii_uppercase();

        if self.options.chains == 1 {
            return self.run_chain(&cipher, 0);
        }

        // Independent chains, each with its own RNG stream, combined only
        // at the end by comparing final scores.
        (0..self.options.chains)
            .into_par_iter()
            .map(|i| self.run_chain(&cipher, i))
            .reduce_with(|a, b| if b.score > a.score { b } else { a })
            .unwrap_or_else(|| self.run_chain(&cipher, 0))
    }

    fn run_chain(&self, cipher: &str, chain: usize) -> Solution {
        let opts = &self.options;
        let mut rng = match opts.seed {
            Some(s) => fastrand::Rng::with_seed(s + chain as u64),
            None => fastrand::Rng::new(),
        };

        let key = Key::random(&mut rng);
        let plaintext = decrypt(cipher, &key);
        let score = self.scorer.score(&plaintext);
        let initial_score = score;

        let mut state = SearchState {
            key,
            plaintext,
            score,
            temperature: opts.initial_temperature,
        };

        let mut iterations = 0usize;
        let mut accepted = 0usize;

        while state.temperature > TEMP_FLOOR {
            if opts.max_iterations > 0 && iterations >= opts.max_iterations {
                break;
            }

            let candidate_key = state.key.mutate(&mut rng, opts.weighting);
            let candidate_plaintext = decrypt(cipher, &candidate_key);
            let candidate_score = self.scorer.score(&candidate_plaintext);

            // Metropolis criterion: worse states are accepted with a
            // temperature-dependent probability.
            let p = acceptance_probability(state.score, candidate_score, state.temperature);
            if p > rng.f64() {
                state.key = candidate_key;
                state.plaintext = candidate_plaintext;
                state.score = candidate_score;
                accepted += 1;
            }

            // Cooling is unconditional, accepted or not.
            state.temperature *= 1.0 - opts.cooling_rate;
            iterations += 1;

            if iterations % PROGRESS_INTERVAL == 0 {
                debug!(
                    chain,
                    iterations,
                    score = state.score,
                    temperature = state.temperature,
                    "chain progress"
                );
            }
        }

        info!(
            chain,
            score = state.score,
            iterations,
            accepted,
            "chain finished"
        );

        Solution {
            plaintext: state.plaintext,
            key: state.key,
            score: state.score,
            initial_score,
            iterations,
            accepted,
        }
    }
}

/// Probability of moving to `candidate` from `current` at `temperature`.
/// Exactly 1.0 for improvements; `exp(delta / t)` otherwise, which lies in
/// (0, 1) for any worse candidate while the temperature is positive.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate > current {
        return 1.0;
    }
    ((candidate - current) / temperature).exp()
}
