use crate::reports;
use cipherforge::config::Config;
use cipherforge::decoder::decrypt;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use cipherforge::scorer::Scorer;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// File holding the text to audit
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Literal text to audit
    #[arg(short, long)]
    pub text: Option<String>,

    /// 26-letter substitution key to apply before scoring
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Audits a text: optionally decodes it under a fixed key, then reports
/// the weighted n-gram breakdown.
pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) -> CfResult<()> {
    let raw = super::read_input(&args.input, &args.text)?;

    let text = match &args.key {
        Some(k) => {
            let key = Key::try_from(k.as_str())?;
            reports::print_key_grid(&key);
            decrypt(&raw, &key)
        }
        None => raw.to_ascii_uppercase(),
    };

    let details = scorer.score_debug(&text);
    reports::print_score_report(&text, &details);
    Ok(())
}
