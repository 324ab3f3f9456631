// ===== cipherforge/src/reports/mod.rs =====
use cipherforge::annealer::Solution;
use cipherforge::consts::ALPHABET;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use cipherforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct SolveReport<'a> {
    plaintext: &'a str,
    key: String,
    score: f64,
    initial_score: f64,
    iterations: usize,
    accepted: usize,
}

/// Cipher → plain mapping, 13 columns per band.
pub fn print_key_grid(key: &Key) {
    println!("\nKey mapping (cipher → plain):");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;
    let plain = key.as_bytes();

    for band in (0..ALPHABET.len()).step_by(cols) {
        let range = band..(band + cols).min(ALPHABET.len());

        let cipher_cells: Vec<Cell> = range
            .clone()
            .map(|i| Cell::new(ALPHABET[i] as char).set_alignment(CellAlignment::Center))
            .collect();
        let plain_cells: Vec<Cell> = range
            .map(|i| Cell::new(plain[i] as char).set_alignment(CellAlignment::Center))
            .collect();

        table.add_row(cipher_cells);
        table.add_row(plain_cells);
    }

    println!("{table}");
}

pub fn print_solution(solution: &Solution, elapsed: Duration) {
    println!("\n=== 🏆 BEST DECRYPTION ===");
    println!("{}", solution.plaintext);

    print_key_grid(&solution.key);

    println!("Key:   {}", solution.key);
    println!(
        "Score: {:.1} (started at {:.1})",
        solution.score, solution.initial_score
    );
    println!(
        "Moves: {} accepted / {} iterations in {:.2}s",
        solution.accepted,
        solution.iterations,
        elapsed.as_secs_f64()
    );
}

pub fn print_solution_json(solution: &Solution) -> CfResult<()> {
    let report = SolveReport {
        plaintext: &solution.plaintext,
        key: solution.key.to_string(),
        score: solution.score,
        initial_score: solution.initial_score,
        iterations: solution.iterations,
        accepted: solution.accepted,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn print_score_report(text: &str, details: &ScoreDetails) {
    println!("\n🔎 === TEXT AUDIT === 🔎");
    println!("{}", text);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["N-gram", "Weight", "Count", "Contribution"]);

    let mut entries = details.entries.clone();
    entries.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));

    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.gram),
            Cell::new(format!("{:+.1}", entry.weight)).set_alignment(CellAlignment::Right),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+.1}", entry.contribution)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!("Total score: {:.1}", details.total);
}
