// ===== cipherforge/src/scorer/loader.rs =====
use super::tables::NgramTables;
use crate::error::{CfResult, CipherForgeError};
use std::fs::File;
use std::io::Read;
use tracing::{debug, warn};

/// Loads a weighted n-gram table from TSV rows of `NGRAM<TAB>WEIGHT`.
///
/// Rows with a non-letter gram or an unparsable weight are skipped, not
/// fatal. Grams are uppercased to match the decoder's normalization.
pub fn load_tables<R: Read>(reader: R) -> CfResult<NgramTables> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = result?;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let gram = rec[0].trim().to_ascii_uppercase();
        if gram.is_empty() || !gram.bytes().all(|b| b.is_ascii_uppercase()) {
            skipped += 1;
            continue;
        }

        let weight: f64 = match rec[1].trim().parse() {
            Ok(w) => w,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        entries.push((gram, weight));
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in n-gram table.", skipped);
    }

    if entries.is_empty() {
        return Err(CipherForgeError::Validation(
            "n-gram table contains no usable entries".to_string(),
        ));
    }

    debug!("Loaded {} weighted n-grams.", entries.len());
    Ok(NgramTables { entries })
}

pub fn load_tables_from_path(path: &str) -> CfResult<NgramTables> {
    let file = File::open(path).map_err(|e| {
        CipherForgeError::Config(format!("could not open n-gram table at '{}': {}", path, e))
    })?;
    load_tables(file)
}
