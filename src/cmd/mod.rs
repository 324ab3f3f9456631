pub mod score;
pub mod solve;

use cipherforge::error::{CfResult, CipherForgeError};
use std::fs;

/// Resolves the ciphertext from either a file or a literal argument.
pub(crate) fn read_input(input: &Option<String>, text: &Option<String>) -> CfResult<String> {
    match (input, text) {
        (Some(path), _) => Ok(fs::read_to_string(path)?),
        (None, Some(literal)) => Ok(literal.clone()),
        (None, None) => Err(CipherForgeError::Config(
            "provide a ciphertext via --input FILE or --text LITERAL".to_string(),
        )),
    }
}
