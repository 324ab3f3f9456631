// ===== cipherforge/src/decoder.rs =====
use crate::key::Key;

/// Applies a substitution key to a ciphertext.
///
/// ASCII letters are uppercased and replaced through the key's mapping;
/// every other character passes through unchanged, so the output keeps the
/// exact length and layout of the input. Pure and stateless.
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    let table = key.as_bytes();

    ciphertext
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                table[idx] as char
            } else {
                c
            }
        })
        .collect()
}
