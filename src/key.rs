// ===== cipherforge/src/key.rs =====
use crate::consts::{ALPHABET, ALPHABET_LEN, FREQUENCY_ORDER, FREQUENCY_PERCENTS};
use crate::error::{CfResult, CipherForgeError};
use clap::ValueEnum;
use fastrand::Rng;
use std::fmt;

/// How swap mutations pick their positions.
#[derive(ValueEnum, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum MutationWeighting {
    /// Every position is equally likely.
    Uniform,
    /// Positions holding frequent English letters are picked more often.
    #[default]
    FrequencyWeighted,
}

/// A substitution key: a permutation of the 26 uppercase letters.
///
/// The ciphertext letter at position `i` of the reference alphabet (A–Z)
/// decodes to `key[i]`. Keys are never mutated in place; every mutation
/// produces a fresh value so old and new states can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; ALPHABET_LEN]);

impl Key {
    /// The key that decodes every letter to itself.
    pub fn identity() -> Self {
        Key(ALPHABET)
    }

    /// A uniformly random permutation (Fisher–Yates via the RNG's shuffle).
    pub fn random(rng: &mut Rng) -> Self {
        let mut letters = ALPHABET;
        rng.shuffle(&mut letters);
        Key(letters)
    }

    pub fn from_bytes(bytes: &[u8]) -> CfResult<Self> {
        if bytes.len() != ALPHABET_LEN {
            return Err(CipherForgeError::Validation(format!(
                "key must be exactly {} letters, got {}",
                ALPHABET_LEN,
                bytes.len()
            )));
        }

        let mut letters = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (i, &b) in bytes.iter().enumerate() {
            let upper = b.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(CipherForgeError::Validation(format!(
                    "key contains a non-letter byte at position {}",
                    i
                )));
            }
            let slot = (upper - b'A') as usize;
            if seen[slot] {
                return Err(CipherForgeError::Validation(format!(
                    "key repeats the letter '{}'",
                    upper as char
                )));
            }
            seen[slot] = true;
            letters[i] = upper;
        }

        Ok(Key(letters))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }

    /// Derives a neighbor key by exactly one mutation: either a swap of
    /// two positions or an inclusive segment reversal. Both only reorder
    /// existing letters, so the permutation invariant holds by construction.
    pub fn mutate(&self, rng: &mut Rng, weighting: MutationWeighting) -> Key {
        if rng.bool() {
            self.swapped(rng, weighting)
        } else {
            self.reversed_segment(rng)
        }
    }

    fn swapped(&self, rng: &mut Rng, weighting: MutationWeighting) -> Key {
        let a = self.pick_position(rng, weighting);
        let b = self.pick_position(rng, weighting);
        let mut letters = self.0;
        letters.swap(a, b);
        Key(letters)
    }

    /// Reverses `start..=end` with `start <= end`, both always in bounds.
    /// `start == end` is a legal no-op.
    fn reversed_segment(&self, rng: &mut Rng) -> Key {
        let start = rng.usize(0..ALPHABET_LEN);
        let end = rng.usize(start..ALPHABET_LEN);
        let mut letters = self.0;
        letters[start..=end].reverse();
        Key(letters)
    }

    fn pick_position(&self, rng: &mut Rng, weighting: MutationWeighting) -> usize {
        match weighting {
            MutationWeighting::Uniform => rng.usize(0..ALPHABET_LEN),
            MutationWeighting::FrequencyWeighted => {
                let letter = weighted_letter(rng);
                self.position_of(letter)
            }
        }
    }

    fn position_of(&self, letter: u8) -> usize {
        // A key is a full permutation, so the letter is always present.
        self.0.iter().position(|&b| b == letter).unwrap_or(0)
    }
}

/// Draws a letter with probability proportional to its English frequency.
fn weighted_letter(rng: &mut Rng) -> u8 {
    let total: f64 = FREQUENCY_PERCENTS.iter().sum();
    let draw = rng.f64() * total;
    let mut cumulative = 0.0;

    for (i, &weight) in FREQUENCY_PERCENTS.iter().enumerate() {
        cumulative += weight;
        if draw <= cumulative {
            return FREQUENCY_ORDER[i];
        }
    }
    // Floating-point edge: the draw landed on the boundary.
    FREQUENCY_ORDER[ALPHABET_LEN - 1]
}

impl TryFrom<&str> for Key {
    type Error = CipherForgeError;

    fn try_from(s: &str) -> CfResult<Self> {
        Key::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
