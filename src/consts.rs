// ===== cipherforge/src/consts.rs =====

pub const ALPHABET_LEN: usize = 26;

/// Reference alphabet. A key maps the ciphertext letter at position `i`
/// here to the plaintext letter at position `i` in the key.
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// English letters from most to least frequent.
pub const FREQUENCY_ORDER: [u8; 26] = *b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Relative frequency (percent) of each letter in `FREQUENCY_ORDER`.
pub const FREQUENCY_PERCENTS: [f64; 26] = [
    12.702, // E
    9.056,  // T
    8.167,  // A
    7.507,  // O
    6.966,  // I
    6.749,  // N
    6.327,  // S
    6.094,  // H
    5.987,  // R
    4.253,  // D
    4.025,  // L
    2.782,  // C
    2.758,  // U
    2.406,  // M
    2.360,  // W
    2.228,  // F
    2.015,  // G
    1.974,  // Y
    1.929,  // P
    1.492,  // B
    0.978,  // V
    0.772,  // K
    0.153,  // J
    0.150,  // X
    0.095,  // Q
    0.074,  // Z
];
