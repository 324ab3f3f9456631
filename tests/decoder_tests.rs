use cipherforge::decoder::decrypt;
use cipherforge::key::Key;

#[test]
fn test_identity_key_round_trip() {
    let key = Key::identity();
    assert_eq!(decrypt("HELLOWORLD", &key), "HELLOWORLD");
}

#[test]
fn test_lowercase_is_normalized() {
    let key = Key::identity();
    assert_eq!(decrypt("Hello, World!", &key), "HELLO, WORLD!");
}

#[test]
fn test_non_letters_pass_through() {
    let key = Key::try_from("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let output = decrypt("A1B2 C3!D4?\n", &key);

    assert_eq!(output.len(), "A1B2 C3!D4?\n".len());
    assert_eq!(&output[1..2], "1");
    assert_eq!(&output[3..4], "2");
    assert_eq!(&output[4..5], " ");
    assert_eq!(&output[7..8], "!");
    assert_eq!(&output[11..12], "\n");
}

#[test]
fn test_letters_map_only_to_letters() {
    let key = Key::try_from("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let output = decrypt("THEQUICKBROWNFOX", &key);
    assert!(output.bytes().all(|b| b.is_ascii_uppercase()));
}

// Fixed-key regression: deterministic mapping under the frequency-order
// key, independent of the stochastic search. W→J, K→L, S→P, N→M.
#[test]
fn test_fixed_key_regression() {
    let key = Key::try_from("ETAOINSHRDLCUMWFGYPBVKJXQZ").unwrap();
    assert_eq!(decrypt("WKSNK SNK", &key), "JLPML PML");
}

#[test]
fn test_empty_input() {
    let key = Key::identity();
    assert_eq!(decrypt("", &key), "");
}

#[test]
fn test_inverse_key_recovers_plaintext() {
    let key = Key::try_from("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();

    // Build the inverse permutation: encrypting with it and decoding with
    // the original key must recover the plaintext exactly.
    let mut inverse = [0u8; 26];
    for (i, &plain) in key.as_bytes().iter().enumerate() {
        inverse[(plain - b'A') as usize] = b'A' + i as u8;
    }
    let inverse = Key::from_bytes(&inverse).unwrap();

    let plaintext = "ATTACK AT DAWN";
    let ciphertext = decrypt(plaintext, &inverse);
    assert_eq!(decrypt(&ciphertext, &key), plaintext);
}
