use cipherforge::consts::ALPHABET;
use cipherforge::key::{Key, MutationWeighting};

fn is_permutation(key: &Key) -> bool {
    let mut sorted = *key.as_bytes();
    sorted.sort_unstable();
    sorted == ALPHABET
}

#[test]
fn test_identity_key() {
    let key = Key::identity();
    assert_eq!(key.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert!(is_permutation(&key));
}

#[test]
fn test_random_key_is_permutation() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        assert!(is_permutation(&Key::random(&mut rng)));
    }
}

#[test]
fn test_from_str_accepts_lowercase() {
    let key = Key::try_from("etaoinshrdlcumwfgypbvkjxqz").unwrap();
    assert_eq!(key.to_string(), "ETAOINSHRDLCUMWFGYPBVKJXQZ");
}

#[test]
fn test_from_str_rejects_wrong_length() {
    assert!(Key::try_from("ABC").is_err());
    assert!(Key::try_from("").is_err());
}

#[test]
fn test_from_str_rejects_repeats() {
    assert!(Key::try_from("AACDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
}

#[test]
fn test_from_str_rejects_non_letters() {
    assert!(Key::try_from("ABCDEFGHIJKLMNOPQRSTUVWXY1").is_err());
}

#[test]
fn test_mutate_preserves_permutation() {
    let mut rng = fastrand::Rng::with_seed(99);
    let mut key = Key::random(&mut rng);

    for weighting in [MutationWeighting::Uniform, MutationWeighting::FrequencyWeighted] {
        for _ in 0..500 {
            key = key.mutate(&mut rng, weighting);
            assert!(is_permutation(&key));
        }
    }
}

#[test]
fn test_mutate_does_not_modify_original() {
    let mut rng = fastrand::Rng::with_seed(3);
    let key = Key::random(&mut rng);
    let snapshot = key;

    for _ in 0..50 {
        let _ = key.mutate(&mut rng, MutationWeighting::Uniform);
    }
    assert_eq!(key, snapshot);
}

#[test]
fn test_mutate_eventually_moves() {
    // Swap of equal indices and single-element reversals are legal no-ops,
    // but across many draws the walk must actually move.
    let mut rng = fastrand::Rng::with_seed(11);
    let key = Key::identity();
    let moved = (0..100).any(|_| key.mutate(&mut rng, MutationWeighting::Uniform) != key);
    assert!(moved);
}
