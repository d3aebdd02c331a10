//! End-to-end scenarios the estimation pipeline is expected to satisfy,
//! independent of which detector or estimator produced the winning cover.

use crack_time::{estimate, estimate_batch};

#[test]
fn common_password_is_guessed_first_try() {
    let result = estimate("password", "bcrypt_cost10", "consumer").unwrap();
    assert_eq!(result.guess_number, 1);
}

#[test]
fn empty_password_is_instant_and_free() {
    let result = estimate("", "bcrypt_cost10", "consumer").unwrap();
    assert_eq!(result.guess_number, 0);
    assert_eq!(result.crack_time_display, "instant");
}

#[test]
fn single_char_repeat_is_cheap() {
    let result = estimate("aaaaaa", "bcrypt_cost10", "consumer").unwrap();
    assert!(result.guess_number <= 156, "got {}", result.guess_number);
}

#[test]
fn well_known_sequence_is_cheap() {
    let result = estimate("abcdefgh", "bcrypt_cost10", "consumer").unwrap();
    assert!(result.guess_number <= 1000, "got {}", result.guess_number);
}

#[test]
fn date_without_separator_is_cheap() {
    let result = estimate("01151987", "bcrypt_cost10", "consumer").unwrap();
    assert!(result.guess_number <= 73_000, "got {}", result.guess_number);
}

#[test]
fn fast_hash_cracks_faster_than_slow_hash_for_the_same_password() {
    let md5 = estimate("password123", "md5", "consumer").unwrap();
    let bcrypt = estimate("password123", "bcrypt_cost12", "consumer").unwrap();
    assert!(md5.crack_time_seconds < bcrypt.crack_time_seconds);
}

#[test]
fn leet_speak_password_is_caught_by_leet_or_dictionary_detection() {
    let result = estimate("Tr0ub4dor&3", "bcrypt_cost10", "consumer").unwrap();
    assert!(
        result.winning_attack.contains("leet") || result.winning_attack.contains("dictionary"),
        "winning attack was {}",
        result.winning_attack
    );
}

#[test]
fn every_estimate_reports_at_least_one_guess() {
    for password in ["correct horse battery staple", "Zx9!qL2#mK", "aB3$dE7@"] {
        let result = estimate(password, "bcrypt_cost10", "consumer").unwrap();
        assert!(result.guess_number >= 1);
    }
}

#[test]
fn longer_passwords_of_the_same_shape_never_get_cheaper() {
    let short = estimate("correct horse", "bcrypt_cost10", "consumer").unwrap();
    let long = estimate("correct horse battery staple", "bcrypt_cost10", "consumer").unwrap();
    assert!(long.guess_number >= short.guess_number);
}

#[test]
fn batch_preserves_input_order() {
    let results = estimate_batch(
        &["password".to_string(), "aaaaaa".to_string(), "correct horse battery staple".to_string()],
        "bcrypt_cost10",
        "consumer",
    )
    .unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].password, "password");
    assert_eq!(results[1].password, "aaaaaa");
}

#[test]
fn unknown_hardware_tier_is_rejected() {
    assert!(estimate("password", "bcrypt_cost10", "quantum_wizard").is_err());
}

#[test]
fn unknown_algorithm_is_rejected() {
    assert!(estimate("password", "rot13", "consumer").is_err());
}
