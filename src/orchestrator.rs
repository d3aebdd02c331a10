//! Ties the analyzer, estimators, decomposition engine, and hardware model
//! together into the single public `estimate()` entry point.

use std::panic::{self, AssertUnwindSafe};

use crate::charclass;
use crate::data::{self, DataStore};
use crate::dp;
use crate::error::CrackTimeError;
use crate::format;
use crate::hardware;
use crate::matching::{self, Match};
use crate::rating::{self, Rating};
use crate::scoring;

pub const DEFAULT_ALGORITHM: &str = "bcrypt_cost10";
pub const DEFAULT_HARDWARE_TIER: &str = "consumer";

/// A buildable estimation request, for callers (the CLI, the HTTP server)
/// that want `algorithm`/`hardware_tier` defaults without repeating them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "builder", derive(derive_builder::Builder))]
#[cfg_attr(feature = "builder", builder(setter(into)))]
pub struct EstimateRequest {
    pub password: String,
    #[cfg_attr(feature = "builder", builder(default = "DEFAULT_ALGORITHM.to_string()"))]
    pub algorithm: String,
    #[cfg_attr(feature = "builder", builder(default = "DEFAULT_HARDWARE_TIER.to_string()"))]
    pub hardware_tier: String,
}

impl EstimateRequest {
    pub fn run(&self) -> Result<EstimateResult, CrackTimeError> {
        estimate(&self.password, &self.algorithm, &self.hardware_tier)
    }
}

impl EstimateResult {
    /// Render as a JSON value built field-by-field, so callers get JSON
    /// output (the CLI's `--json`, the HTTP API's response bodies) whether
    /// or not the `ser` feature's `Serialize` derives are compiled in.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "password": self.password,
            "length": self.length,
            "cardinality": self.cardinality,
            "guess_number": self.guess_number,
            "winning_attack": self.winning_attack,
            "algorithm": self.algorithm,
            "hardware_tier": self.hardware_tier,
            "crack_time_seconds": self.crack_time_seconds,
            "crack_time_display": self.crack_time_display,
            "rating": self.rating.label(),
            "rating_score": self.rating.score(),
            "estimator_errors": self.estimator_errors,
            "decomposition": self.decomposition.iter().map(|m| {
                serde_json::json!({
                    "pattern": m.pattern_name(),
                    "token": m.token(),
                    "i": m.i(),
                    "j": m.j(),
                    "guesses": m.guesses(),
                })
            }).collect::<Vec<_>>(),
        })
    }
}

/// The full result of estimating one password against one algorithm and
/// hardware tier: the winning guess count, the attack that produced it, and
/// the hardware-converted crack time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct EstimateResult {
    pub password: String,
    pub length: usize,
    pub cardinality: u64,
    pub guess_number: u64,
    pub winning_attack: String,
    pub decomposition: Vec<Match>,
    pub estimator_errors: Vec<String>,
    pub algorithm: String,
    pub hardware_tier: String,
    pub crack_time_seconds: f64,
    pub crack_time_display: String,
    pub rating: Rating,
}

/// Estimate how many guesses `password` costs an attacker, then convert that
/// into wall-clock time for `algorithm` hashed and attacked on `hardware_tier`.
///
/// 1. An empty password short-circuits to zero guesses / instant.
/// 2. Otherwise the analyzer finds every candidate pattern.
/// 3. Each candidate is guess-estimated; a panicking estimator is caught and
///    charged at infinite guesses rather than aborting the whole call.
/// 4. The decomposition engine picks the cheapest non-overlapping cover.
/// 5. That cover is compared against pure brute force and the password's
///    mask looked up in the priority library; the cheapest of the three wins.
/// 6. The winner's guess count is converted to seconds and rated.
pub fn estimate(password: &str, algorithm: &str, hardware_tier: &str) -> Result<EstimateResult, CrackTimeError> {
    let store = data::store();
    hardware::effective_rate(algorithm, hardware_tier, store)?;

    if password.is_empty() {
        return Ok(EstimateResult {
            password: String::new(),
            length: 0,
            cardinality: 0,
            guess_number: 0,
            winning_attack: "none".to_string(),
            decomposition: Vec::new(),
            estimator_errors: Vec::new(),
            algorithm: algorithm.to_string(),
            hardware_tier: hardware_tier.to_string(),
            crack_time_seconds: 0.0,
            crack_time_display: "instant".to_string(),
            rating: rating::rate(0.0),
        });
    }

    let mut analysis = matching::analyze(password);
    let estimator_errors = estimate_matches_safely(&mut analysis.matches, store);

    let dp_result = dp::decompose(&analysis.password, &analysis.matches);
    let (brute_guesses, mask_guesses) = scoring::whole_password_guesses(&analysis.password, store);

    let mut guess_number = dp_result.guesses;
    let mut decomposition = dp_result.sequence;
    let mut winning_attack = winning_attack_label(&decomposition);

    if brute_guesses < guess_number {
        guess_number = brute_guesses;
        decomposition = vec![Match::make_bruteforce(&analysis.password, 0, analysis.length - 1)];
        winning_attack = "brute_force".to_string();
    }

    if mask_guesses < guess_number {
        guess_number = mask_guesses;
        let mut m = Match::make_bruteforce(&analysis.password, 0, analysis.length - 1);
        m.set_guesses(mask_guesses);
        decomposition = vec![m];
        winning_attack = "mask".to_string();
    }

    let crack_time_seconds = hardware::crack_time_seconds(guess_number, algorithm, hardware_tier, store)?;
    let rating_value = rating::rate(crack_time_seconds);
    let crack_time_display = format::format_time_or_instant(guess_number, crack_time_seconds);

    Ok(EstimateResult {
        password: analysis.password,
        length: analysis.length,
        cardinality: analysis.cardinality,
        guess_number,
        winning_attack,
        decomposition,
        estimator_errors,
        algorithm: algorithm.to_string(),
        hardware_tier: hardware_tier.to_string(),
        crack_time_seconds,
        crack_time_display,
        rating: rating_value,
    })
}

/// Estimate every password in `passwords` against the same algorithm/tier.
pub fn estimate_batch(passwords: &[String], algorithm: &str, hardware_tier: &str) -> Result<Vec<EstimateResult>, CrackTimeError> {
    if passwords.is_empty() {
        return Err(CrackTimeError::EmptyBatch);
    }
    passwords.iter().map(|p| estimate(p, algorithm, hardware_tier)).collect()
}

fn estimate_matches_safely(matches: &mut [Match], store: &DataStore) -> Vec<String> {
    let mut errors = Vec::new();
    for m in matches.iter_mut() {
        if let Match::Repeat(r) = m {
            r.base_guesses = charclass::bruteforce_guesses(&r.base_token);
        }
        let pattern = m.pattern_name();
        let token = m.token().to_string();

        let result = panic::catch_unwind(AssertUnwindSafe(|| scoring::estimate_match_guesses(m, store)));
        match result {
            Ok(guesses) => m.set_guesses(guesses),
            Err(_) => {
                errors.push(format!(r#"{{"error":true,"pattern":"{pattern}","token":"{token}"}}"#));
                m.set_guesses(u64::MAX);
            }
        }
    }
    errors
}

/// Build the winning-attack label from a decomposition: the unique pattern
/// names in order, excluding brute-force filler, joined with `+`. A cover
/// that's all filler reports as `"brute_force"`.
fn winning_attack_label(sequence: &[Match]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for m in sequence {
        let name = m.pattern_name();
        if name == "brute_force" {
            continue;
        }
        if !names.contains(&name) {
            names.push(name);
        }
    }
    if names.is_empty() {
        "brute_force".to_string()
    } else {
        names.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_instant() {
        let r = estimate("", "bcrypt_cost10", "consumer").unwrap();
        assert_eq!(r.guess_number, 0);
        assert_eq!(r.crack_time_display, "instant");
    }

    #[test]
    fn common_password_has_guess_number_one() {
        let r = estimate("password", "bcrypt_cost10", "consumer").unwrap();
        assert_eq!(r.guess_number, 1);
    }

    #[test]
    fn unknown_algorithm_is_an_error() {
        assert!(estimate("password", "not_a_hash", "consumer").is_err());
    }

    #[test]
    fn repeat_password_guess_number_is_bounded() {
        let r = estimate("aaaaaa", "bcrypt_cost10", "consumer").unwrap();
        assert!(r.guess_number <= 156);
    }

    #[test]
    fn sequence_password_guess_number_is_bounded() {
        let r = estimate("abcdefgh", "bcrypt_cost10", "consumer").unwrap();
        assert!(r.guess_number <= 1000);
    }

    #[test]
    fn date_without_separator_guess_number_is_bounded() {
        let r = estimate("01151987", "bcrypt_cost10", "consumer").unwrap();
        assert!(r.guess_number <= 73_000);
    }

    #[test]
    fn md5_cracks_faster_than_bcrypt_for_the_same_password() {
        let fast = estimate("password123", "md5", "consumer").unwrap();
        let slow = estimate("password123", "bcrypt_cost12", "consumer").unwrap();
        assert!(fast.crack_time_seconds < slow.crack_time_seconds);
    }

    #[test]
    fn leet_password_wins_on_dictionary_or_leet_pattern() {
        let r = estimate("Tr0ub4dor&3", "bcrypt_cost10", "consumer").unwrap();
        assert!(r.winning_attack.contains("leet") || r.winning_attack.contains("dictionary"));
    }

    #[test]
    fn batch_rejects_empty_input() {
        assert!(estimate_batch(&[], "bcrypt_cost10", "consumer").is_err());
    }

    #[cfg(feature = "builder")]
    #[test]
    fn request_builder_fills_in_defaults() {
        let req = EstimateRequestBuilder::default().password("hunter2").build().unwrap();
        assert_eq!(req.algorithm, DEFAULT_ALGORITHM);
        assert_eq!(req.hardware_tier, DEFAULT_HARDWARE_TIER);
        assert!(req.run().is_ok());
    }
}
