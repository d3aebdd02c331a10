//! Converts an abstract guess count into wall-clock crack time for a given
//! hash algorithm and attacker hardware tier.
//!
//! Base hash rates (guesses/second on one GPU) are packaged data; hardware
//! tiers apply a multiplier on top of that base rate to model an attacker
//! renting or owning more compute.

use crate::data::DataStore;
use crate::error::CrackTimeError;

/// One attacker hardware profile: a friendly name and a multiplier applied
/// to the base per-GPU hash rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareTier {
    pub name: &'static str,
    pub multiplier: f64,
}

pub const HARDWARE_TIERS: &[HardwareTier] = &[
    HardwareTier { name: "budget", multiplier: 0.19 },
    HardwareTier { name: "consumer", multiplier: 1.0 },
    HardwareTier { name: "enthusiast", multiplier: 1.34 },
    HardwareTier { name: "small_rig", multiplier: 3.6 },
    HardwareTier { name: "large_rig", multiplier: 7.0 },
    HardwareTier { name: "dedicated", multiplier: 12.2 },
    HardwareTier { name: "well_funded", multiplier: 85.0 },
    HardwareTier { name: "nation_state", multiplier: 8500.0 },
];

fn find_tier(name: &str) -> Option<&'static HardwareTier> {
    HARDWARE_TIERS.iter().find(|t| t.name == name)
}

pub fn supported_hardware_tiers() -> Vec<&'static str> {
    HARDWARE_TIERS.iter().map(|t| t.name).collect()
}

pub fn supported_algorithms(store: &DataStore) -> Vec<String> {
    let mut names = vec![
        "md5", "sha1", "sha256", "sha512", "ntlm", "scrypt_default", "argon2id_64m_t3", "pbkdf2_sha256", "wpa_wpa2",
    ];
    names.retain(|n| store.hash_rate(n).is_some());
    let mut result: Vec<String> = names.into_iter().map(String::from).collect();
    for cost in [5, 10, 12] {
        let name = format!("bcrypt_cost{cost}");
        if store.hash_rate(&name).is_some() {
            result.push(name);
        }
    }
    result
}

/// Base per-GPU hash rate for `algorithm`, deriving `bcrypt_cost{N}` from the
/// packaged `bcrypt_cost5` baseline when `N` isn't itself in the table
/// (bcrypt's work factor doubles the cost for each unit increase).
fn base_hash_rate(algorithm: &str, store: &DataStore) -> Option<f64> {
    if let Some(rate) = store.hash_rate(algorithm) {
        return Some(rate);
    }

    if let Some(cost_str) = algorithm.strip_prefix("bcrypt_cost") {
        let cost: u32 = cost_str.parse().ok()?;
        let base_rate = store.hash_rate("bcrypt_cost5")?;
        if cost < 5 {
            return None;
        }
        let steps = cost - 5;
        return Some(base_rate / 2f64.powi(steps as i32));
    }

    None
}

/// Effective guesses/second for `algorithm` on hardware `tier`.
pub fn effective_rate(algorithm: &str, tier_name: &str, store: &DataStore) -> Result<f64, CrackTimeError> {
    let base_rate = base_hash_rate(algorithm, store).ok_or_else(|| CrackTimeError::UnknownAlgorithm {
        name: algorithm.to_string(),
        supported: supported_algorithms(store),
    })?;
    let tier = find_tier(tier_name).ok_or_else(|| CrackTimeError::UnknownHardwareTier {
        name: tier_name.to_string(),
        supported: supported_hardware_tiers().into_iter().map(String::from).collect(),
    })?;
    Ok(base_rate * tier.multiplier)
}

/// Seconds to exhaust `guesses` at the effective rate. A zero rate (should
/// never happen with packaged data, but keeps this total) maps to infinity.
pub fn crack_time_seconds(guesses: u64, algorithm: &str, tier_name: &str, store: &DataStore) -> Result<f64, CrackTimeError> {
    let rate = effective_rate(algorithm, tier_name, store)?;
    if rate <= 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(guesses as f64 / rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn consumer_tier_has_unit_multiplier() {
        assert_eq!(find_tier("consumer").unwrap().multiplier, 1.0);
    }

    #[test]
    fn unknown_algorithm_errors() {
        let store = data::store();
        assert!(effective_rate("not_a_real_hash", "consumer", store).is_err());
    }

    #[test]
    fn unknown_tier_errors() {
        let store = data::store();
        assert!(effective_rate("md5", "not_a_real_tier", store).is_err());
    }

    #[test]
    fn bcrypt_cost_derivation_halves_per_step() {
        let store = data::store();
        let cost10 = base_hash_rate("bcrypt_cost10", store).unwrap();
        let base5 = store.hash_rate("bcrypt_cost5").unwrap();
        assert!((cost10 - base5 / 32.0).abs() < 1.0);
    }

    #[test]
    fn md5_is_faster_than_bcrypt_cost12_on_same_hardware() {
        let store = data::store();
        let md5 = crack_time_seconds(1_000_000, "md5", "consumer", store).unwrap();
        let bcrypt = crack_time_seconds(1_000_000, "bcrypt_cost12", "consumer", store).unwrap();
        assert!(md5 < bcrypt);
    }

    #[test]
    fn nation_state_hardware_is_faster_than_budget() {
        let store = data::store();
        let budget = crack_time_seconds(1_000_000, "md5", "budget", store).unwrap();
        let nation_state = crack_time_seconds(1_000_000, "md5", "nation_state", store).unwrap();
        assert!(nation_state < budget);
    }
}
