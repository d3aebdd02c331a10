//! `crack_time`: estimates how long it would take an attacker to guess a
//! password, given a target hash algorithm and hardware budget.
//!
//! The pipeline is: [`matching::analyze`] finds candidate patterns
//! (dictionary words, l33t substitutions, keyboard walks, sequences, dates,
//! repeats), [`scoring`] estimates a guess count for each, [`dp`] picks the
//! cheapest non-overlapping cover of the whole password, and [`hardware`]
//! converts the winning guess count into wall-clock time. [`orchestrator::estimate`]
//! is the one function that runs all of it.

#[macro_use]
extern crate lazy_static;

pub mod charclass;
pub mod data;
pub mod dp;
pub mod error;
pub mod format;
pub mod hardware;
pub mod matching;
pub mod orchestrator;
pub mod rating;
pub mod scoring;

#[cfg(feature = "server")]
pub mod http;

pub mod cli;

pub use error::CrackTimeError;
pub use matching::{Match, PasswordAnalysis};
pub use orchestrator::{estimate, estimate_batch, EstimateRequest, EstimateResult};
pub use rating::Rating;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_is_reachable() {
        let result = estimate("password", "bcrypt_cost10", "consumer").unwrap();
        assert_eq!(result.guess_number, 1);
    }
}
