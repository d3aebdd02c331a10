//! Per-pattern guess estimators. Each `*_guesses` function turns one
//! [`crate::matching::Match`] into an estimated guess count; `estimate_all`
//! fills every match's `guesses` field in one pass so the DP engine in
//! [`crate::dp`] never has to know the per-pattern formulas.
//!
//! The combinatorics helpers (`n_ck`, `uppercase_variations`,
//! `leet_variations`) mirror the real zxcvbn estimator math; the individual
//! pattern formulas follow the simpler, single-pass model this crate's decomposition
//! engine is built around rather than zxcvbn's factorial length-weighted one.

use crate::charclass;
use crate::data::{DataStore, LeetTable};
use crate::matching::Match;

/// Binomial coefficient C(n, k), computed iteratively to stay exact in `u64`
/// for the small values the estimators ever call it with.
pub fn n_ck(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Number of distinct capitalization patterns a guesser has to try to land
/// on `word`'s actual casing: 1 for all-lowercase, 2 for all-caps or a
/// capitalized first letter, and a full `sum C(n, i)` otherwise.
pub fn uppercase_variations(word: &str) -> u64 {
    if word.is_empty() || word.chars().all(|c| !c.is_uppercase()) {
        return 1;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        if first.is_uppercase() && chars.clone().all(|c| !c.is_uppercase()) {
            return 2;
        }
    }
    if word.chars().all(|c| !c.is_lowercase()) {
        return 2;
    }

    let upper_count = word.chars().filter(|c| c.is_uppercase()).count() as u64;
    let lower_count = word.chars().filter(|c| c.is_lowercase()).count() as u64;
    let mut variations = 0u64;
    for i in 1..=upper_count.min(lower_count) {
        variations += n_ck(upper_count + lower_count, i);
    }
    variations.max(1)
}

/// Number of distinct de-l33ting choices a guesser has to try: `prod(1 + |subs(c)|)`
/// over the recovered dictionary word's characters.
pub fn leet_variations(word: &str, table: &LeetTable) -> u64 {
    if word.is_empty() {
        return 1;
    }
    let mut variations: u64 = 1;
    for c in word.chars() {
        let subs = table.subs_for(c).len() as u64;
        variations = variations.saturating_mul(1 + subs);
    }
    variations.max(1)
}

pub fn dictionary_guesses(rank: u32, token: &str, reversed: bool) -> u64 {
    let base = (rank as u64).saturating_mul(uppercase_variations(token));
    if reversed {
        base.saturating_mul(2)
    } else {
        base
    }
}

pub fn leet_guesses(rank: u32, token: &str, word: &str, table: &LeetTable) -> u64 {
    let base = (rank as u64).saturating_mul(uppercase_variations(token));
    base.saturating_mul(leet_variations(word, table))
}

fn sequence_base_guesses(first_char: char) -> u64 {
    if "aA01".contains(first_char) {
        4
    } else if first_char.is_ascii_digit() {
        10
    } else if first_char.is_ascii_lowercase() || first_char.is_ascii_uppercase() {
        26
    } else {
        36
    }
}

pub fn sequence_guesses(token: &str, ascending: bool) -> u64 {
    let first = token.chars().next().unwrap_or('a');
    let mut base = sequence_base_guesses(first);
    if !ascending {
        base = base.saturating_mul(2);
    }
    base.saturating_mul(token.chars().count() as u64)
}

/// Days in a 200-year window either side of today, quadrupled if the date
/// carries a separator (a guesser tries all four common separator chars).
pub fn date_guesses(has_separator: bool) -> u64 {
    let guesses: u64 = 200 * 365;
    if has_separator {
        guesses.saturating_mul(4)
    } else {
        guesses
    }
}

pub fn repeat_guesses(base_token: &str, repeat_count: usize) -> u64 {
    charclass::bruteforce_guesses(base_token).saturating_mul(repeat_count as u64)
}

/// `sum_{t=1..turns} C(L-1, t-1) * S * D^t`, then a shifted-key multiplier
/// for however many characters in the walk needed the shift key.
pub fn keyboard_guesses(token_len: usize, turns: usize, shifted_count: usize, starting_positions: usize, avg_degree: f64) -> u64 {
    if token_len == 0 || turns == 0 {
        return 1;
    }
    let l = token_len as u64;
    let s = starting_positions as f64;
    let d = avg_degree.max(1.0);

    let mut guesses = 0f64;
    for t in 1..=turns as u64 {
        guesses += n_ck(l - 1, t - 1) as f64 * s * d.powi(t as i32);
    }

    let unshifted_count = token_len.saturating_sub(shifted_count);
    if shifted_count > 0 {
        if unshifted_count == 0 {
            guesses *= 2.0;
        } else {
            let mut shifted_variations = 0f64;
            for i in 1..=shifted_count.min(unshifted_count) {
                shifted_variations += n_ck((shifted_count + unshifted_count) as u64, i as u64) as f64;
            }
            guesses *= shifted_variations.max(1.0);
        }
    }

    if !guesses.is_finite() || guesses >= u64::MAX as f64 {
        u64::MAX
    } else {
        guesses.round() as u64
    }
}

/// The attacker's expected number of guesses for one mask, given its
/// keyspace: the mask is known, so on average the target sits halfway
/// through that keyspace.
fn mask_guesses_from_keyspace(keyspace: u64) -> u64 {
    (keyspace / 2).max(1)
}

/// Whole-password mask guess: look up the password's character-class mask
/// in the priority-ordered mask library (smallest keyspace, i.e. most
/// commonly-tried mask, first); fall back to the mask's own computed
/// keyspace if it isn't in the packaged library.
pub fn mask_whole_password_guesses(password: &str, store: &DataStore) -> u64 {
    let mask = charclass::mask_string(password);
    let keyspace = store
        .mask_library()
        .iter()
        .find(|entry| entry.mask == mask)
        .map(|entry| entry.keyspace)
        .unwrap_or_else(|| charclass::mask_keyspace(password));
    mask_guesses_from_keyspace(keyspace)
}

/// Estimate guesses for one already-detected match, dispatching on pattern kind.
pub fn estimate_match_guesses(m: &Match, store: &DataStore) -> u64 {
    match m {
        Match::Dictionary(d) => dictionary_guesses(d.rank, &d.token, d.reversed),
        Match::Leet(l) => leet_guesses(l.rank, &l.token, &l.word, store.leet_table()),
        Match::Sequence(s) => sequence_guesses(&s.token, s.ascending),
        Match::Date(d) => date_guesses(d.has_separator),
        Match::Repeat(r) => repeat_guesses(&r.base_token, r.repeat_count),
        Match::Keyboard(k) => {
            let graph = store.graphs().iter().find(|(name, _)| *name == k.graph).map(|(_, g)| g);
            match graph {
                Some(g) => keyboard_guesses(k.token.chars().count(), k.turns, k.shifted_count, g.starting_positions(), g.avg_degree()),
                None => charclass::bruteforce_guesses(&k.token),
            }
        }
        Match::BruteForce(b) => b.guesses.unwrap_or_else(|| charclass::bruteforce_guesses(&b.token)),
    }
}

/// Fill in every match's `guesses` field (and a repeat match's `base_guesses`)
/// in a single pass over the analyzer's output.
pub fn estimate_all(matches: &mut [Match], store: &DataStore) {
    for m in matches.iter_mut() {
        if let Match::Repeat(r) = m {
            r.base_guesses = charclass::bruteforce_guesses(&r.base_token);
        }
        let guesses = estimate_match_guesses(m, store);
        m.set_guesses(guesses);
    }
}

/// The two whole-password estimates the orchestrator compares against the
/// decomposition engine's best cover: brute force over the full charset,
/// and the password's mask looked up in the priority library.
pub fn whole_password_guesses(password: &str, store: &DataStore) -> (u64, u64) {
    let brute = charclass::bruteforce_guesses(password);
    let mask = mask_whole_password_guesses(password, store);
    (brute, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn n_ck_basic_values() {
        assert_eq!(n_ck(5, 0), 1);
        assert_eq!(n_ck(5, 5), 1);
        assert_eq!(n_ck(5, 2), 10);
        assert_eq!(n_ck(2, 5), 0);
    }

    #[test]
    fn uppercase_variations_all_lower_is_one() {
        assert_eq!(uppercase_variations("password"), 1);
    }

    #[test]
    fn uppercase_variations_capitalized_is_two() {
        assert_eq!(uppercase_variations("Password"), 2);
    }

    #[test]
    fn uppercase_variations_all_caps_is_two() {
        assert_eq!(uppercase_variations("PASSWORD"), 2);
    }

    #[test]
    fn uppercase_variations_mixed_case_sums_combinations() {
        assert!(uppercase_variations("PaSsWoRd") > 2);
    }

    #[test]
    fn leet_variations_empty_word_is_one() {
        let store = data::store();
        assert_eq!(leet_variations("", store.leet_table()), 1);
    }

    #[test]
    fn leet_variations_multiplies_substitution_counts() {
        let store = data::store();
        let v = leet_variations("a", store.leet_table());
        assert_eq!(v, 1 + store.leet_table().subs_for('a').len() as u64);
    }

    #[test]
    fn dictionary_guesses_doubles_for_reversed() {
        let forward = dictionary_guesses(1, "password", false);
        let reversed = dictionary_guesses(1, "password", true);
        assert_eq!(reversed, forward * 2);
    }

    #[test]
    fn sequence_guesses_well_known_base_is_four() {
        assert_eq!(sequence_guesses("abcdefgh", true), 4 * 8);
    }

    #[test]
    fn sequence_guesses_descending_doubles() {
        let ascending = sequence_guesses("abcdefgh", true);
        let descending = sequence_guesses("hgfedcba", false);
        assert_eq!(descending, ascending * 2);
    }

    #[test]
    fn date_guesses_separator_quadruples() {
        assert_eq!(date_guesses(true), date_guesses(false) * 4);
    }

    #[test]
    fn repeat_guesses_scales_with_count() {
        assert_eq!(repeat_guesses("a", 6), charclass::bruteforce_guesses("a") * 6);
    }

    #[test]
    fn mask_whole_password_guesses_is_positive() {
        let store = data::store();
        assert!(mask_whole_password_guesses("abcd1234", store) > 0);
    }
}
