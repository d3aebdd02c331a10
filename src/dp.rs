//! Decomposition engine: picks the cheapest way to cover a password end to
//! end with non-overlapping matches, filling any gap with a synthetic
//! brute-force match over the uncovered span.
//!
//! This is deliberately the simple single-pass recurrence, not zxcvbn's
//! factorial length-weighted search: `M[k]` is the minimum guesses to cover
//! `password[0..=k]`, and `S[k]` is the match sequence that achieves it.
//! There is no `(k, sequence-length)` state — a shorter, cheaper sequence
//! never loses to a longer, cheaper-looking one, so the extra dimension
//! the real zxcvbn algorithm tracks has nothing to do here.

use crate::matching::Match;

/// Best cover of a password: total guesses and the ordered list of matches
/// (including any synthetic brute-force filler) that make it up.
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub guesses: u64,
    pub sequence: Vec<Match>,
}

/// Run the cheapest-cover recurrence over `password`, given every candidate
/// match the analyzer found (already guess-estimated). Matches are grouped
/// by their ending index `j` for O(1) lookup per position.
pub fn decompose(password: &str, matches: &[Match]) -> Decomposition {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();

    if n == 0 {
        return Decomposition {
            guesses: 0,
            sequence: Vec::new(),
        };
    }

    let mut matches_ending_at: Vec<Vec<&Match>> = vec![Vec::new(); n];
    for m in matches {
        if m.j() < n {
            matches_ending_at[m.j()].push(m);
        }
    }

    // m[k] = cheapest guess count to cover chars[0..=k]; back[k] = the match
    // (or None for "extend brute force by one char") that achieves it.
    let mut m: Vec<u64> = vec![u64::MAX; n];
    let mut back: Vec<Option<&Match>> = vec![None; n];

    for k in 0..n {
        // Rule 1: extend a brute-force run by one character.
        let extend_guesses = if k == 0 {
            crate::charclass::bruteforce_guesses(&chars[0..1].iter().collect::<String>())
        } else if m[k - 1] != u64::MAX {
            let token: String = chars[k..=k].iter().collect();
            m[k - 1].saturating_mul(crate::charclass::bruteforce_guesses(&token))
        } else {
            u64::MAX
        };

        if extend_guesses < m[k] {
            m[k] = extend_guesses;
            back[k] = None;
        }

        // Rule 2: end on a detected match.
        for &candidate in &matches_ending_at[k] {
            let guesses = candidate.guesses().unwrap_or(1).max(1);
            let total = if candidate.i() == 0 {
                guesses
            } else if m[candidate.i() - 1] != u64::MAX {
                m[candidate.i() - 1].saturating_mul(guesses)
            } else {
                continue;
            };

            if total < m[k] {
                m[k] = total;
                back[k] = Some(candidate);
            }
        }
    }

    let sequence = unwind(&chars, &back, &matches_ending_at, n);
    Decomposition {
        guesses: m[n - 1],
        sequence,
    }
}

fn unwind<'a>(
    chars: &[char],
    back: &[Option<&'a Match>],
    matches_ending_at: &[Vec<&'a Match>],
    n: usize,
) -> Vec<Match> {
    let mut reversed = Vec::new();
    let mut k = n as isize - 1;

    while k >= 0 {
        match back[k as usize] {
            Some(m) => {
                let i = m.i() as isize;
                reversed.push(m.clone());
                k = i - 1;
            }
            None => {
                // No match ends here in the winning sequence: this position
                // was covered by brute-force extension. Walk left to find the
                // start of this brute-force run (the longest contiguous
                // stretch of `None` back-pointers ending at k).
                let mut start = k;
                while start > 0 && back[start as usize - 1].is_none() {
                    start -= 1;
                }
                let token: String = chars[start as usize..=k as usize].iter().collect();
                reversed.push(Match::make_bruteforce(&token, start as usize, k as usize));
                k = start - 1;
            }
        }
        let _ = matches_ending_at;
    }

    reversed.reverse();
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching;

    #[test]
    fn empty_password_has_zero_guesses() {
        let d = decompose("", &[]);
        assert_eq!(d.guesses, 0);
        assert!(d.sequence.is_empty());
    }

    #[test]
    fn no_matches_falls_back_to_pure_bruteforce() {
        let d = decompose("xqz", &[]);
        assert_eq!(d.guesses, crate::charclass::bruteforce_guesses("xqz"));
        assert_eq!(d.sequence.len(), 1);
    }

    #[test]
    fn dictionary_match_covering_whole_password_wins() {
        let analysis = matching::analyze("password");
        let mut ms = analysis.matches.clone();
        crate::scoring::estimate_all(&mut ms, crate::data::store());
        let d = decompose("password", &ms);
        assert!(d.guesses <= 1);
        assert_eq!(d.sequence.len(), 1);
    }

    #[test]
    fn sequence_guesses_never_exceed_pure_bruteforce() {
        let analysis = matching::analyze("abcdefgh");
        let mut ms = analysis.matches.clone();
        crate::scoring::estimate_all(&mut ms, crate::data::store());
        let d = decompose("abcdefgh", &ms);
        assert!(d.guesses <= crate::charclass::bruteforce_guesses("abcdefgh"));
    }
}
