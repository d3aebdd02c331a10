//! The analyzer: scans a password for six independent kinds of structure
//! and emits a flat, duplicate-tolerant list of typed [`Match`]es. No
//! deduplication happens across detectors here — the DP engine in
//! [`crate::dp`] picks the cheapest non-overlapping cover afterward.

use std::collections::HashMap;

use itertools::Itertools;

use crate::charclass::{self, CharSets};
use crate::data::{self, AdjacencyGraph, DataStore};

const MIN_DICTIONARY_TOKEN_LEN: usize = 2;
const MIN_WALK_LENGTH: usize = 3;
const MIN_SEQUENCE_LENGTH: usize = 3;
const LEET_COMBINATION_CAP: usize = 1024;
const DATE_SEPARATORS: [char; 3] = ['/', '-', '.'];

/// A substring found verbatim (or reversed) in a frequency-ranked wordlist.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct DictionaryMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub word: String,
    pub rank: u32,
    pub dictionary_name: &'static str,
    pub reversed: bool,
}

/// A dictionary word recovered after de-l33ting one or more characters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct LeetMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub word: String,
    pub rank: u32,
    pub dictionary_name: &'static str,
    /// leet-char-used -> original char it replaced.
    pub sub_table: HashMap<char, char>,
}

/// A keyboard/keypad walk: a run of adjacent keys on one of the packaged graphs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct KeyboardMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub graph: &'static str,
    pub turns: usize,
    pub shifted_count: usize,
}

/// A constant-delta run of code points (`"abc"`, `"987"`, `"zyx"`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct SequenceMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub sequence_name: &'static str,
    pub ascending: bool,
    pub delta: i32,
}

/// A calendar date, with or without a separator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct DateMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub year: i16,
    pub month: u32,
    pub day: u32,
    pub separator: String,
    pub has_separator: bool,
}

/// A repeated character or substring (`"aaaa"`, `"abab"`, `"xyzxyzxyz"`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct RepeatMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub base_token: String,
    pub base_guesses: u64,
    pub repeat_count: usize,
}

/// A segment the DP engine couldn't cover any cheaper way; charged at brute-force cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct BruteForceMatch {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub guesses: Option<u64>,
    pub cardinality: u64,
}

/// One detected pattern covering `password[i..=j]`. A sum type with one
/// variant per pattern kind, sharing a common `{i, j, token, guesses}`
/// prefix that callers reach through the accessor methods below.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
#[cfg_attr(feature = "ser", serde(tag = "pattern", rename_all = "snake_case"))]
pub enum Match {
    Dictionary(DictionaryMatch),
    Leet(LeetMatch),
    Keyboard(KeyboardMatch),
    Sequence(SequenceMatch),
    Date(DateMatch),
    Repeat(RepeatMatch),
    BruteForce(BruteForceMatch),
}

impl Match {
    pub fn i(&self) -> usize {
        match self {
            Match::Dictionary(m) => m.i,
            Match::Leet(m) => m.i,
            Match::Keyboard(m) => m.i,
            Match::Sequence(m) => m.i,
            Match::Date(m) => m.i,
            Match::Repeat(m) => m.i,
            Match::BruteForce(m) => m.i,
        }
    }

    pub fn j(&self) -> usize {
        match self {
            Match::Dictionary(m) => m.j,
            Match::Leet(m) => m.j,
            Match::Keyboard(m) => m.j,
            Match::Sequence(m) => m.j,
            Match::Date(m) => m.j,
            Match::Repeat(m) => m.j,
            Match::BruteForce(m) => m.j,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Match::Dictionary(m) => &m.token,
            Match::Leet(m) => &m.token,
            Match::Keyboard(m) => &m.token,
            Match::Sequence(m) => &m.token,
            Match::Date(m) => &m.token,
            Match::Repeat(m) => &m.token,
            Match::BruteForce(m) => &m.token,
        }
    }

    pub fn guesses(&self) -> Option<u64> {
        match self {
            Match::Dictionary(m) => m.guesses,
            Match::Leet(m) => m.guesses,
            Match::Keyboard(m) => m.guesses,
            Match::Sequence(m) => m.guesses,
            Match::Date(m) => m.guesses,
            Match::Repeat(m) => m.guesses,
            Match::BruteForce(m) => m.guesses,
        }
    }

    pub fn set_guesses(&mut self, guesses: u64) {
        let slot = match self {
            Match::Dictionary(m) => &mut m.guesses,
            Match::Leet(m) => &mut m.guesses,
            Match::Keyboard(m) => &mut m.guesses,
            Match::Sequence(m) => &mut m.guesses,
            Match::Date(m) => &mut m.guesses,
            Match::Repeat(m) => &mut m.guesses,
            Match::BruteForce(m) => &mut m.guesses,
        };
        *slot = Some(guesses);
    }

    /// Short machine name used for the winning-attack label and the decomposition report.
    pub fn pattern_name(&self) -> &'static str {
        match self {
            Match::Dictionary(_) => "dictionary",
            Match::Leet(_) => "leet",
            Match::Keyboard(_) => "keyboard",
            Match::Sequence(_) => "sequence",
            Match::Date(_) => "date",
            Match::Repeat(_) => "repeat",
            Match::BruteForce(_) => "brute_force",
        }
    }

    pub fn make_bruteforce(token: &str, i: usize, j: usize) -> Match {
        Match::BruteForce(BruteForceMatch {
            i,
            j,
            token: token.to_string(),
            guesses: Some(charclass::bruteforce_guesses(token)),
            cardinality: charclass::compute_cardinality(token),
        })
    }
}

/// Shared analysis result: the stripped password plus every candidate match
/// found by the six detectors, in detector order. Computed once per
/// `estimate()` call and fed to every estimator.
#[derive(Debug, Clone)]
pub struct PasswordAnalysis {
    pub password: String,
    pub length: usize,
    pub charsets: CharSets,
    pub cardinality: u64,
    pub matches: Vec<Match>,
}

impl PasswordAnalysis {
    pub fn matches_of<'a>(&'a self, pred: impl Fn(&Match) -> bool + 'a) -> impl Iterator<Item = &'a Match> {
        self.matches.iter().filter(move |m| pred(m))
    }
}

/// Run the full detector pipeline on a password: strip NUL bytes, compute
/// character classes, then run dictionary, leet, keyboard, sequence, date,
/// and repeat detection in that order.
pub fn analyze(password_raw: &str) -> PasswordAnalysis {
    let password: String = password_raw.chars().filter(|&c| c != '\0').collect();
    let chars: Vec<char> = password.chars().collect();
    let charsets = charclass::detect_charsets(&password);
    let cardinality = charsets.cardinality();

    let mut analysis = PasswordAnalysis {
        password: password.clone(),
        length: chars.len(),
        charsets,
        cardinality,
        matches: Vec::new(),
    };

    if chars.is_empty() {
        return analysis;
    }

    let store = data::store();

    analysis.matches.extend(detect_dictionary_matches(&chars, store));
    analysis.matches.extend(detect_leet_matches(&chars, store));
    analysis.matches.extend(detect_keyboard_walks(&chars, store));
    analysis.matches.extend(detect_sequences(&chars));
    analysis.matches.extend(detect_dates(&chars));
    analysis.matches.extend(detect_repeats(&password, &chars));

    analysis
}

fn substring(chars: &[char], i: usize, j: usize) -> String {
    chars[i..=j].iter().collect()
}

fn reverse_str(s: &str) -> String {
    s.chars().rev().collect()
}

// ---------------------------------------------------------------- dictionary

fn detect_dictionary_matches(chars: &[char], store: &DataStore) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    for i in 0..n {
        for j in i..n {
            if j - i + 1 < MIN_DICTIONARY_TOKEN_LEN {
                continue;
            }
            let token = substring(chars, i, j);
            let token_lower = token.to_lowercase();
            let token_reversed = reverse_str(&token_lower);

            for &(dict_name, ref wordlist) in store.wordlists() {
                let rank = wordlist.rank(&token_lower);
                if rank > 0 {
                    matches.push(Match::Dictionary(DictionaryMatch {
                        i,
                        j,
                        token: token.clone(),
                        guesses: None,
                        word: token_lower.clone(),
                        rank,
                        dictionary_name: dict_name,
                        reversed: false,
                    }));
                }
                if token_reversed != token_lower {
                    let rev_rank = wordlist.rank(&token_reversed);
                    if rev_rank > 0 {
                        matches.push(Match::Dictionary(DictionaryMatch {
                            i,
                            j,
                            token: token.clone(),
                            guesses: None,
                            word: token_reversed.clone(),
                            rank: rev_rank,
                            dictionary_name: dict_name,
                            reversed: true,
                        }));
                    }
                }
            }
        }
    }
    matches
}

// --------------------------------------------------------------------- leet

fn detect_leet_matches(chars: &[char], store: &DataStore) -> Vec<Match> {
    let n = chars.len();
    let leet = store.leet_table();
    let mut matches = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let token = substring(chars, i, j);
            let token_chars: Vec<char> = token.chars().collect();

            let positions: Vec<(usize, char, &[char])> = token_chars
                .iter()
                .enumerate()
                .filter(|(_, &c)| leet.is_leet_char(c))
                .map(|(pos, &c)| (pos, c, leet.originals_for(c)))
                .collect();

            if positions.is_empty() {
                continue;
            }

            let options: Vec<Vec<char>> = positions
                .iter()
                .map(|(_, leet_char, originals)| {
                    let mut opts: Vec<char> = originals.to_vec();
                    opts.push(*leet_char);
                    opts
                })
                .collect();

            for combo in options.into_iter().multi_cartesian_product().take(LEET_COMBINATION_CAP) {
                let mut de_leeted: Vec<char> = token.to_lowercase().chars().collect();
                let mut sub_table: HashMap<char, char> = HashMap::new();
                let mut any_sub = false;

                for (idx, &(pos, leet_char, _)) in positions.iter().enumerate() {
                    let replacement = combo[idx];
                    if replacement != leet_char {
                        de_leeted[pos] = replacement;
                        sub_table.insert(leet_char, replacement);
                        any_sub = true;
                    }
                }

                if !any_sub {
                    continue;
                }

                let de_leeted_word: String = de_leeted.into_iter().collect();
                for &(dict_name, ref wordlist) in store.wordlists() {
                    let rank = wordlist.rank(&de_leeted_word);
                    if rank > 0 {
                        matches.push(Match::Leet(LeetMatch {
                            i,
                            j,
                            token: token.clone(),
                            guesses: None,
                            word: de_leeted_word.clone(),
                            rank,
                            dictionary_name: dict_name,
                            sub_table: sub_table.clone(),
                        }));
                    }
                }
            }
        }
    }
    matches
}

// ---------------------------------------------------------------- keyboard

fn is_shifted(c: char) -> bool {
    c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c)
}

fn detect_keyboard_walks(chars: &[char], store: &DataStore) -> Vec<Match> {
    let mut matches = Vec::new();
    for &(graph_name, ref graph) in store.graphs() {
        matches.extend(detect_walks_for_graph(chars, graph_name, graph));
    }
    matches
}

fn detect_walks_for_graph(chars: &[char], graph_name: &'static str, graph: &AdjacencyGraph) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    if n < MIN_WALK_LENGTH {
        return matches;
    }

    let mut i = 0;
    while i < n - 1 {
        let mut j = i + 1;
        let mut last_direction: Option<usize> = None;
        let mut turns = 0usize;
        let mut shifted_count: usize = if is_shifted(chars[i]) { 1 } else { 0 };

        if !graph.contains(chars[i].to_ascii_lowercase()) {
            i += 1;
            continue;
        }

        while j < n {
            let cur = chars[j].to_ascii_lowercase();
            let prev = chars[j - 1].to_ascii_lowercase();

            if !graph.contains(prev) {
                break;
            }
            let direction = match graph.direction_to(prev, cur) {
                Some(d) => d,
                None => break,
            };

            match last_direction {
                None => turns = 1,
                Some(d) if d != direction => turns += 1,
                _ => {}
            }
            last_direction = Some(direction);

            if is_shifted(chars[j]) {
                shifted_count += 1;
            }
            j += 1;
        }

        let walk_length = j - i;
        if walk_length >= MIN_WALK_LENGTH {
            let token = substring(chars, i, j - 1);
            matches.push(Match::Keyboard(KeyboardMatch {
                i,
                j: j - 1,
                token,
                guesses: None,
                graph: graph_name,
                turns,
                shifted_count,
            }));
            i = j;
        } else {
            i += 1;
        }
    }
    matches
}

// --------------------------------------------------------------- sequence

fn classify_sequence(c: char) -> &'static str {
    if c.is_ascii_digit() {
        "digit"
    } else if c.is_ascii_lowercase() {
        "lower"
    } else if c.is_ascii_uppercase() {
        "upper"
    } else {
        "other"
    }
}

fn detect_sequences(chars: &[char]) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    if n < MIN_SEQUENCE_LENGTH {
        return matches;
    }

    let mut i = 0;
    while i < n - 1 {
        let delta = chars[i + 1] as i32 - chars[i] as i32;
        if delta.abs() != 1 && delta.abs() != 2 {
            i += 1;
            continue;
        }

        let mut j = i + 2;
        while j < n && (chars[j] as i32 - chars[j - 1] as i32) == delta {
            j += 1;
        }

        let length = j - i;
        if length >= MIN_SEQUENCE_LENGTH {
            let token = substring(chars, i, j - 1);
            let sequence_name = classify_sequence(chars[i]);
            matches.push(Match::Sequence(SequenceMatch {
                i,
                j: j - 1,
                token,
                guesses: None,
                sequence_name,
                ascending: delta > 0,
                delta,
            }));
            i = j;
        } else {
            i += 1;
        }
    }
    matches
}

// ------------------------------------------------------------------- date

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

fn valid_date(year: i32, month: i32, day: i32) -> bool {
    if year != 0 && !(1900..=2099).contains(&year) {
        return false;
    }
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn expand_year(two_digit: i32) -> i32 {
    let pivot = current_year() % 100 + 10;
    if two_digit <= pivot {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

fn make_date_match(token: &str, i: usize, j: usize, year: i32, month: i32, day: i32, separator: &str) -> Match {
    Match::Date(DateMatch {
        i,
        j,
        token: token.to_string(),
        guesses: None,
        year: year as i16,
        month: month as u32,
        day: day as u32,
        separator: separator.to_string(),
        has_separator: !separator.is_empty(),
    })
}

fn parse_no_separator(digits: &str, i: usize, j: usize) -> Vec<Match> {
    let mut results = Vec::new();
    let n = digits.len();
    let slice = |a: usize, b: usize| -> i32 { digits[a..b].parse().unwrap() };

    if n == 8 {
        let (m, d, y) = (slice(0, 2), slice(2, 4), slice(4, 8));
        if valid_date(y, m, d) {
            results.push(make_date_match(digits, i, j, y, m, d, ""));
        }

        let (d2, m2, y2) = (slice(0, 2), slice(2, 4), slice(4, 8));
        if m2 != m && valid_date(y2, m2, d2) {
            results.push(make_date_match(digits, i, j, y2, m2, d2, ""));
        }

        let (y3, m3, d3) = (slice(0, 4), slice(4, 6), slice(6, 8));
        if valid_date(y3, m3, d3) {
            results.push(make_date_match(digits, i, j, y3, m3, d3, ""));
        }
    } else if n == 6 {
        let (m, d, y) = (slice(0, 2), slice(2, 4), expand_year(slice(4, 6)));
        if valid_date(y, m, d) {
            results.push(make_date_match(digits, i, j, y, m, d, ""));
        }

        let (d2, m2, y2) = (slice(0, 2), slice(2, 4), expand_year(slice(4, 6)));
        if m2 != m && valid_date(y2, m2, d2) {
            results.push(make_date_match(digits, i, j, y2, m2, d2, ""));
        }

        let (y3, m3, d3) = (expand_year(slice(0, 2)), slice(2, 4), slice(4, 6));
        if valid_date(y3, m3, d3) {
            results.push(make_date_match(digits, i, j, y3, m3, d3, ""));
        }
    } else if n == 4 {
        let (m, d) = (slice(0, 2), slice(2, 4));
        if (1..=12).contains(&m) && (1..=31).contains(&d) {
            results.push(make_date_match(digits, i, j, 0, m, d, ""));
        }

        let (d2, m2) = (slice(0, 2), slice(2, 4));
        if m2 != m && (1..=12).contains(&m2) && (1..=31).contains(&d2) {
            results.push(make_date_match(digits, i, j, 0, m2, d2, ""));
        }
    }

    results
}

fn parse_with_separator(parts: &[&str], sep: char, i: usize, j: usize, token: &str) -> Vec<Match> {
    let mut results = Vec::new();
    let nums: Result<Vec<i32>, _> = parts.iter().map(|p| p.parse::<i32>()).collect();
    let nums = match nums {
        Ok(v) => v,
        Err(_) => return results,
    };
    let (a, b, c) = (nums[0], nums[1], nums[2]);
    let sep_str = sep.to_string();

    if (1900..=2099).contains(&c) || (0..=99).contains(&c) {
        let y = if c >= 100 { c } else { expand_year(c) };
        if valid_date(y, a, b) {
            results.push(make_date_match(token, i, j, y, a, b, &sep_str));
        }
        if a != b && valid_date(y, b, a) {
            results.push(make_date_match(token, i, j, y, b, a, &sep_str));
        }
    }

    if (1900..=2099).contains(&a) && valid_date(a, b, c) {
        results.push(make_date_match(token, i, j, a, b, c, &sep_str));
    }

    results
}

fn parse_with_separator_2part(parts: &[&str], sep: char, i: usize, j: usize, token: &str) -> Vec<Match> {
    let mut results = Vec::new();
    let a: i32 = match parts[0].parse() {
        Ok(v) => v,
        Err(_) => return results,
    };
    let b: i32 = match parts[1].parse() {
        Ok(v) => v,
        Err(_) => return results,
    };
    if (1..=12).contains(&a) && (1..=31).contains(&b) {
        results.push(make_date_match(token, i, j, 0, a, b, &sep.to_string()));
    }
    results
}

fn try_parse_date(token: &str, i: usize, j: usize) -> Vec<Match> {
    let mut results = Vec::new();

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        results.extend(parse_no_separator(token, i, j));
    }

    for &sep in &DATE_SEPARATORS {
        if token.contains(sep) {
            let parts: Vec<&str> = token.split(sep).collect();
            if parts.len() == 3 {
                results.extend(parse_with_separator(&parts, sep, i, j, token));
            } else if parts.len() == 2 {
                results.extend(parse_with_separator_2part(&parts, sep, i, j, token));
            }
        }
    }

    results
}

fn detect_dates(chars: &[char]) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    for i in 0..n {
        let max_len = 10.min(n - i);
        for length in 4..=max_len {
            let j = i + length - 1;
            let token = substring(chars, i, j);
            matches.extend(try_parse_date(&token, i, j));
        }
    }
    deduplicate_dates(matches)
}

fn deduplicate_dates(matches: Vec<Match>) -> Vec<Match> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for m in matches {
        if let Match::Date(ref d) = m {
            let key = (d.i, d.j, d.year, d.month, d.day, d.separator.clone());
            if seen.insert(key) {
                result.push(m);
            }
        }
    }
    result
}

// ----------------------------------------------------------------- repeat

lazy_static::lazy_static! {
    static ref GREEDY_REPEAT: fancy_regex::Regex = fancy_regex::Regex::new(r"(.+)\1+").unwrap();
    static ref LAZY_REPEAT: fancy_regex::Regex = fancy_regex::Regex::new(r"(.+?)\1+").unwrap();
}

fn byte_range_to_char_range(s: &str, start: usize, end: usize) -> (usize, usize) {
    let i = s[..start].chars().count();
    let j = s[..end].chars().count() - 1;
    (i, j)
}

fn detect_repeats(password: &str, chars: &[char]) -> Vec<Match> {
    let mut matches: Vec<Match> = Vec::new();
    if chars.len() < 2 {
        return matches;
    }

    for caps in GREEDY_REPEAT.captures_iter(password) {
        let caps = match caps {
            Ok(c) => c,
            Err(_) => continue,
        };
        let whole = caps.get(0).unwrap();
        let base = caps.get(1).unwrap();
        let (i, j) = byte_range_to_char_range(password, whole.start(), whole.end());
        let base_token = base.as_str().to_string();
        let base_len = base_token.chars().count();
        let repeat_count = (j - i + 1) / base_len;
        matches.push(Match::Repeat(RepeatMatch {
            i,
            j,
            token: whole.as_str().to_string(),
            guesses: None,
            base_token,
            base_guesses: 0,
            repeat_count,
        }));
    }

    for caps in LAZY_REPEAT.captures_iter(password) {
        let caps = match caps {
            Ok(c) => c,
            Err(_) => continue,
        };
        let whole = caps.get(0).unwrap();
        let base = caps.get(1).unwrap();
        let (i, j) = byte_range_to_char_range(password, whole.start(), whole.end());
        let base_token = base.as_str().to_string();

        let already_exists = matches.iter().any(|m| match m {
            Match::Repeat(r) => r.i == i && r.j == j && r.base_token == base_token,
            _ => false,
        });
        if !already_exists {
            let base_len = base_token.chars().count();
            let repeat_count = (j - i + 1) / base_len;
            matches.push(Match::Repeat(RepeatMatch {
                i,
                j,
                token: whole.as_str().to_string(),
                guesses: None,
                base_token,
                base_guesses: 0,
                repeat_count,
            }));
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_no_matches() {
        let a = analyze("");
        assert_eq!(a.length, 0);
        assert!(a.matches.is_empty());
    }

    #[test]
    fn strips_nul_bytes() {
        let a = analyze("pass\0word");
        assert_eq!(a.password, "password");
        assert_eq!(a.length, 8);
    }

    #[test]
    fn finds_password_dictionary_match() {
        let a = analyze("password");
        let hit = a.matches.iter().any(|m| matches!(m, Match::Dictionary(d) if d.word == "password" && d.rank == 1));
        assert!(hit);
    }

    #[test]
    fn detects_keyboard_walk() {
        let a = analyze("qwerty");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Keyboard(k) if k.graph == "qwerty" && k.token.len() >= 3));
        assert!(hit);
    }

    #[test]
    fn detects_ascending_digit_sequence() {
        let a = analyze("12345");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Sequence(s) if s.sequence_name == "digit" && s.ascending));
        assert!(hit);
    }

    #[test]
    fn detects_date_without_separator() {
        let a = analyze("01151987");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Date(d) if d.month == 1 && d.day == 15 && d.year == 1987));
        assert!(hit);
    }

    #[test]
    fn detects_date_with_separator() {
        let a = analyze("01/15/1987");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Date(d) if d.has_separator && d.separator == "/" && d.year == 1987));
        assert!(hit);
    }

    #[test]
    fn detects_simple_repeat() {
        let a = analyze("aaaaaa");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Repeat(r) if r.base_token == "a" && r.repeat_count == 6));
        assert!(hit);
    }

    #[test]
    fn detects_multichar_repeat() {
        let a = analyze("abcabcabc");
        let hit = a
            .matches
            .iter()
            .any(|m| matches!(m, Match::Repeat(r) if r.base_token == "abc" && r.repeat_count == 3));
        assert!(hit);
    }

    #[test]
    fn detects_leet_dictionary_match() {
        let a = analyze("p4ssword");
        let hit = a.matches.iter().any(|m| matches!(m, Match::Leet(l) if l.word == "password"));
        assert!(hit);
    }

    #[test]
    fn bruteforce_match_carries_cardinality() {
        let m = Match::make_bruteforce("a1", 0, 1);
        assert_eq!(m.i(), 0);
        assert_eq!(m.j(), 1);
        assert!(m.guesses().unwrap() >= 1);
    }
}
