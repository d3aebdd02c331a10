//! Character-class classification and cardinality/brute-force cost.
//!
//! Four disjoint classes: `lower` (26), `upper` (26), `digit` (10), and
//! `other` (33) for everything else — punctuation, whitespace, symbols,
//! non-ASCII. Cardinality is the sum of the sizes of the classes present
//! in a token.

/// One of the four character classes a password character can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    /// Size of this class's alphabet.
    pub fn size(self) -> u64 {
        match self {
            CharClass::Lower => 26,
            CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Other => 33,
        }
    }

    /// Classify a single character.
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// The set of character classes present in a token, order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharSets {
    lower: bool,
    upper: bool,
    digit: bool,
    other: bool,
}

impl CharSets {
    pub fn contains(self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digit => self.digit,
            CharClass::Other => self.other,
        }
    }

    fn insert(&mut self, class: CharClass) {
        match class {
            CharClass::Lower => self.lower = true,
            CharClass::Upper => self.upper = true,
            CharClass::Digit => self.digit = true,
            CharClass::Other => self.other = true,
        }
    }

    /// Sum of sizes of the classes present.
    pub fn cardinality(self) -> u64 {
        let mut total = 0;
        if self.lower {
            total += CharClass::Lower.size();
        }
        if self.upper {
            total += CharClass::Upper.size();
        }
        if self.digit {
            total += CharClass::Digit.size();
        }
        if self.other {
            total += CharClass::Other.size();
        }
        total
    }
}

/// Identify which character classes are present in `token`.
pub fn detect_charsets(token: &str) -> CharSets {
    let mut sets = CharSets::default();
    for c in token.chars() {
        sets.insert(CharClass::of(c));
    }
    sets
}

/// Sum of sizes of the classes present in `token`.
pub fn compute_cardinality(token: &str) -> u64 {
    detect_charsets(token).cardinality()
}

/// `cardinality(token)^len(token)`, saturating at `u64::MAX`. Empty token costs 1.
pub fn bruteforce_guesses(token: &str) -> u64 {
    if token.is_empty() {
        return 1;
    }
    let cardinality = compute_cardinality(token);
    let len = token.chars().count() as u32;
    cardinality.checked_pow(len).unwrap_or(u64::MAX).max(1)
}

/// Mask-class token used by the mask estimator: `?l`, `?u`, `?d`, or `?s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl MaskClass {
    pub fn of(c: char) -> MaskClass {
        if c.is_ascii_lowercase() {
            MaskClass::Lower
        } else if c.is_ascii_uppercase() {
            MaskClass::Upper
        } else if c.is_ascii_digit() {
            MaskClass::Digit
        } else {
            MaskClass::Special
        }
    }

    pub fn size(self) -> u64 {
        match self {
            MaskClass::Lower => 26,
            MaskClass::Upper => 26,
            MaskClass::Digit => 10,
            MaskClass::Special => 33,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaskClass::Lower => "?l",
            MaskClass::Upper => "?u",
            MaskClass::Digit => "?d",
            MaskClass::Special => "?s",
        }
    }
}

/// Build the mask-string signature of a password, e.g. `"Tr0ub4dor&3"` -> `?u?l?d?l?l?d?l?l?l?s?d`.
pub fn mask_string(password: &str) -> String {
    password.chars().map(|c| MaskClass::of(c).as_str()).collect()
}

/// Raw per-position keyspace for a password's mask: product of per-char class sizes.
pub fn mask_keyspace(password: &str) -> u64 {
    password
        .chars()
        .map(|c| MaskClass::of(c).size())
        .fold(1u64, |acc, size| acc.saturating_mul(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_sums_present_classes() {
        assert_eq!(compute_cardinality("abc"), 26);
        assert_eq!(compute_cardinality("abcABC"), 52);
        assert_eq!(compute_cardinality("abc123"), 36);
        assert_eq!(compute_cardinality("abc123!@#"), 69);
    }

    #[test]
    fn bruteforce_guesses_empty_is_one() {
        assert_eq!(bruteforce_guesses(""), 1);
    }

    #[test]
    fn bruteforce_guesses_formula() {
        assert_eq!(bruteforce_guesses("aaaaaa"), 26u64.pow(6));
    }

    #[test]
    fn mask_string_classifies_every_char() {
        assert_eq!(mask_string("Tr0ub4dor&3"), "?u?l?d?l?l?d?l?l?l?s?d");
    }

    #[test]
    fn mask_keyspace_matches_product() {
        assert_eq!(mask_keyspace("ab"), 26 * 26);
        assert_eq!(mask_keyspace(""), 1);
    }
}
