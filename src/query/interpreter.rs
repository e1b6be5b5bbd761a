//! Natural-Language Query Interpreter
//!
//! Translates free text into a `PredicateSet` by looking for fixed phrases. This is a
//! heuristic, not a parser: every rule scans the whole normalized query on its own,
//! unrecognized wording contributes nothing, and malformed fragments (a missing number,
//! a multi-letter "character") silently drop that one predicate.
//!
//! Known ambiguity: "palindromic" is a substring of "non-palindromic", so a query asking
//! for non-palindromic strings is read as asking for palindromes.

use super::types::{Predicate, PredicateSet};

const PALINDROME_PHRASES: [&str; 2] = ["palindromic", "palindrome"];
const NON_PALINDROME_PHRASE: &str = "non-palindromic";
const SINGLE_WORD_PHRASE: &str = "single word";
const TWO_WORDS_PHRASES: [&str; 2] = ["two words", "2 words"];
const LONGER_THAN_PHRASE: &str = "longer than";
const LETTER_PHRASE: &str = "containing the letter";
const FIRST_VOWEL_PHRASE: &str = "contain the first vowel";
const CONTAINS_PHRASE: &str = "contains";

/// A named extraction rule over the normalized query text.
pub struct Rule {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<Predicate>,
}

/// Rules in evaluation order. Each sees the full normalized query.
pub const RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        extract: palindrome_rule,
    },
    Rule {
        name: "word_count",
        extract: word_count_rule,
    },
    Rule {
        name: "min_length",
        extract: min_length_rule,
    },
    Rule {
        name: "contains_character",
        extract: contains_character_rule,
    },
];

/// Lower-cases and trims the query.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Extracts every predicate the query's phrasing implies.
///
/// Never fails; an empty set means nothing was recognized.
pub fn interpret(query: &str) -> PredicateSet {
    let normalized = normalize(query);

    RULES
        .iter()
        .filter_map(|rule| {
            let predicate = (rule.extract)(&normalized)?;
            tracing::debug!("Query rule '{}' produced {:?}", rule.name, predicate);
            Some(predicate)
        })
        .fold(PredicateSet::new(), PredicateSet::with)
}

pub fn palindrome_rule(query: &str) -> Option<Predicate> {
    if PALINDROME_PHRASES.iter().any(|p| query.contains(p)) {
        Some(Predicate::IsPalindrome(true))
    } else if query.contains(NON_PALINDROME_PHRASE) {
        Some(Predicate::IsPalindrome(false))
    } else {
        None
    }
}

pub fn word_count_rule(query: &str) -> Option<Predicate> {
    if query.contains(SINGLE_WORD_PHRASE) {
        Some(Predicate::WordCount(1))
    } else if TWO_WORDS_PHRASES.iter().any(|p| query.contains(p)) {
        Some(Predicate::WordCount(2))
    } else {
        None
    }
}

/// "longer than N" means strictly longer, so the minimum is N + 1.
///
/// N may be negative; a bound of zero or below clamps to `MinLength(0)`, which every
/// record satisfies.
pub fn min_length_rule(query: &str) -> Option<Predicate> {
    let n: i64 = first_token_after(query, LONGER_THAN_PHRASE)?.parse().ok()?;
    let min = n.checked_add(1)?.max(0);
    Some(Predicate::MinLength(usize::try_from(min).ok()?))
}

/// The first matching phrase decides; later phrases are not tried even when the
/// winning one yields no character.
pub fn contains_character_rule(query: &str) -> Option<Predicate> {
    let c = if query.contains(LETTER_PHRASE) {
        let token = first_token_after(query, LETTER_PHRASE)?;
        single_letter(&strip_quotes(token))?
    } else if query.contains(FIRST_VOWEL_PHRASE) {
        'a'
    } else if query.contains(CONTAINS_PHRASE) {
        let token = first_token_after(query, CONTAINS_PHRASE)?
            .trim_matches(|c: char| matches!(c, '.' | ',' | ':' | ';'));
        single_letter(&strip_quotes(token))?
    } else {
        return None;
    };

    Some(Predicate::ContainsCharacter(c))
}

/// First whitespace-delimited token in the text between the first and second
/// occurrences of `phrase` (or the end of the query).
fn first_token_after<'a>(query: &'a str, phrase: &str) -> Option<&'a str> {
    query.split(phrase).nth(1)?.split_whitespace().next()
}

fn strip_quotes(token: &str) -> String {
    token.chars().filter(|c| !matches!(c, '"' | '\'')).collect()
}

fn single_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}
