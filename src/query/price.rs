use super::normalize::parse_amount;
use regex::Regex;
use std::sync::LazyLock;

// Each extraction category is an ordered table tried top to bottom; the first
// pattern that fires wins and its matched text is cut out of the working copy,
// which is what keeps the later passes from re-reading the same cue. Patterns
// with an explicit currency marker sit above their bare counterparts.

// Price ranges: "between X and Y", "from X to Y", "X - Y".
static RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:between|from)\s*rs?\.?\s*([\d]+\s*[kKmM]?)\s*(?:and|to|-)\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"(?:between|from)\s*([\d]+\s*[kKmM]?)\s*(?:and|to|-)\s*([\d]+\s*[kKmM]?)",
        r"rs?\.?\s*([\d]+\s*[kKmM]?)\s*-\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"\b([\d]+\s*[kKmM]?)\s*-\s*([\d]+\s*[kKmM]?)\b",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

// Ceilings: "under X", "below X", "< X", "X or less".
static CEILING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:under|below|less than|upto|up to)\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"(?:under|below|less than|upto|up to)\s*([\d]+\s*[kKmM]?)",
        r"[<≤]\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"[<≤]\s*([\d]+\s*[kKmM]?)",
        r"rs?\.?\s*([\d]+\s*[kKmM]?)\s*(?:or less|and below)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

// Floors: "above X", "over X", "> X", "X or more".
static FLOOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:above|over|greater than|more than|from)\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"(?:above|over|greater than|more than|from)\s*([\d]+\s*[kKmM]?)",
        r"[>≥]\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"[>≥]\s*([\d]+\s*[kKmM]?)",
        r"rs?\.?\s*([\d]+\s*[kKmM]?)\s*(?:or more|and above)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

// Exact prices: "for X", "at X", "= X", and a bare "rs X" mention.
static EXACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:for|at|price of|priced at)\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"(?:for|at|price of|priced at)\s*([\d]+\s*[kKmM]?)",
        r"[=]\s*rs?\.?\s*([\d]+\s*[kKmM]?)",
        r"[=]\s*([\d]+\s*[kKmM]?)",
        r"\brs\.?\s*([\d]+\s*[kKmM]?)\b",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Outcome of a single-amount extraction stage. `matched` reports that some
/// pattern fired (and its text was consumed) even when the captured amount
/// itself did not survive parsing.
#[derive(Debug, Clone, Copy)]
pub struct AmountMatch {
    pub matched: bool,
    pub amount: Option<f64>,
}

impl AmountMatch {
    fn none() -> Self {
        Self {
            matched: false,
            amount: None,
        }
    }
}

/// Tries the range table against the text. A candidate whose amounts both
/// parse is returned sorted (low, high) with its text consumed; a candidate
/// with an unparseable amount is dropped whole and the weaker patterns still
/// get a look at the untouched text.
pub fn extract_range(text: &str) -> (Option<(f64, f64)>, String) {
    for pattern in RANGE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let first = parse_amount(&caps[1]);
            let second = parse_amount(&caps[2]);
            if let (Some(first), Some(second)) = (first, second) {
                let remaining = text.replace(&caps[0], " ");
                return (Some((first.min(second), first.max(second))), remaining);
            }
        }
    }
    (None, text.to_string())
}

/// Tries the ceiling table ("under X" and friends) against the text.
pub fn extract_ceiling(text: &str) -> (AmountMatch, String) {
    extract_single(&CEILING_PATTERNS, text)
}

/// Tries the floor table ("above X" and friends) against the text.
pub fn extract_floor(text: &str) -> (AmountMatch, String) {
    extract_single(&FLOOR_PATTERNS, text)
}

/// Tries the exact-price table ("for X", "rs X", ...) against the text.
pub fn extract_exact(text: &str) -> (AmountMatch, String) {
    extract_single(&EXACT_PATTERNS, text)
}

fn extract_single(patterns: &[Regex], text: &str) -> (AmountMatch, String) {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            let amount = parse_amount(&caps[1]);
            let remaining = text.replace(&caps[0], " ");
            return (
                AmountMatch {
                    matched: true,
                    amount,
                },
                remaining,
            );
        }
    }
    (AmountMatch::none(), text.to_string())
}
