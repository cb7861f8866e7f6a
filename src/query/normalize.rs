use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Rewrites an already lowercased query into the canonical form the price
/// patterns are written against: currency notation collapsed to `rs`,
/// grouping commas removed, whitespace runs reduced to single spaces.
pub fn normalize(text: &str) -> String {
    let text = text
        .replace("rs.", "rs")
        .replace('₹', "rs ")
        .replace("inr", "rs")
        .replace("rupees", "rs");
    let text = strip_grouping_commas(&text);
    WHITESPACE_RE.replace_all(&text, " ").into_owned()
}

// Drops a comma only when both neighbors are digits ("1,200" -> "1200").
// The regex crate has no lookaround, so this is a hand-rolled scan.
fn strip_grouping_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let between_digits = ch == ','
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
        if !between_digits {
            out.push(ch);
        }
    }

    out
}

/// Parses a matched amount substring into a value. A trailing `k` multiplies
/// by 1,000 and a trailing `m` by 1,000,000. Returns `None` when the numeric
/// part does not parse; callers treat that as "no amount", not as an error.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let compact = raw.trim().replace(' ', "");

    let (digits, multiplier) = if compact.ends_with('k') || compact.ends_with('K') {
        (&compact[..compact.len() - 1], 1_000.0)
    } else if compact.ends_with('m') || compact.ends_with('M') {
        (&compact[..compact.len() - 1], 1_000_000.0)
    } else {
        (compact.as_str(), 1.0)
    };

    digits.parse::<f64>().ok().map(|value| value * multiplier)
}
