use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Price vocabulary and comparison glyphs that survived extraction, scrubbed
// before tokenization so they never surface as search keywords.
static CUE_SCRUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\brs\b|\bprice\b|\bunder\b|\bbelow\b|\bless than\b|\bupto\b|\bup to\b|\babove\b|\bover\b|\bgreater than\b|\bmore than\b|\bfrom\b|\bbetween\b|\band\b|\bto\b|\bfor\b|\bat\b|[<≤>≥=]",
    )
    .unwrap()
});

static TOKEN_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

// Generic filler plus marketplace noise ("art" matches half the catalog).
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "with", "and", "the", "this", "that", "for", "into", "from", "your", "have", "are",
        "art", "arts", "between", "over", "under", "below", "above", "less", "more", "than",
        "upto", "up", "to", "at", "price", "rs",
    ]
    .into_iter()
    .collect()
});

/// Turns whatever text the price passes left behind into search keywords.
/// Expects lowercased input. Tokens shorter than three characters and stop
/// words are dropped; order and duplicates are preserved so downstream
/// scoring sees the query as typed.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let scrubbed = CUE_SCRUB_RE.replace_all(text, " ");
    TOKEN_SPLIT_RE
        .split(&scrubbed)
        .filter(|token| token.len() > 2 && !STOP_WORDS.contains(*token))
        .map(str::to_string)
        .collect()
}
