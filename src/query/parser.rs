use super::keywords::extract_keywords;
use super::normalize::normalize;
use super::price::{extract_ceiling, extract_exact, extract_floor, extract_range};
use super::types::ParsedQuery;

/// Interprets one raw search-box string into structured filters.
///
/// The passes run in a fixed order (range, ceiling, floor, exact) and each
/// one hands the next a copy of the text with its own match cut out. The
/// exact pass is deliberately last and strongest: "for 5000" pins both
/// bounds even when an earlier phrase already set them. Parsing never
/// fails; input with nothing recognizable degrades to plain keywords.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        return ParsedQuery::default();
    }

    let text = normalize(trimmed);

    let mut min_price: Option<f64> = None;
    let mut max_price: Option<f64> = None;

    let (range, text) = extract_range(&text);
    if let Some((low, high)) = range {
        min_price = Some(low);
        max_price = Some(high);
    }

    let (ceiling, text) = extract_ceiling(&text);
    if ceiling.matched {
        max_price = ceiling.amount;
    }

    // A floor only tightens the lower bound, it never loosens one a range
    // already established.
    let (floor, text) = extract_floor(&text);
    if let Some(value) = floor.amount {
        if min_price.map_or(true, |current| value > current) {
            min_price = Some(value);
        }
    }

    let (exact, text) = extract_exact(&text);
    if let Some(value) = exact.amount {
        min_price = Some(value);
        max_price = Some(value);
    }

    let keywords = extract_keywords(&text);

    let parsed = ParsedQuery {
        keywords,
        min_price,
        max_price,
    };
    tracing::debug!(
        "Interpreted query {:?}: {} keyword(s), min={:?}, max={:?}",
        raw,
        parsed.keywords.len(),
        parsed.min_price,
        parsed.max_price
    );
    parsed
}
