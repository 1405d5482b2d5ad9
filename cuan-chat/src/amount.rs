//! Amount extraction: ordered patterns with unit scaling.
//!
//! "15rb" and "15 ribu" mean 15,000; "1,5jt" means 1,500,000; "Rp25.000"
//! and bare "50000" are taken as-is. Indonesian numerals group thousands
//! with "." and mark decimals with "," (1.500,50 = 1500.50).

use anyhow::Result;
use regex::Regex;

/// Tried in order; the first capturing match wins. The multiplier scales
/// shorthand units. The trailing "rbu" entry catches a common misspelling
/// of "rb" without disturbing the main pattern order.
const AMOUNT_PATTERNS: &[(&str, f64)] = &[
    (r"(\d+(?:[.,]\d+)?)\s*(?:ribu|rb|k)", 1_000.0),
    (r"(\d+(?:[.,]\d+)?)\s*(?:juta|jt)", 1_000_000.0),
    (r"rp\.?\s*(\d+(?:[.,]\d+)*)", 1.0),
    (r"(\d{4,})", 1.0),
    (r"(\d+(?:[.,]\d+)?)\s*rbu", 1_000.0),
];

/// Normalize an id-ID numeral and parse it: strip "." grouping, turn the
/// "," decimal mark into ".".
fn parse_id_number(raw: &str) -> Option<f64> {
    raw.replace('.', "").replace(',', ".").parse().ok()
}

/// Pull a rupiah amount out of a lower-cased message.
///
/// `None` means no pattern matched; callers treat a resolved 0 the same
/// way (an expense of nothing is a parse failure, not a transaction).
pub fn extract_amount(msg: &str) -> Result<Option<f64>> {
    for (pattern, multiplier) in AMOUNT_PATTERNS {
        let re = Regex::new(pattern)?;
        if let Some(caps) = re.captures(msg) {
            let Some(num) = parse_id_number(&caps[1]) else {
                continue;
            };
            return Ok(Some(num * multiplier));
        }
    }
    Ok(None)
}
