//! Description cleanup: strip money tokens and filler, keep the label.

use anyhow::Result;
use regex::Regex;

/// When stripping leaves nothing, fall back to a prefix of the original.
const FALLBACK_PREFIX_LEN: usize = 50;

/// Strip passes run in order, each over the previous pass's output:
/// number+unit tokens, "rp"-prefixed amounts, bare 4+ digit runs, then a
/// preposition plus the single word it introduces ("pake gopay", "di warteg").
const STRIP_PATTERNS: &[&str] = &[
    r"(?i)\d+(?:[.,]\d+)?\s*(?:ribu|rb|k|juta|jt|rbu)",
    r"(?i)rp\.?\s*\d+(?:[.,]\d+)*",
    r"\d{4,}",
    r"(?i)\b(?:pake|pakai|via|dari|lewat|di)\s+\w+",
];

/// Turn the raw message into a display label: strip amounts and filler,
/// collapse whitespace, capitalize the first letter.
pub fn clean_description(original: &str) -> Result<String> {
    let mut text = original.to_string();
    for pattern in STRIP_PATTERNS {
        let re = Regex::new(pattern)?;
        text = re.replace_all(&text, "").trim().to_string();
    }

    let ws = Regex::new(r"\s+")?;
    let mut text = ws.replace_all(&text, " ").trim().to_string();
    if text.is_empty() {
        text = original.chars().take(FALLBACK_PREFIX_LEN).collect();
    }

    Ok(capitalize_first(&text))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
