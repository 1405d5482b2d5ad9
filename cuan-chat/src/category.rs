//! Category matching: direct name hit, then the fixed keyword table, then
//! the "Lainnya" catch-all.
//!
//! Keyword → canonical name and canonical name → user row are separate
//! steps so each stays testable on its own; resolution never creates rows.

use cuan_core::Category;

/// Canonical expense categories and their trigger keywords, in priority
/// order. Names line up with the category set seeded for every user.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Makanan & Minuman",
        &[
            "makan", "nasi", "ayam", "bakso", "mie", "kopi", "teh", "jus", "snack", "sarapan",
            "minum", "siang", "resto", "cafe", "warteg", "indomie", "pizza", "burger", "sate",
            "soto", "gofood", "grabfood",
        ],
    ),
    (
        "Transportasi",
        &[
            "grab", "gojek", "taxi", "taksi", "bensin", "bbm", "parkir", "tol", "bus", "kereta",
            "ojek", "ojol", "pertalite", "pertamax",
        ],
    ),
    (
        "Belanja",
        &[
            "belanja", "beli", "indomaret", "alfamart", "supermarket", "toko", "mall", "tokped",
            "shopee", "lazada",
        ],
    ),
    (
        "Hiburan",
        &["nonton", "bioskop", "game", "netflix", "spotify", "main", "karaoke"],
    ),
    (
        "Tagihan",
        &["listrik", "air", "internet", "wifi", "pulsa", "kuota", "token", "pln", "tagihan"],
    ),
    ("Kesehatan", &["obat", "dokter", "apotek", "vitamin", "klinik"]),
    ("Pendidikan", &["buku", "kursus", "les", "sekolah", "kuliah", "udemy"]),
];

/// Catch-all category every user is seeded with.
pub const CATCH_ALL_CATEGORY: &str = "Lainnya";

/// First keyword hit in table order decides the canonical name.
pub fn keyword_category(msg: &str) -> Option<&'static str> {
    for (name, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| msg.contains(kw)) {
            return Some(name);
        }
    }
    None
}

/// Resolve a canonical name against the user's actual rows, exact match.
pub fn find_by_name<'a>(name: &str, rows: &'a [Category]) -> Option<&'a Category> {
    rows.iter().find(|c| c.name == name)
}

/// Direct hit: the message mentions a category by full name or first word.
/// Row order (as supplied by storage) breaks ties.
pub fn direct_match<'a>(msg: &str, rows: &'a [Category]) -> Option<&'a Category> {
    rows.iter().find(|c| {
        let name = c.name.to_lowercase();
        let first_word = name.split_whitespace().next().unwrap_or(name.as_str());
        msg.contains(first_word) || msg.contains(name.as_str())
    })
}

/// Fallback chain for transaction parsing: direct match, keyword table,
/// catch-all. `None` only when even "Lainnya" is missing.
pub fn match_category<'a>(msg: &str, rows: &'a [Category]) -> Option<&'a Category> {
    direct_match(msg, rows)
        .or_else(|| keyword_category(msg).and_then(|name| find_by_name(name, rows)))
        .or_else(|| find_by_name(CATCH_ALL_CATEGORY, rows))
}

/// Budget queries resolve the same way minus the catch-all: an unmatched
/// query should ask the user which category, not report the "Lainnya"
/// budget.
pub fn match_category_for_query<'a>(msg: &str, rows: &'a [Category]) -> Option<&'a Category> {
    direct_match(msg, rows).or_else(|| keyword_category(msg).and_then(|name| find_by_name(name, rows)))
}
