//! # Slug Derivation
//!
//! Deterministic URL slugs from product names.
//!
//! Product urls are never stored independently of the name: every write
//! re-derives the slug, so the same name always produces the same url.
//! Croatian diacritics (and the common Latin ones) fold to ASCII; any
//! other run of non-alphanumeric characters collapses to one hyphen.

/// Derives a URL slug from a product name.
///
/// ## Example
/// ```rust
/// use catalog_core::slug::slugify;
///
/// assert_eq!(slugify("Red Shoes"), "red-shoes");
/// assert_eq!(slugify("Perilica rublja 8kg"), "perilica-rublja-8kg");
/// assert_eq!(slugify("Čaša za vino"), "casa-za-vino");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if let Some(folded) = fold_diacritic(ch) {
            slug.push_str(folded);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Folds a Latin letter with a diacritic to its ASCII form.
///
/// Characters outside the table (punctuation, non-Latin scripts) return
/// `None` and become separators.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'č' | 'ć' | 'Č' | 'Ć' | 'ç' | 'Ç' => "c",
        'đ' | 'Đ' => "d",
        'š' | 'Š' => "s",
        'ž' | 'Ž' => "z",
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' | 'À' | 'Á' | 'Â' | 'Ä' | 'Ã' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'Ý' => "y",
        'ñ' | 'Ñ' => "n",
        'æ' | 'Æ' => "ae",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

// =============================================================================
// Unit Tests
// =============================================================================
