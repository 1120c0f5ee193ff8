// src/core/sanitize.rs

/// Comparison-safe form of a text value: trim, lower-case, strip diacritics.
/// Originals are kept for display; this form is for keys and comparisons only.
/// Idempotent: normalize(normalize(x)) == normalize(x).
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.trim().chars() {
        for lc in ch.to_lowercase() {
            // Combining marks carry accents in decomposed input, and
            // lowercasing can emit them too (İ → i + U+0307); drop both.
            if ('\u{0300}'..='\u{036f}').contains(&lc) { continue; }
            out.push(fold_diacritic(lc));
        }
    }
    out
}

/// Map a lower-case Latin-1-range accented letter to its base letter.
/// Covers the characters the feed actually produces (Spanish text).
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

/// File-name stem from a contract identifier: keep alphanumerics, collapse
/// whitespace runs to '_', drop everything else.
pub fn sanitize_contract_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
