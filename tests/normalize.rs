// tests/normalize.rs
use poliza_dash::core::sanitize::{normalize, sanitize_contract_filename};

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  En Expedición  "), "en expedicion");
    assert_eq!(normalize("SI"), "si");
}

#[test]
fn normalize_is_accent_insensitive() {
    assert_eq!(normalize("Pagó"), normalize("pago"));
    assert_eq!(normalize("Compañía"), "compania");
    // decomposed form (base letter + combining acute)
    assert_eq!(normalize("Pago\u{0301}"), "pago");
}

#[test]
fn normalize_is_idempotent() {
    for s in ["  Expedida ", "Pagó", "EN EXPEDICIÓN", "sí", "", "a-b_c 9", "İ"] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn normalize_strips_marks_emitted_by_lowercasing() {
    // dotted capital I lowercases to "i" + combining dot above
    assert_eq!(normalize("İ"), "i");
    assert_eq!(normalize("İSTANBUL"), "istanbul");
}

#[test]
fn filename_sanitizing() {
    assert_eq!(sanitize_contract_filename("OM 123 / 4", "Sin_OM"), "OM_123_4");
    assert_eq!(sanitize_contract_filename("   ", "Sin_OM"), "Sin_OM");
    assert_eq!(sanitize_contract_filename("a-b_c", "Sin_OM"), "a-b_c");
}
