// tests/feed_parse.rs
//
// Feed parsing: header-row mapping, cell trimming, graceful handling of
// missing columns. No network involved; parse() is pure.

use poliza_dash::feed;
use poliza_dash::record::Column;

#[test]
fn parses_header_and_rows() {
    let text = "No. De OM / Contrato,Cliente,Estado,Pago\n\
                A1, Cliente X ,Expedida,Si\n\
                B2,Y,Sin expedir,No\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.records[0].get(Column::Contract), "A1");
    // cells are trimmed once at load
    assert_eq!(set.records[0].get(Column::Client), "Cliente X");
    assert_eq!(set.records[1].get(Column::Status), "Sin expedir");
}

#[test]
fn quoted_cells_and_crlf() {
    let text = "No. De OM / Contrato,Cliente,Descripcion\r\n\
                A1,\"X, S.A.\",\"linea 1\r\nlinea 2\"\r\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.records[0].get(Column::Client), "X, S.A.");
    assert_eq!(set.records[0].get(Column::Description), "linea 1\r\nlinea 2");
}

#[test]
fn missing_columns_become_empty_strings() {
    let text = "Cliente,Estado\nX,Expedida\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.records[0].get(Column::Contract), "");
    assert_eq!(set.records[0].get(Column::Payment), "");
    assert_eq!(set.records[0].get(Column::Client), "X");
}

#[test]
fn unknown_columns_are_ignored() {
    let text = "Columna rara,Cliente\nvalor,X\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.records[0].get(Column::Client), "X");
}

#[test]
fn bom_is_stripped_before_header_match() {
    let text = "\u{feff}No. De OM / Contrato,Cliente\nA1,X\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.records[0].get(Column::Contract), "A1");
}

#[test]
fn header_only_feed_is_valid_and_empty() {
    let set = feed::parse("No. De OM / Contrato,Cliente\n").unwrap();
    assert!(set.is_empty());
}

#[test]
fn empty_body_is_a_feed_error() {
    let err = feed::parse("").unwrap_err();
    assert!(err.to_string().contains("feed unavailable"));
}

#[test]
fn blank_lines_are_skipped() {
    let text = "Cliente,Estado\n\nX,Expedida\n\n\nY,Sin expedir\n";
    let set = feed::parse(text).unwrap();
    assert_eq!(set.len(), 2);
}
