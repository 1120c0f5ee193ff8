// tests/grouping.rs
//
// Aggregation engine properties: partition behavior, counter sums, tile
// filters, payment mark synthesis.

use poliza_dash::group::{
    self, FilterTag, PaymentMark, StatusClass, contract_of,
};
use poliza_dash::record::{Column, Record};

fn rec(om: &str, cliente: &str, estado: &str, pago: &str) -> Record {
    Record::from_pairs([
        ("No. De OM / Contrato", om),
        ("Cliente", cliente),
        ("Estado", estado),
        ("Pago", pago),
    ])
}

fn all_rows(records: &[Record]) -> Vec<usize> {
    (0..records.len()).collect()
}

#[test]
fn summary_grouping_partitions_input() {
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("A1", "X", "Expedida", "No"),
        rec("A1", "X", "En expedición", "No"), // different status → new group
        rec("B2", "Y", "Sin expedir", ""),
        rec("", "Z", "Expedida", "Si"), // missing contract → sentinel key
    ];
    let rows = all_rows(&records);
    let groups = group::summary_groups(&records, &rows);

    // union of groups == input, each row exactly once, order preserved
    let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.rows.clone()).collect();
    seen.sort_unstable();
    assert_eq!(seen, rows);

    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0].rows, vec![0, 1]);

    // within-group order is insertion order
    for g in &groups {
        let mut sorted = g.rows.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, g.rows);
    }
}

#[test]
fn status_in_key_is_accent_and_case_insensitive() {
    let records = vec![
        rec("A1", "X", "EXPEDIDA", "Si"),
        rec("A1", "X", "expedidá", "Si"),
    ];
    let groups = group::summary_groups(&records, &all_rows(&records));
    assert_eq!(groups.len(), 1);
}

#[test]
fn missing_contract_uses_sentinel() {
    let r = rec("", "Z", "Expedida", "Si");
    assert_eq!(contract_of(&r), "Sin OM asignado");

    // two contract-less rows for the same client share a group
    let records = vec![rec("", "Z", "Expedida", "Si"), rec("", "Z", "Expedida", "No")];
    let groups = group::table_groups(&records, &all_rows(&records));
    assert_eq!(groups.len(), 1);
}

#[test]
fn counters_sum_to_total() {
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("B1", "X", "En expedicion", "No"),
        rec("C1", "X", "Sin expedir", "Si"),
        rec("D1", "X", "Anulada", "Si"), // outside the three states
        rec("E1", "X", "Expedida", ""),
    ];
    let rows = all_rows(&records);
    let groups = group::summary_groups(&records, &rows);
    let s = group::summarize(&records, &groups);

    let other = groups
        .iter()
        .filter(|g| group::status_class(&records, g) == StatusClass::Other)
        .count();
    assert_eq!(s.expedited + s.in_process + s.not_issued + other, s.total);
    assert_eq!(s.paid + s.not_paid, s.total);
    assert_eq!(s.total, 5);
    assert_eq!(s.expedited, 2);
    assert_eq!(s.in_process, 1);
    assert_eq!(s.not_issued, 1);
}

#[test]
fn spec_example_partial_payment() {
    // two rows, same key, Pago Si + No → one group, expedited, not all paid
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("A1", "X", "Expedida", "No"),
    ];
    let rows = all_rows(&records);
    let groups = group::summary_groups(&records, &rows);
    assert_eq!(groups.len(), 1);

    let s = group::summarize(&records, &groups);
    assert_eq!(s.total, 1);
    assert_eq!(s.expedited, 1);
    assert_eq!(s.paid, 0);
    assert_eq!(s.not_paid, 1);

    let table = group::table_groups(&records, &rows);
    assert_eq!(group::payment_mark(&records, &table[0]), PaymentMark::Partial);
}

#[test]
fn empty_feed_yields_zero_counters() {
    let records: Vec<Record> = Vec::new();
    let groups = group::summary_groups(&records, &[]);
    let s = group::summarize(&records, &groups);
    assert_eq!(s.total, 0);
    assert_eq!(s.expedited + s.in_process + s.not_issued + s.paid + s.not_paid, 0);
    assert!(group::table_groups(&records, &[]).is_empty());
}

#[test]
fn filter_all_keeps_every_row() {
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("B1", "Y", "Sin expedir", "No"),
    ];
    let rows = all_rows(&records);
    assert_eq!(group::filter_rows(&records, &rows, FilterTag::All), rows);
}

#[test]
fn status_filters_match_first_member_status() {
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("B1", "Y", "En expedicion", "No"),
        rec("C1", "Z", "Sin expedir", "No"),
    ];
    let rows = all_rows(&records);

    assert_eq!(group::filter_rows(&records, &rows, FilterTag::Expedited), vec![0]);
    assert_eq!(group::filter_rows(&records, &rows, FilterTag::InProcess), vec![1]);
    assert_eq!(group::filter_rows(&records, &rows, FilterTag::NotIssued), vec![2]);
}

#[test]
fn paid_and_not_paid_filters_are_not_complements() {
    // Group 1: fully paid. Group 2: si + empty (not all paid, but no "no").
    // Group 3: si + no.
    let records = vec![
        rec("A1", "X", "Expedida", "Si"),
        rec("B1", "Y", "Expedida", "Si"),
        rec("B1", "Y", "Expedida", ""),
        rec("C1", "Z", "Expedida", "Si"),
        rec("C1", "Z", "Expedida", "No"),
    ];
    let rows = all_rows(&records);
    let groups = group::summary_groups(&records, &rows);
    assert_eq!(groups.len(), 3);

    assert_eq!(group::filter_rows(&records, &rows, FilterTag::Paid), vec![0]);
    // NotPaid needs an explicit "no": group B is excluded even though it is
    // counted as not-paid by the counters
    assert_eq!(group::filter_rows(&records, &rows, FilterTag::NotPaid), vec![3, 4]);

    let s = group::summarize(&records, &groups);
    assert_eq!(s.paid, 1);
    assert_eq!(s.not_paid, 2);
}

#[test]
fn payment_mark_tri_state() {
    let all_si = vec![rec("A", "X", "", "Si"), rec("A", "X", "", "sí")];
    let rows = all_rows(&all_si);
    let g = &group::table_groups(&all_si, &rows)[0];
    assert_eq!(group::payment_mark(&all_si, g), PaymentMark::Paid);

    let all_no = vec![rec("A", "X", "", "No"), rec("A", "X", "", "NO")];
    let g = &group::table_groups(&all_no, &all_rows(&all_no))[0];
    assert_eq!(group::payment_mark(&all_no, g), PaymentMark::Unpaid);

    let mixed = vec![rec("A", "X", "", "Si"), rec("A", "X", "", "No")];
    let g = &group::table_groups(&mixed, &all_rows(&mixed))[0];
    assert_eq!(group::payment_mark(&mixed, g), PaymentMark::Partial);

    // si + blank: not all paid, no explicit no → unpaid mark
    let partial_blank = vec![rec("A", "X", "", "Si"), rec("A", "X", "", "")];
    let g = &group::table_groups(&partial_blank, &all_rows(&partial_blank))[0];
    assert_eq!(group::payment_mark(&partial_blank, g), PaymentMark::Unpaid);
}

#[test]
fn search_matches_identification_or_contract() {
    let records = vec![
        Record::from_pairs([
            ("No. De OM / Contrato", "OM-100"),
            ("Identificación", "900123"),
            ("Cliente", "X"),
        ]),
        Record::from_pairs([
            ("No. De OM / Contrato", "OM-200"),
            ("Identificación", "800456"),
            ("Cliente", "Y"),
        ]),
    ];

    assert_eq!(group::search_rows(&records, "om-1"), vec![0]);
    assert_eq!(group::search_rows(&records, "8004"), vec![1]);
    assert_eq!(group::search_rows(&records, "  "), vec![0, 1]);
    assert!(group::search_rows(&records, "zzz").is_empty());
}

#[test]
fn table_row_fields_come_from_first_member() {
    let records = vec![
        Record::from_pairs([
            ("No. De OM / Contrato", "A1"),
            ("Cliente", "X"),
            ("Comprador responsable", "Ana"),
            ("Estado", "Expedida"),
        ]),
        Record::from_pairs([
            ("No. De OM / Contrato", "A1"),
            ("Cliente", "X"),
            ("Comprador responsable", "Luis"),
            ("Estado", "Sin expedir"),
        ]),
    ];
    let table = group::table_groups(&records, &all_rows(&records));
    assert_eq!(table.len(), 1);
    let first = &records[table[0].rows[0]];
    assert_eq!(first.get(Column::Buyer), "Ana");
    assert_eq!(first.get(Column::Status), "Expedida");
}
