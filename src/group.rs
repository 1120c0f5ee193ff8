// src/group.rs
//
// Grouping/aggregation engine. Pure functions over the current record list;
// everything here is recomputed fresh on each render pass and holds no state
// between calls. Groups carry row indices into the record slice (no cloning),
// same pattern as a filtered table view.

use std::collections::HashMap;

use crate::config::consts::{
    PAYMENT_NO, PAYMENT_YES, STATUS_EXPEDITED, STATUS_IN_PROCESS,
    STATUS_NOT_ISSUED, UNASSIGNED_CONTRACT,
};
use crate::core::sanitize::normalize;
use crate::record::{Column, Record};

/// Summary-tile / filter categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterTag {
    #[default]
    All,
    Expedited,
    InProcess,
    NotIssued,
    Paid,
    NotPaid,
}

/// Status classification of a summary group (first member decides; status is
/// part of the summary key, so members agree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Expedited,
    InProcess,
    NotIssued,
    Other,
}

/// Tri-state payment indicator for a table-granularity group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMark {
    Paid,    // every member "si"
    Partial, // some "si", some "no"
    Unpaid,  // anything else
}

/// Rows sharing a composite key. `rows` are positions in the record slice,
/// in insertion (feed) order.
#[derive(Clone, Debug)]
pub struct Group {
    pub key: String,
    pub rows: Vec<usize>,
}

/// Derived counters, recomputed per render. Groups whose status matches none
/// of the three known states count toward `total` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub expedited: usize,
    pub in_process: usize,
    pub not_issued: usize,
    pub paid: usize,
    pub not_paid: usize,
}

/// Contract identifier with the sentinel applied for missing values.
pub fn contract_of(r: &Record) -> &str {
    let c = r.get(Column::Contract);
    if c.is_empty() { UNASSIGNED_CONTRACT } else { c }
}

fn group_by<F>(records: &[Record], rows: &[usize], key_of: F) -> Vec<Group>
where
    F: Fn(&Record) -> String,
{
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Group> = Vec::new();
    for &r in rows {
        let key = key_of(&records[r]);
        match by_key.get(&key) {
            Some(&g) => out[g].rows.push(r),
            None => {
                by_key.insert(key.clone(), out.len());
                out.push(Group { key, rows: vec![r] });
            }
        }
    }
    out
}

/// Summary granularity: contract ⊕ client ⊕ normalized status.
pub fn summary_groups(records: &[Record], rows: &[usize]) -> Vec<Group> {
    group_by(records, rows, |r| {
        format!(
            "{}__{}__{}",
            contract_of(r),
            r.get(Column::Client),
            normalize(r.get(Column::Status))
        )
    })
}

/// Table granularity: contract ⊕ client (payment mark spans all statuses).
pub fn table_groups(records: &[Record], rows: &[usize]) -> Vec<Group> {
    group_by(records, rows, |r| {
        format!("{}__{}", contract_of(r), r.get(Column::Client))
    })
}

pub fn status_class(records: &[Record], g: &Group) -> StatusClass {
    let first = &records[g.rows[0]];
    match normalize(first.get(Column::Status)).as_str() {
        STATUS_EXPEDITED => StatusClass::Expedited,
        STATUS_IN_PROCESS => StatusClass::InProcess,
        STATUS_NOT_ISSUED => StatusClass::NotIssued,
        _ => StatusClass::Other,
    }
}

fn all_paid(records: &[Record], g: &Group) -> bool {
    g.rows
        .iter()
        .all(|&r| normalize(records[r].get(Column::Payment)) == PAYMENT_YES)
}

fn any_unpaid(records: &[Record], g: &Group) -> bool {
    g.rows
        .iter()
        .any(|&r| normalize(records[r].get(Column::Payment)) == PAYMENT_NO)
}

pub fn payment_mark(records: &[Record], g: &Group) -> PaymentMark {
    let paid = g
        .rows
        .iter()
        .filter(|&&r| normalize(records[r].get(Column::Payment)) == PAYMENT_YES)
        .count();
    if paid == g.rows.len() {
        PaymentMark::Paid
    } else if paid > 0 && any_unpaid(records, g) {
        PaymentMark::Partial
    } else {
        PaymentMark::Unpaid
    }
}

/// Counters over summary groups. paid + not_paid == total always;
/// the three status counters leave out "other" statuses.
pub fn summarize(records: &[Record], groups: &[Group]) -> Summary {
    let mut s = Summary::default();
    for g in groups {
        s.total += 1;
        match status_class(records, g) {
            StatusClass::Expedited => s.expedited += 1,
            StatusClass::InProcess => s.in_process += 1,
            StatusClass::NotIssued => s.not_issued += 1,
            StatusClass::Other => {}
        }
        if all_paid(records, g) {
            s.paid += 1;
        } else {
            s.not_paid += 1;
        }
    }
    s
}

/// Tile-filter membership for a summary group.
///
/// NotPaid matches when ANY member is explicitly "no" — looser than the
/// not-paid counter (which is "not all paid"). The asymmetry is intentional
/// and kept as the dashboard always behaved.
pub fn group_matches(records: &[Record], g: &Group, tag: FilterTag) -> bool {
    match tag {
        FilterTag::All => true,
        FilterTag::Expedited => status_class(records, g) == StatusClass::Expedited,
        FilterTag::InProcess => status_class(records, g) == StatusClass::InProcess,
        FilterTag::NotIssued => status_class(records, g) == StatusClass::NotIssued,
        FilterTag::Paid => all_paid(records, g),
        FilterTag::NotPaid => any_unpaid(records, g),
    }
}

/// Apply a tile filter: keep the member rows of every matching summary group,
/// flattened in group order.
pub fn filter_rows(records: &[Record], base: &[usize], tag: FilterTag) -> Vec<usize> {
    if tag == FilterTag::All {
        return base.to_vec();
    }
    let mut out = Vec::new();
    for g in summary_groups(records, base) {
        if group_matches(records, &g, tag) {
            out.extend_from_slice(&g.rows);
        }
    }
    out
}

/// Search box filter: case-insensitive substring on identification or
/// contract. Empty query keeps everything.
pub fn search_rows(records: &[Record], query: &str) -> Vec<usize> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.get(Column::Identification).to_lowercase().contains(&q)
                || r.get(Column::Contract).to_lowercase().contains(&q)
        })
        .map(|(i, _)| i)
        .collect()
}
