// src/export/mod.rs
//
// Detail exports: the rows of one table group written as CSV or PDF into the
// configured output directory, named Detalle_<contract>.<ext> with a sentinel
// stem when the contract identifier is missing.

pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{DETAIL_FILE_PREFIX, FALLBACK_FILE_STEM, UNASSIGNED_CONTRACT};
use crate::core::sanitize::sanitize_contract_filename;
use crate::csv;
use crate::group::Group;
use crate::record::{Column, Record};

/// File-name stem for a group, from its first member's contract identifier.
pub fn detail_stem(records: &[Record], g: &Group) -> String {
    let contract = records[g.rows[0]].get(Column::Contract);
    if contract.is_empty() || contract == UNASSIGNED_CONTRACT {
        s!(FALLBACK_FILE_STEM)
    } else {
        sanitize_contract_filename(contract, FALLBACK_FILE_STEM)
    }
}

/// Write the group as CSV (full column set, feed headers, usual quoting).
pub fn export_group_csv(
    out_dir: &Path,
    records: &[Record],
    g: &Group,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_directory(out_dir)?;
    let path = out_dir.join(format!("{}{}.csv", DETAIL_FILE_PREFIX, detail_stem(records, g)));

    let headers: Vec<String> = Column::ALL.iter().map(|c| s!(c.header())).collect();
    let rows: Vec<Vec<String>> = g
        .rows
        .iter()
        .map(|&r| records[r].cells().to_vec())
        .collect();

    fs::write(&path, csv::unparse(&headers, &rows))?;
    logf!("Export: CSV OK → {}", path.display());
    Ok(path)
}

/// Write the group as a paginated PDF: letter page, header band carrying the
/// contract identifier, one "label: value" line per non-empty field.
pub fn export_group_pdf(
    out_dir: &Path,
    records: &[Record],
    g: &Group,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_directory(out_dir)?;
    let path = out_dir.join(format!("{}{}.pdf", DETAIL_FILE_PREFIX, detail_stem(records, g)));

    let contract = {
        let c = records[g.rows[0]].get(Column::Contract);
        if c.is_empty() { UNASSIGNED_CONTRACT } else { c }
    };
    let title = format!("Detalle del contrato {contract}");

    let blocks: Vec<Vec<(String, String)>> = g
        .rows
        .iter()
        .map(|&r| {
            records[r]
                .labeled_fields(&Column::ALL)
                .into_iter()
                .map(|(l, v)| (s!(l), s!(v)))
                .collect()
        })
        .collect();

    fs::write(&path, pdf::render(&title, &blocks))?;
    logf!("Export: PDF OK → {}", path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
