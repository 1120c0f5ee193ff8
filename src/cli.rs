// src/cli.rs
//
// Headless one-shot: fetch the feed, print the summary counters and the
// grouped table, optionally export every matching group's detail CSV.

use std::{env, path::PathBuf};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::export;
use crate::feed;
use crate::group::{self, FilterTag, PaymentMark};
use crate::record::Column;

pub struct Params {
    pub search: String,
    pub filter: FilterTag,
    pub out: PathBuf,
    pub export_csv: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            search: s!(),
            filter: FilterTag::All,
            out: PathBuf::from(DEFAULT_OUT_DIR),
            export_csv: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let set = feed::load()?;
    let records = &set.records;

    let base = group::search_rows(records, &params.search);
    let summary = group::summarize(records, &group::summary_groups(records, &base));

    println!("Total:         {}", summary.total);
    println!("Expedidas:     {}", summary.expedited);
    println!("En expedición: {}", summary.in_process);
    println!("Sin expedir:   {}", summary.not_issued);
    println!("Pagados:       {}", summary.paid);
    println!("No pagados:    {}", summary.not_paid);
    println!();

    let filtered = group::filter_rows(records, &base, params.filter);
    let table = group::table_groups(records, &filtered);

    if table.is_empty() {
        println!("No se encontraron registros.");
        return Ok(());
    }

    for g in &table {
        let first = &records[g.rows[0]];
        let mark = match group::payment_mark(records, g) {
            PaymentMark::Paid => "pagado",
            PaymentMark::Partial => "parcial",
            PaymentMark::Unpaid => "pendiente",
        };
        println!(
            "{} | {} | {} | {}",
            group::contract_of(first),
            first.get(Column::Client),
            mark,
            first.get(Column::Status),
        );
    }

    if params.export_csv {
        for g in &table {
            let path = export::export_group_csv(&params.out, records, g)?;
            println!("Exportado: {}", path.display());
        }
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-s" | "--search" => {
                params.search = args.next().ok_or("Missing value for --search")?;
            }
            "--filter" => {
                let v = args.next().ok_or("Missing value for --filter")?;
                params.filter = match v.to_ascii_lowercase().as_str() {
                    "todos" | "all" => FilterTag::All,
                    "expedida" => FilterTag::Expedited,
                    "en-expedicion" => FilterTag::InProcess,
                    "sin-expedir" => FilterTag::NotIssued,
                    "pagados" => FilterTag::Paid,
                    "no-pagados" => FilterTag::NotPaid,
                    other => return Err(format!("Unknown filter: {}", other).into()),
                };
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--csv" => params.export_csv = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
