// benches/grouping.rs
//
// Aggregation throughput on a synthetic feed shaped like the real one:
// a few hundred contracts, a handful of rows each.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use poliza_dash::group;
use poliza_dash::record::Record;

const STATUSES: [&str; 4] = ["Expedida", "En expedición", "Sin expedir", "Anulada"];
const PAYMENTS: [&str; 3] = ["Si", "No", ""];

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::from_pairs([
                ("No. De OM / Contrato", format!("OM-{:04}", i / 4).as_str()),
                ("Identificación", format!("9{:08}", i).as_str()),
                ("Cliente", format!("Cliente {}", i / 8).as_str()),
                ("Estado", STATUSES[i % STATUSES.len()]),
                ("Pago", PAYMENTS[i % PAYMENTS.len()]),
            ])
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let records = synthetic_records(2_000);
    let rows: Vec<usize> = (0..records.len()).collect();

    c.bench_function("summary_groups_2k", |b| {
        b.iter(|| group::summary_groups(black_box(&records), black_box(&rows)))
    });

    c.bench_function("table_groups_2k", |b| {
        b.iter(|| group::table_groups(black_box(&records), black_box(&rows)))
    });

    let groups = group::summary_groups(&records, &rows);
    c.bench_function("summarize_2k", |b| {
        b.iter(|| group::summarize(black_box(&records), black_box(&groups)))
    });

    c.bench_function("filter_not_paid_2k", |b| {
        b.iter(|| group::filter_rows(black_box(&records), black_box(&rows), group::FilterTag::NotPaid))
    });

    c.bench_function("search_2k", |b| {
        b.iter(|| group::search_rows(black_box(&records), black_box("om-01")))
    });
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
