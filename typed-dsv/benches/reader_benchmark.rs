//! Benchmarks for tokenizing and typed row reading

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;
use typed_dsv::{ColumnType, Reader, ReaderConfig, Schema, split_line};

/// Generate a plain document: text, integer, and float columns
fn generate_plain_document(rows: usize) -> String {
    let mut lines = Vec::with_capacity(rows);
    for i in 0..rows {
        lines.push(format!("us-{i};{};{}.5", 61000 + i, i));
    }
    lines.join("\n")
}

/// Generate a document where the first column is quoted and carries
/// embedded separators
fn generate_quoted_document(rows: usize) -> String {
    let mut lines = Vec::with_capacity(rows);
    for i in 0..rows {
        lines.push(format!(
            "\"host{i}.example.com;fallback{i}.example.com\";{};{}.25",
            61000 + i,
            i
        ));
    }
    lines.join("\n")
}

fn document_schema() -> Schema {
    Schema::new(&[ColumnType::Text, ColumnType::Integer, ColumnType::Float])
}

fn benchmark_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let config = ReaderConfig::default().with_escape('\\');

    let plain = "alpha;beta;gamma;delta;epsilon";
    group.bench_function("split_plain_line", |b| {
        b.iter(|| {
            let fields = split_line(black_box(plain), &config, 5);
            black_box(fields);
        });
    });

    let quoted = "\"alpha;beta\";gamma;del\\;ta;epsilon;zeta";
    group.bench_function("split_quoted_escaped_line", |b| {
        b.iter(|| {
            let fields = split_line(black_box(quoted), &config, 5);
            black_box(fields);
        });
    });

    group.finish();
}

fn benchmark_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading");

    for rows in [10usize, 1_000, 10_000] {
        let plain = generate_plain_document(rows);
        group.bench_function(format!("read_plain_{rows}_rows"), |b| {
            b.iter(|| {
                let mut reader = Reader::new(document_schema());
                reader.open_stream(Cursor::new(black_box(plain.clone())));
                let produced = reader.read_all().unwrap();
                black_box(produced);
            });
        });
    }

    let quoted = generate_quoted_document(1_000);
    group.bench_function("read_quoted_1000_rows", |b| {
        b.iter(|| {
            let mut reader = Reader::new(document_schema());
            reader.open_stream(Cursor::new(black_box(quoted.clone())));
            let produced = reader.read_all().unwrap();
            black_box(produced);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_tokenizer, benchmark_reading);
criterion_main!(benches);
