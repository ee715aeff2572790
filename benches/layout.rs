//! Table layout performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termtable::layout::{ColumnDimension, TextWrapper, allocate_widths};
use termtable::{DataSource, TableModel, TableOptions};

fn sample_table(rows: usize) -> TableModel {
    let data = DataSource::from_lists((0..rows).map(|i| {
        [
            i.to_string(),
            format!("user-{i}"),
            "a longer description column that wraps at narrow widths\nwith a second line"
                .to_string(),
        ]
    }));
    let header = vec!["ID".into(), "User".into(), "Description".into()];
    TableModel::new(data, Some(header), TableOptions::default()).unwrap()
}

fn allocation(c: &mut Criterion) {
    let columns: Vec<ColumnDimension> = (0..16)
        .map(|i| {
            if i % 2 == 1 {
                ColumnDimension::fixed(1)
            } else {
                ColumnDimension::new(3, 10 + i * 3, 1)
            }
        })
        .collect();

    c.bench_function("allocate_widths_16_columns", |b| {
        b.iter(|| allocate_widths(black_box(&columns), black_box(200)))
    });
}

fn wrapping(c: &mut Criterion) {
    let wrapper = TextWrapper::default();
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);

    let mut group = c.benchmark_group("wrap");
    for width in [10, 40, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| wrapper.wrap(black_box(&text), width))
        });
    }
    group.finish();
}

fn render(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_text");
    for rows in [10, 100, 1000] {
        let mut table = sample_table(rows);
        group.bench_with_input(BenchmarkId::new("cached", rows), &rows, |b, _| {
            b.iter(|| table.build_text(black_box(80)))
        });
    }
    for rows in [10, 100] {
        group.bench_with_input(BenchmarkId::new("cold", rows), &rows, |b, &rows| {
            b.iter(|| sample_table(rows).build_text(black_box(80)))
        });
    }
    group.finish();
}

criterion_group!(benches, allocation, wrapping, render);
criterion_main!(benches);
