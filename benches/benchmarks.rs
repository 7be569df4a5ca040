//! Benchmarks for the viewer core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_viewer::{
    paginate, ExpandStates, FixedHeights, Header, MeasuredRow, MemoryStore, PageConstraints,
    PaginationEngine, Row, Table, Viewer,
};

fn measured_rows(count: usize) -> Vec<MeasuredRow> {
    (0..count)
        .map(|i| {
            let row = Row::new([String::new(), format!("Employee {}", i), "Sales".to_string()]);
            // Mix of single- and multi-line rows
            MeasuredRow::new(row, 28.0 + (i % 4) as f32 * 14.0)
        })
        .collect()
}

fn header() -> Header {
    Header::new(["No.", "Name", "Department"])
}

fn bench_paginate_small(c: &mut Criterion) {
    c.bench_function("paginate_small_table", |b| {
        b.iter_batched(
            || measured_rows(50),
            |rows| paginate(&header(), black_box(rows), 40.0, 960.0),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_paginate_large(c: &mut Criterion) {
    c.bench_function("paginate_large_table", |b| {
        b.iter_batched(
            || measured_rows(10_000),
            |rows| paginate(&header(), black_box(rows), 40.0, 960.0),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_paginate_table(c: &mut Criterion) {
    c.bench_function("paginate_table_with_measurer", |b| {
        let engine = PaginationEngine::new(PageConstraints::default());
        b.iter_batched(
            || {
                let rows: Vec<Row> = measured_rows(1_000).into_iter().map(|m| m.row).collect();
                let heights = FixedHeights::new(40.0, vec![35.0; rows.len()]);
                (Table::new(header(), rows), heights)
            },
            |(table, mut heights)| engine.paginate_table(table, &mut heights),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("navigate_all_pages", |b| {
        let heights = vec![35.0; 5_000];
        let mut viewer = Viewer::from_heights(40.0, &heights, 960.0).unwrap();

        b.iter(|| {
            viewer.navigate_to(0);
            while viewer.next_page() {}
            black_box(viewer.current_page());
        });
    });
}

fn bench_state_roundtrip(c: &mut Criterion) {
    c.bench_function("expand_state_load_save", |b| {
        let mut store = MemoryStore::new();
        let mut states = ExpandStates::default();
        for i in 0..50 {
            states.set(&format!("Section {}", i), i % 2 == 0);
        }
        states.save(&mut store).unwrap();

        b.iter(|| {
            let mut loaded = ExpandStates::load(&store);
            loaded.set("Section 7", true);
            loaded.save(&mut store).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_paginate_small,
    bench_paginate_large,
    bench_paginate_table,
    bench_navigation,
    bench_state_roundtrip,
);

criterion_main!(benches);
