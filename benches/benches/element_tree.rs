// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_dialog::headless::HeadlessSurface;
use understory_dialog::{
    BooleanElement, EntryElement, ListAdapter, Path, RadioElement, RadioGroup, RootElement,
    Section, StringElement,
};

/// `sections` sections of `rows` rows; every third row is a radio.
fn gen_radio_root(sections: usize, rows: usize) -> RootElement {
    let mut root = RootElement::with_radio("Bench", RadioGroup::new(0));
    for s in 0..sections {
        let mut section = Section::with_header(format!("Section {s}"));
        for r in 0..rows {
            if r % 3 == 0 {
                section.add(RadioElement::new(format!("Radio {s}.{r}")));
            } else {
                section.add(StringElement::new(format!("Row {s}.{r}")));
            }
        }
        root.add(section);
    }
    root
}

/// Mixed control rows, one kind per row position.
fn gen_form_root(sections: usize, rows: usize) -> RootElement {
    let mut root = RootElement::new("Form");
    for _ in 0..sections {
        let mut section = Section::new();
        for r in 0..rows {
            match r % 3 {
                0 => section.add(BooleanElement::new(format!("Switch {r}"), r % 2 == 0)),
                1 => section.add(EntryElement::new(format!("Field {r}"), "", "")),
                _ => section.add(StringElement::with_value(format!("Label {r}"), "value")),
            };
        }
        root.add(section);
    }
    root
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    for &n in &[8usize, 32, 128] {
        group.throughput(Throughput::Elements((n * 30) as u64));
        group.bench_function(format!("sections_{n}_rows_30"), |b| {
            b.iter_batched(
                || gen_radio_root(n, 30),
                |mut root| {
                    root.prepare();
                    black_box(root.is_prepared());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_path_for_radio(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_for_radio");
    for &n in &[8usize, 32, 128] {
        let root = gen_radio_root(n, 30);
        let last = root.radio_count() - 1;
        group.bench_function(format!("first_sections_{n}"), |b| {
            b.iter(|| black_box(root.path_for_radio(black_box(0))))
        });
        group.bench_function(format!("last_sections_{n}"), |b| {
            b.iter(|| black_box(root.path_for_radio(black_box(last))))
        });
        group.bench_function(format!("missing_sections_{n}"), |b| {
            b.iter(|| black_box(root.path_for_radio(black_box(last + 10))))
        });
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    let adapter = ListAdapter::new();
    for &rows in &[30usize, 300] {
        group.throughput(Throughput::Elements(rows as u64));
        // Slide a 12-row window over one long section, recycling as rows leave.
        group.bench_function(format!("window_12_rows_{rows}"), |b| {
            b.iter_batched(
                || (gen_form_root(1, rows), HeadlessSurface::new()),
                |(mut root, mut surface)| {
                    for row in 0..rows {
                        if row >= 12 {
                            surface.hide(Path::new(0, row - 12));
                        }
                        black_box(surface.show(&adapter, &mut root, Path::new(0, row)));
                    }
                    black_box(surface.stats());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_radio_taps(c: &mut Criterion) {
    let adapter = ListAdapter::new();
    c.bench_function("radio_select_alternate", |b| {
        b.iter_batched(
            || {
                let mut root = gen_radio_root(4, 30);
                let mut surface = HeadlessSurface::new();
                for s in 0..4 {
                    for r in 0..30 {
                        surface.show(&adapter, &mut root, Path::new(s, r));
                    }
                }
                (root, surface)
            },
            |(mut root, mut surface)| {
                for i in 0..64 {
                    let path = if i % 2 == 0 {
                        Path::new(3, 27)
                    } else {
                        Path::new(0, 0)
                    };
                    black_box(root.select_radio(path, &mut surface));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_prepare,
    bench_path_for_radio,
    bench_scroll,
    bench_radio_taps,
);
criterion_main!(benches);
