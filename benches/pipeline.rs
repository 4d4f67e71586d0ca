use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use motormart::{CatalogContext, SearchQuery, SortKey, parse_collection};

const MAKES: [&str; 6] = ["Toyota", "Honda", "Ford", "Mazda", "Kia", "Volkswagen"];

fn synthetic_fleet(size: usize) -> Vec<u8> {
    let entries: Vec<String> = (0..size)
        .map(|i| {
            let engine = if i % 3 == 0 {
                format!("{}", 1000 + (i % 30) * 100)
            } else {
                format!("{:.1}", 1.0 + (i % 30) as f64 / 10.0)
            };
            format!(
                r#"{{"id": "v{i}", "make": "{make}", "model": "Model {m}", "year": {year},
                    "engineSize": {engine}, "price": {price}, "dateAdded": "2024-{month:02}-{day:02}",
                    "images": ["images/v{i}.jpg"]}}"#,
                make = MAKES[i % MAKES.len()],
                m = i % 17,
                year = 2000 + i % 25,
                price = 3000 + (i * 7919) % 40000,
                month = 1 + i % 12,
                day = 1 + i % 28,
            )
        })
        .collect();
    format!("[{}]", entries.join(",")).into_bytes()
}

fn loaded(size: usize) -> CatalogContext {
    let records = parse_collection(&synthetic_fleet(size)).expect("bench fleet parses");
    CatalogContext::default().on_load_complete(records).0
}

fn parse_bench(c: &mut Criterion) {
    let doc = synthetic_fleet(2_000);
    c.bench_function("parse_collection_2k", |b| {
        b.iter(|| {
            let records = parse_collection(black_box(&doc)).expect("bench parse");
            black_box(records);
        });
    });
}

fn search_bench(c: &mut Criterion) {
    let ctx = loaded(2_000);
    let query = SearchQuery::default().with_make("toy").with_engine_size("1.8");
    c.bench_function("search_2k", |b| {
        b.iter(|| {
            let (_, shown) = ctx.clone().on_search_submit(black_box(&query));
            black_box(shown);
        });
    });
}

fn sort_bench(c: &mut Criterion) {
    let ctx = loaded(2_000);
    for key in SortKey::all() {
        c.bench_function(&format!("sort_{}_2k", key.as_str()), |b| {
            b.iter(|| {
                let (_, shown) = ctx.clone().on_sort_change(black_box(Some(key)));
                black_box(shown);
            });
        });
    }
}

fn pipeline_bench(c: &mut Criterion) {
    let ctx = loaded(2_000);
    let query = SearchQuery::default().with_make("o");
    c.bench_function("search_sort_render_2k", |b| {
        b.iter(|| {
            let (next, _) = ctx.clone().on_search_submit(black_box(&query));
            let (next, shown) = next.on_sort_change(Some(SortKey::Date));
            black_box(next.render_html(&shown));
        });
    });
}

criterion_group!(benches, parse_bench, search_bench, sort_bench, pipeline_bench);
criterion_main!(benches);
