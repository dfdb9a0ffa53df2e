//! Benchmarks for the filter -> sort -> paginate pipeline.
//!
//! The pipeline re-runs on every keystroke, so per-keystroke latency
//! over a realistically sized directory is the number that matters.

use cdv::model::{Company, CompanyId, FilterCriteria, SortDir, SortKey, SortSpec};
use cdv::query;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INDUSTRIES: [&str; 5] = ["Tech", "Energy", "Retail", "Biotech", "Finance"];
const LOCATIONS: [&str; 5] = ["NY", "LA", "TX", "Berlin", "Tokyo"];

fn make_directory(count: usize) -> Vec<Company> {
    (0..count)
        .map(|n| Company {
            id: CompanyId::Number(n as i64),
            name: format!("Company {n:04}"),
            industry: INDUSTRIES[n % INDUSTRIES.len()].to_string(),
            location: LOCATIONS[n % LOCATIONS.len()].to_string(),
            employees: ((n * 37) % 10_000) as u64,
            founded_year: 1900 + (n % 125) as i32,
            description: format!("Description for company {n}"),
            website: None,
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let directory = make_directory(1_000);
    let criteria = FilterCriteria {
        industry: Some("Tech".to_string()),
        location: None,
        min_employees: 100,
    };
    let sort = SortSpec {
        key: SortKey::Employees,
        dir: SortDir::Desc,
    };

    c.bench_function("filter_1000", |b| {
        b.iter(|| query::filter(black_box(&directory), black_box("company 01"), &criteria))
    });

    c.bench_function("sort_1000", |b| {
        b.iter(|| query::sort(black_box(&directory), sort))
    });

    c.bench_function("full_pipeline_1000", |b| {
        b.iter(|| {
            let filtered = query::filter(black_box(&directory), "", &criteria);
            let sorted = query::sort(&filtered, sort);
            query::paginate(&sorted, 8, black_box(3))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
