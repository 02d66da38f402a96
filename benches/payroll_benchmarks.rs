//! Performance benchmarks for the payroll engine.
//!
//! Covers the engine directly (single employee, batches of 100 and 1000)
//! and the HTTP endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{calculate_payroll, run_payroll};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{Employee, PieceRateItem};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const COUNTRIES: [&str; 3] = ["GHA", "NGA", "TGO"];

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Creates an employee whose resolution branch varies with the index.
fn create_employee(index: usize) -> Employee {
    let basic_salary = match index % 3 {
        0 => Decimal::ZERO,
        1 => Decimal::new(400, 0),
        _ => Decimal::new(1200, 0),
    };
    let piece_rate_items = if index % 4 == 3 && !basic_salary.is_zero() {
        vec![]
    } else {
        vec![
            PieceRateItem {
                item: "baskets".to_string(),
                rate: Decimal::new(125, 1),
                quantity: Decimal::new((index % 40 + 1) as i64, 0),
            },
            PieceRateItem {
                item: "crates".to_string(),
                rate: Decimal::new(30, 0),
                quantity: Decimal::new(4, 0),
            },
        ]
    };

    Employee {
        name: format!("Employee {:04}", index),
        basic_salary,
        country_code: COUNTRIES[index % COUNTRIES.len()].to_string(),
        piece_rate_items,
    }
}

fn create_batch(size: usize) -> Vec<Employee> {
    (0..size).map(create_employee).collect()
}

/// Benchmark: One employee through the full calculation pipeline.
fn bench_single_employee(c: &mut Criterion) {
    let loader = load_config();
    let employee = create_employee(1);
    let country = loader
        .get_country(&employee.country_code)
        .expect("Country missing");
    let split = loader.split();

    c.bench_function("single_employee", |b| {
        b.iter(|| {
            black_box(calculate_payroll(
                black_box(&employee),
                country,
                &split,
                loader.tiers(),
            ))
        })
    });
}

/// Benchmark: Batch runs of increasing size.
fn bench_batches(c: &mut Criterion) {
    let loader = load_config();
    let mut group = c.benchmark_group("batch");

    for size in [100usize, 1000].iter() {
        let employees = create_batch(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.iter(|| black_box(run_payroll(&employees, loader.config()).expect("Run failed")))
        });
    }

    group.finish();
}

/// Benchmark: POST /payroll with 100 employees, including JSON handling.
fn bench_http_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));

    let employees: Vec<serde_json::Value> = create_batch(100)
        .into_iter()
        .map(|e| serde_json::to_value(e).unwrap())
        .collect();
    let body = serde_json::json!({ "employees": employees }).to_string();

    c.bench_function("http_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_single_employee, bench_batches, bench_http_batch_100);
criterion_main!(benches);
