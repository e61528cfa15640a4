//! Query performance benchmarks.
//!
//! Measures dataset loading and each query operation across dataset sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use examscore::{ScoreRange, ScoreStore};

/// Generate a synthetic dataset document with the specified number of students.
fn generate_dataset(students: usize) -> String {
    let mut data = String::new();
    data.push_str(&format!(
        "{{\"metadata\": {{\"total_students\": {}}}, \"students\": {{",
        students
    ));

    for i in 0..students {
        if i > 0 {
            data.push(',');
        }
        // Every 50th score is unparsable, councils cycle through 40 codes
        let score = if i % 50 == 0 {
            "\"\"".to_string()
        } else {
            format!("\"{:.2}\"", (i % 120) as f64 / 4.0)
        };
        data.push_str(&format!(
            "\"{:08}\": {{\"ma_hd\": \"{:02}\", \"tong_diem\": {}, \"toan\": \"{}\", \"van\": \"{}\", \"anh\": \"{}\"}}",
            i,
            i % 40,
            score,
            i % 10,
            (i + 3) % 10,
            (i + 7) % 10
        ));
    }

    data.push_str("}}");
    data
}

/// Benchmark parsing and indexing datasets of various sizes.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for students in [1_000, 10_000, 100_000].iter() {
        let data = generate_dataset(*students);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("students", students), &data, |b, data| {
            b.iter(|| ScoreStore::from_json_str(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark each query against a fixed dataset.
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for students in [1_000, 100_000].iter() {
        let store = ScoreStore::from_json_str(&generate_dataset(*students)).unwrap();

        group.bench_with_input(BenchmarkId::new("lookup", students), &store, |b, store| {
            b.iter(|| store.lookup(black_box("00000777")).unwrap());
        });

        let batch: Vec<String> = (0..100).map(|i| format!("{:08}", i * 7)).collect();
        group.bench_with_input(BenchmarkId::new("batch_lookup", students), &store, |b, store| {
            b.iter(|| store.batch_lookup(black_box(&batch)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("range_query", students), &store, |b, store| {
            b.iter(|| store.range_query(black_box(ScoreRange::new(10.0, 20.0))));
        });

        group.bench_with_input(BenchmarkId::new("council_aggregate", students), &store, |b, store| {
            b.iter(|| store.council_aggregate(black_box("07")).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("top_scores", students), &store, |b, store| {
            b.iter(|| store.top_scores(black_box(10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
