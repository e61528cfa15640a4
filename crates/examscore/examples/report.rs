//! Example: Print a score report for a dataset file.
//!
//! Usage:
//!   cargo run --example report -- <file_path>
//!
//! Example:
//!   cargo run --example report -- diem-thi-api.json

use std::env;
use std::path::Path;

use examscore::{ScoreRange, ScoreStore};

const BAND_WIDTH: f64 = 5.0;

/// Index of the band holding `score`. Bands are half-open except the last,
/// which also takes the top score.
fn score_band(score: f64, bands: usize) -> usize {
    ((score / BAND_WIDTH) as usize).min(bands - 1)
}

fn main() -> examscore::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example report -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example report -- diem-thi-api.json");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Score report: {}", file_path);
    println!("{}", separator);
    println!();

    let store = ScoreStore::load(path)?;

    // Dataset overview
    println!("## Dataset");
    println!("  Records: {}", store.len());
    println!("  Valid scores: {}", store.valid_score_count());
    println!("  Councils: {}", store.council_count());
    if let Some(declared) = store.dataset().declared_total() {
        println!("  Declared total: {}", declared);
    }
    let summary = store.summary();
    if let (Some(mean), Some(min), Some(max)) = (summary.mean(), summary.min(), summary.max()) {
        println!("  Scores: mean {:.2}, min {}, max {}", mean, min, max);
    }
    println!();

    // Score distribution in 5-point bands; the last band includes 30
    println!("## Distribution");
    let full = store.range_query(ScoreRange::default());
    let mut bands = [0usize; 6];
    for student in &full.students {
        if let Some(score) = student.record.score() {
            bands[score_band(score, bands.len())] += 1;
        }
    }
    for (i, count) in bands.iter().enumerate() {
        let lower = i as f64 * BAND_WIDTH;
        let close = if i + 1 == bands.len() { "]" } else { ")" };
        let label = format!("[{}, {}{}", lower, lower + BAND_WIDTH, close);
        println!("  {:>10}  {:>6}  {}", label, count, "#".repeat((*count).min(60)));
    }
    println!("  {:>10}  {:>6}", full.range, full.count);
    println!();

    // Top ten
    println!("## Top 10");
    for (i, student) in store.top_scores(10).students.iter().enumerate() {
        let score = student
            .record
            .total_score
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>2}. {}  {}", i + 1, student.sbd, score);
    }
    println!();

    println!("{}", separator);

    Ok(())
}
