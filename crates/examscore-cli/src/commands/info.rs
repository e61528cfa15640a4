//! Info command - show dataset metadata and record counts.

use std::path::PathBuf;

use colored::Colorize;

use super::{load_store, print_json};

pub fn run(data: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&data)?;
    let summary = store.summary();

    if json_output {
        let info = serde_json::json!({
            "file": data.display().to_string(),
            "metadata": store.metadata(),
            "records": store.len(),
            "valid_scores": store.valid_score_count(),
            "invalid_scores": store.len() - store.valid_score_count(),
            "councils": store.council_count(),
            "scores": {
                "avg": summary.mean().map(examscore::stats::round2),
                "max": summary.max(),
                "min": summary.min(),
            },
        });
        return print_json(&info);
    }

    println!(
        "{} {}",
        "Dataset".cyan().bold(),
        data.display().to_string().white()
    );
    println!();

    println!("{}", "Metadata:".yellow().bold());
    match store.metadata().as_object() {
        Some(fields) if !fields.is_empty() => {
            for (key, value) in fields {
                println!("  {}: {}", key, value);
            }
        }
        _ => println!("  (none)"),
    }
    println!();

    println!("{}", "Records:".yellow().bold());
    println!("  Total:          {}", store.len().to_string().white().bold());
    println!(
        "  Valid scores:   {}",
        store.valid_score_count().to_string().green()
    );
    let invalid = store.len() - store.valid_score_count();
    if invalid > 0 {
        println!("  Invalid scores: {}", invalid.to_string().red());
    }
    println!("  Councils:       {}", store.council_count());

    if let (Some(mean), Some(min), Some(max)) = (summary.mean(), summary.min(), summary.max()) {
        println!();
        println!("{}", "Scores:".yellow().bold());
        println!("  Average: {:.2}", mean);
        println!("  Highest: {}", max);
        println!("  Lowest:  {}", min);
    }

    if let Some(declared) = store.dataset().declared_total() {
        if declared != store.len() as u64 {
            println!();
            println!(
                "{} metadata declares {} students but the dataset has {}",
                "Note:".yellow(),
                declared,
                store.len()
            );
        }
    }

    Ok(())
}
