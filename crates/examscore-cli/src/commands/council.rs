//! Council command - aggregate statistics for one examination council.

use std::path::PathBuf;

use colored::Colorize;

use super::{load_store, print_json, print_students};

pub fn run(data: PathBuf, code: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&data)?;
    let stats = store.council_aggregate(&code)?;

    if json_output {
        return print_json(&stats);
    }

    let show = |value: Option<f64>| value.map_or_else(|| "n/a".to_string(), |v| v.to_string());

    println!(
        "{} {}",
        "Council".cyan().bold(),
        stats.council_code.white().bold()
    );
    println!();
    println!("  Students: {}", stats.total_students.to_string().white().bold());
    println!("  Average:  {}", show(stats.avg_score));
    println!("  Highest:  {}", show(stats.max_score).green());
    println!("  Lowest:   {}", show(stats.min_score).red());
    println!();
    print_students(&stats.students);

    Ok(())
}
