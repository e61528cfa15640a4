//! Top command - list the highest total scores.

use std::path::PathBuf;

use colored::Colorize;
use examscore::query::parse_limit;

use super::{display_council, display_score, load_store, print_json};

pub fn run(data: PathBuf, limit: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&data)?;
    let top = store.top_scores(parse_limit(limit.as_deref()));

    if json_output {
        return print_json(&top);
    }

    println!("{} {}", "Top".cyan().bold(), top.limit.to_string().white().bold());
    for (rank, student) in top.students.iter().enumerate() {
        println!(
            "  {:>4}. {:<12} {:>6} {:>8}",
            rank + 1,
            student.sbd,
            display_council(student),
            display_score(student).green()
        );
    }

    Ok(())
}
