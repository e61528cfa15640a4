//! Range command - list candidates within a score range.

use std::path::PathBuf;

use colored::Colorize;
use examscore::ScoreRange;

use super::{load_store, print_json, print_students};

pub fn run(
    data: PathBuf,
    min: Option<String>,
    max: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&data)?;
    let range = ScoreRange::from_params(min.as_deref(), max.as_deref());
    let result = store.range_query(range);

    if json_output {
        return print_json(&result);
    }

    println!(
        "{} {} {}",
        result.count.to_string().white().bold(),
        "candidates scored".cyan().bold(),
        result.range.white()
    );
    print_students(&result.students);

    Ok(())
}
