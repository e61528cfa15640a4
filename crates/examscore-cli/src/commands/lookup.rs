//! Lookup command - find candidates by registration number.

use std::path::PathBuf;

use colored::Colorize;

use super::{load_store, print_json, print_students};

pub fn run(data: PathBuf, sbds: Vec<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(&data)?;

    // A single registration number behaves like GET /api/student/:sbd
    if let [sbd] = sbds.as_slice() {
        let student = store.lookup(sbd)?;
        if json_output {
            return print_json(&student);
        }

        println!("{} {}", "Candidate".cyan().bold(), student.sbd.white().bold());
        print_json(&student.record)?;
        return Ok(());
    }

    let result = store.batch_lookup(&sbds)?;
    if json_output {
        return print_json(&result);
    }

    println!(
        "{} {} of {}",
        "Found".cyan().bold(),
        result.total.to_string().white().bold(),
        sbds.len()
    );
    print_students(&result.found);

    if !result.not_found.is_empty() {
        println!();
        println!("{}", "Not found:".yellow().bold());
        for sbd in &result.not_found {
            println!("  {}", sbd.red());
        }
    }

    Ok(())
}
