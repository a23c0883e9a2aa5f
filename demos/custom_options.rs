//! Customizing rendering with RenderOptions.
//!
//! Run with: cargo run --example custom_options

use content_report::{
    to_string, to_string_with_options, AbsencePolicy, FieldType, RenderOptions, RowPolicy,
    Schema, SchemaField,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Job {
    name: String,
    retries: u32,
    enabled: bool,
    runs: Vec<BTreeMap<String, String>>,
}

fn run(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let job = Job {
        name: "nightly-backup".to_string(),
        retries: 0,
        enabled: false,
        runs: vec![
            run(&[("duration", "12.5"), ("status", "ok")]),
            run(&[("duration", "3"), ("status", "ok"), ("error", "timeout")]),
        ],
    };

    let schema = Schema::new()
        .with_title("Job")
        .with_description("Scheduled job")
        .with_field(SchemaField::string("name"))
        .with_field(SchemaField::new("retries", FieldType::Integer))
        .with_field(SchemaField::new("enabled", FieldType::Boolean))
        .with_field(SchemaField::new("runs", FieldType::Array));

    // Default: zero and false are treated as absent, ragged rows are widened.
    println!("Default options:");
    println!("{}\n", to_string(&schema, &job)?);

    // Keep zero and false; only null and empty values are skipped.
    println!("Missing-only absence policy, no numeric alignment:");
    let options = RenderOptions::new()
        .with_absence_policy(AbsencePolicy::Missing)
        .with_numeric_alignment(false);
    println!("{}\n", to_string_with_options(&schema, &job, options)?);

    // Strict rows reject the second run because it has an extra column.
    println!("Strict row policy:");
    let strict = RenderOptions::new().with_row_policy(RowPolicy::Strict);
    match to_string_with_options(&schema, &job, strict) {
        Ok(report) => println!("{}", report),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
