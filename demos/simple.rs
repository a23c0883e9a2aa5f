//! Rendering a derived struct as a content report.
//!
//! Run with: cargo run --example simple

use content_report::{to_string, FieldType, Schema, SchemaField};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new()
        .with_title("User")
        .with_description("An account in the system")
        .with_field(SchemaField::new("id", FieldType::Integer).with_title("User ID"))
        .with_field(SchemaField::string("name"))
        .with_field(SchemaField::string("email"))
        .with_field(SchemaField::new("roles", FieldType::Array));

    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        roles: vec!["admin".to_string(), "editor".to_string()],
    };

    let report = to_string(&schema, &user)?;
    println!("{}", report);

    Ok(())
}
