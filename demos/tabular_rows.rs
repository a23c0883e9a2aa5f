//! Lists of mappings are rendered as pipe tables.
//!
//! Run with: cargo run --example tabular_rows

use content_report::{to_string, FieldType, Schema, SchemaField};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Product {
    sku: String,
    description: String,
    price: f64,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct Inventory {
    warehouse: String,
    products: Vec<Product>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let inventory = Inventory {
        warehouse: "Oslo North".to_string(),
        products: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                description: "Blue widget<br>with handle".to_string(),
                price: 9.5,
                quantity: 120,
            },
            Product {
                sku: "GADGET-042".to_string(),
                description: "Gadget\nsecond revision".to_string(),
                price: 149.25,
                quantity: 8,
            },
            Product {
                sku: "BOLT-7".to_string(),
                description: "  M8 bolt  ".to_string(),
                price: 0.1,
                quantity: 5000,
            },
        ],
    };

    let schema = Schema::new()
        .with_title("Inventory")
        .with_description("Stock levels per warehouse")
        .with_field(SchemaField::string("warehouse"))
        .with_field(SchemaField::new("products", FieldType::Array).with_title("Stock"));

    // Line breaks inside cells are flattened; numeric columns are right-aligned.
    println!("{}", to_string(&schema, &inventory)?);

    Ok(())
}
