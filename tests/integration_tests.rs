use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use content_report::{
    render, render_json_str, to_string, to_string_with_options, to_value, to_writer,
    AbsencePolicy, ContentReport, DocumentRenderer, Error, FieldType, RenderOptions, RowPolicy,
    Schema, SchemaField, Value,
};

#[derive(Serialize, Debug, PartialEq)]
struct Address {
    street: String,
    city: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct LineItem {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: String,
    notes: Option<String>,
    tags: Vec<String>,
    shipping: BTreeMap<String, String>,
    items: Vec<LineItem>,
    placed_at: String,
}

/// Schema shaped like the output of a model schema generator.
const ORDER_SCHEMA: &str = r##"{
    "title": "Order",
    "description": "A customer order",
    "type": "object",
    "properties": {
        "order_id": { "type": "integer", "title": "Order Id" },
        "customer": { "type": "string" },
        "notes": { "anyOf": [{ "type": "string" }, { "type": "null" }], "title": "Notes" },
        "tags": { "type": "array", "items": { "type": "string" } },
        "shipping": { "$ref": "#/$defs/Shipping" },
        "items": { "type": "array", "items": { "$ref": "#/$defs/LineItem" } },
        "placed_at": { "type": "string", "format": "date-time", "title": "Placed At" }
    },
    "required": ["order_id", "customer"],
    "$defs": {
        "Shipping": { "type": "object", "title": "Shipping Details" },
        "LineItem": {
            "type": "object",
            "properties": { "sku": { "type": "string" } }
        }
    }
}"##;

fn order() -> Order {
    let mut shipping = BTreeMap::new();
    shipping.insert("carrier".to_string(), "DHL".to_string());
    shipping.insert("speed".to_string(), "express".to_string());

    Order {
        order_id: 12345,
        customer: "ACME Corp".to_string(),
        notes: None,
        tags: vec!["priority".to_string(), "b2b".to_string()],
        shipping,
        items: vec![
            LineItem {
                sku: "WIDGET-001".to_string(),
                price: 29.5,
                quantity: 2,
            },
            LineItem {
                sku: "GADGET-042".to_string(),
                price: 149.25,
                quantity: 10,
            },
        ],
        placed_at: "2024-03-01T14:05:09Z".to_string(),
    }
}

#[test]
fn test_full_order_report() {
    let schema = Schema::from_json_str(ORDER_SCHEMA).unwrap();
    let report = to_string(&schema, &order()).unwrap();
    println!("Order report:\n{}", report);

    let expected = "# Document: Order - A customer order\n\
                    ### Attributes:\n\
                    #### **Order Id:**\n 12345\n\
                    #### **Customer:**\n ACME Corp\n\
                    #### **Tags:**\n \n    - priority\n    - b2b\n\
                    #### **Shipping Details:**\n \n   - **`carrier`**: `DHL`\n   - **`speed`**: `express`\n\n\
                    #### **Items:**\n \
                    | sku        |   price |   quantity |\n\
                    |------------|---------|------------|\n\
                    | WIDGET-001 |   29.5  |          2 |\n\
                    | GADGET-042 |  149.25 |         10 |\n\
                    #### **Placed At:**\n 2024-03-01 14:05:09";
    assert_eq!(report, expected);
}

#[test]
fn test_null_notes_are_skipped() {
    let schema = Schema::from_json_str(ORDER_SCHEMA).unwrap();
    let report = to_string(&schema, &order()).unwrap();
    assert!(!report.contains("Notes"));

    let mut with_notes = order();
    with_notes.notes = Some("leave at the door".to_string());
    let report = to_string(&schema, &with_notes).unwrap();
    assert!(report.contains("#### **Notes:**\n leave at the door\n"));
}

#[test]
fn test_fields_outside_schema_are_ignored() {
    let schema = Schema::new()
        .with_title("Order")
        .with_field(SchemaField::string("customer"));
    let report = to_string(&schema, &order()).unwrap();
    assert_eq!(
        report,
        "# Document: Order - No description available.\n### Attributes:\n#### **Customer:**\n ACME Corp"
    );
}

#[test]
fn test_schema_fields_missing_from_instance_are_skipped() {
    let schema = Schema::new()
        .with_field(SchemaField::string("customer"))
        .with_field(SchemaField::string("warehouse"));
    let report = to_string(&schema, &order()).unwrap();
    assert!(!report.contains("Warehouse"));
}

#[test]
fn test_missing_definition_is_an_error() {
    let schema = Schema::from_json_str(
        r##"{ "properties": { "shipping": { "$ref": "#/$defs/Nowhere" } } }"##,
    )
    .unwrap();
    let err = to_string(&schema, &order()).unwrap_err();
    match err {
        Error::SchemaResolution {
            field, reference, ..
        } => {
            assert_eq!(field, "shipping");
            assert_eq!(reference, "#/$defs/Nowhere");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_definitions_alias() {
    let schema = Schema::from_json_str(
        r##"{
            "properties": { "home": { "$ref": "#/definitions/Address" } },
            "definitions": { "Address": { "type": "object", "title": "Home" } }
        }"##,
    )
    .unwrap();
    let instance = Address {
        street: "Main St 1".to_string(),
        city: "Oslo".to_string(),
    };

    #[derive(Serialize)]
    struct Person {
        home: Address,
    }

    let report = to_string(&schema, &Person { home: instance }).unwrap();
    assert!(report.ends_with(
        "#### **Home:**\n \n   - **`street`**: `Main St 1`\n   - **`city`**: `Oslo`\n"
    ));
}

#[test]
fn test_bad_date_is_an_error() {
    let schema = Schema::from_json_str(ORDER_SCHEMA).unwrap();
    let mut bad = order();
    bad.placed_at = "next tuesday".to_string();
    let err = to_string(&schema, &bad).unwrap_err();
    assert!(matches!(err, Error::DateFormat { ref field, .. } if field == "placed_at"));
}

#[test]
fn test_native_timestamps() {
    #[derive(Serialize)]
    struct Event {
        at: chrono::NaiveDateTime,
    }

    let at = NaiveDate::from_ymd_opt(2023, 7, 4)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();
    let schema = Schema::new().with_field(SchemaField::string("at").with_format("date-time"));

    // chrono serializes timestamps as ISO strings, which the date-time field reparses.
    let report = to_string(&schema, &Event { at }).unwrap();
    assert!(report.ends_with("#### **At:**\n 2023-07-04 09:15:00"));

    let mut instance = content_report::Map::new();
    instance.insert("at".to_string(), Value::from(at));
    let report = render(&schema, &instance).unwrap();
    assert!(report.ends_with("#### **At:**\n 2023-07-04 09:15:00"));
}

#[test]
fn test_render_json_str() {
    let instance = r#"{
        "order_id": 7,
        "customer": "Initech",
        "tags": [],
        "items": [{ "sku": "TPS", "price": 1, "quantity": 1 }],
        "placed_at": "2024-01-02"
    }"#;
    let report = render_json_str(ORDER_SCHEMA, instance).unwrap();
    assert!(!report.contains("Tags"));
    assert!(report.contains("| TPS   |       1 |          1 |"));
    assert!(report.ends_with("#### **Placed At:**\n 2024-01-02 00:00:00"));
}

#[test]
fn test_options_through_public_api() {
    #[derive(Serialize)]
    struct Counter {
        count: u32,
        rows: Vec<BTreeMap<String, u32>>,
    }

    let mut first = BTreeMap::new();
    first.insert("a".to_string(), 1);
    let mut second = BTreeMap::new();
    second.insert("b".to_string(), 2);
    let counter = Counter {
        count: 0,
        rows: vec![first, second],
    };
    let schema = Schema::new()
        .with_field(SchemaField::new("count", FieldType::Integer))
        .with_field(SchemaField::new("rows", FieldType::Array));

    let default = to_string(&schema, &counter).unwrap();
    assert!(!default.contains("Count"));
    assert!(default.contains("|   a |   b |"));

    let keep_zero = RenderOptions::new().with_absence_policy(AbsencePolicy::Missing);
    let report = to_string_with_options(&schema, &counter, keep_zero).unwrap();
    assert!(report.contains("#### **Count:**\n 0\n"));

    let strict = RenderOptions::new().with_row_policy(RowPolicy::Strict);
    let err = to_string_with_options(&schema, &counter, strict).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { row: 1, .. }));
}

#[test]
fn test_content_report_trait_and_writer() {
    impl ContentReport for Address {
        fn schema() -> Schema {
            Schema::new()
                .with_title("Address")
                .with_description("Postal address")
                .with_field(SchemaField::string("street"))
                .with_field(SchemaField::string("city"))
        }
    }

    let address = Address {
        street: "Karl Johans gate 22".to_string(),
        city: "Oslo".to_string(),
    };
    let report = address.content_report().unwrap();
    assert_eq!(
        report,
        "# Document: Address - Postal address\n### Attributes:\n\
         #### **Street:**\n Karl Johans gate 22\n\
         #### **City:**\n Oslo"
    );

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &Address::schema(), &address).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), report);
}

#[test]
fn test_renderer_reuse_across_threads() {
    let renderer = std::sync::Arc::new(DocumentRenderer::default());
    let schema = std::sync::Arc::new(Schema::from_json_str(ORDER_SCHEMA).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = renderer.clone();
            let schema = schema.clone();
            std::thread::spawn(move || {
                let mut order = order();
                order.order_id = i + 1;
                let instance = match to_value(&order).unwrap() {
                    Value::Object(map) => map,
                    _ => unreachable!(),
                };
                renderer.render(&schema, &instance).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let report = handle.join().unwrap();
        assert!(report.contains(&format!("#### **Order Id:**\n {}\n", i + 1)));
    }
}
