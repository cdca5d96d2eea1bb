//! Parses a JSON6 document and prints the decoded value tree, then decodes
//! the same document into a typed record.
//!
//! Run with `cargo run --example inspect`.

use json6::{Field, Record, Value};

#[derive(Debug, Default)]
struct Service {
    name: String,
    port: i64,
    replicas: Option<i64>,
    tags: Vec<String>,
}

impl Record for Service {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("name", &mut self.name).alias("service"),
            Field::new("port", &mut self.port),
            Field::new("replicas", &mut self.replicas),
            Field::new("tags", &mut self.tags),
        ]
    }
}

const SOURCE: &str = r#"{
    // ES6-flavored JSON
    service: 'billing',
    port: 0x1F90,
    replicas: null,
    tags: [`prod`, "eu-west", 'canary',],
    budget: 1_000_000.5,
    scale: [1e3,,-2],
}"#;

fn main() {
    let value = json6::parse_from_str(SOURCE).expect("invalid JSON6");
    println!("tree: {value}");

    if let Value::Object(entries) = &value {
        for (key, entry) in entries {
            println!("  {key}: {} = {entry}", entry.type_of());
        }
    }

    let mut service = Service::default();
    json6::decode_from_str(SOURCE, &mut service).expect("decode failed");
    println!("record: {service:?}");
}
