//! Bulk CSV ingestion
//!
//! Loads a header-driven CSV file into entity payloads for a bulk create.
//! The `address` and `name` columns feed the fixed schema; every other
//! column is folded into the entity's extra bag as a string. The
//! blockchain, required fields and secondary fields given on the command
//! line are shared across every row.

use crate::domain::entity::Entity;
use crate::error::{EntixError, Result};
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub blockchain: String,
    pub required_fields: Vec<Map<String, Value>>,
    pub secondary_fields: Map<String, Value>,
}

pub fn load_entities(path: &Path, options: &ImportOptions) -> Result<Vec<Entity>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == "address") {
        return Err(EntixError::Config(format!(
            "CSV file {} is missing required column: address",
            path.display()
        )));
    }
    if !headers.iter().any(|h| h == "name") {
        return Err(EntixError::Config(format!(
            "CSV file {} is missing required column: name",
            path.display()
        )));
    }

    let mut entities = Vec::new();
    for record in reader.records() {
        let record = record?;

        let mut address = String::new();
        let mut name = String::new();
        let mut extra = Map::new();

        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                "address" => address = value.to_string(),
                "name" => name = value.to_string(),
                // A blockchain column loses to the shared option below
                "blockchain" => {}
                _ => {
                    extra.insert(header.to_string(), Value::String(value.to_string()));
                }
            }
        }

        for (key, value) in &options.secondary_fields {
            extra.insert(key.clone(), value.clone());
        }

        entities.push(Entity {
            address,
            blockchain: options.blockchain.clone(),
            name,
            required_fields: options.required_fields.clone(),
            extra,
        });
    }

    Ok(entities)
}
