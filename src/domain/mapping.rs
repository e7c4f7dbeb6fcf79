//! Entity/entry mapping
//!
//! The bidirectional translation between the structured entity model and
//! the flat (title, tags, content) representation the journal store keeps.
//! Both directions are pure and stateless; address-normalization failures
//! and oversized tags are signals, never errors.

use crate::domain::address::to_checksum_address;
use crate::domain::entity::{Entity, EntityResponse, JournalEntry};
use crate::error::{EntixError, Result};
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

/// Separator between the address and the human name in entry titles
const TITLE_SEPARATOR: &str = " - ";

const ADDRESS_TAG_PREFIX: &str = "address:";
const BLOCKCHAIN_TAG_PREFIX: &str = "blockchain:";

/// The store rejects overlong tags; a required field whose name and value
/// both reach this length is dropped instead of sent.
const TAG_FIELD_LIMIT: usize = 128;

/// Flat entry representation ready for the store.
///
/// `unnormalized_address` carries the raw input address when checksum
/// normalization failed and is empty otherwise; callers use it to decide
/// whether to emit a side-channel diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryParts {
    pub title: String,
    pub tags: Vec<String>,
    pub content: Map<String, Value>,
    pub unnormalized_address: String,
}

/// Convert an entity payload into the store's (title, tags, content) shape.
///
/// The title is `"<checksummed-address> - <name>"`; a malformed address is
/// used raw and reported through `unnormalized_address`. Tags encode the
/// address, the blockchain, and every required field in input order; list
/// values expand to one tag per element.
pub fn entity_to_entry(entity: &Entity) -> EntryParts {
    let mut unnormalized_address = String::new();
    let address = match to_checksum_address(&entity.address) {
        Some(checksummed) => checksummed,
        None => {
            warn!(
                address = %entity.address,
                "address did not normalize to checksum form, keeping raw value"
            );
            unnormalized_address = entity.address.clone();
            entity.address.clone()
        }
    };

    let title = format!("{}{}{}", address, TITLE_SEPARATOR, entity.name);

    let mut tags: Vec<String> = Vec::new();
    tags.push(format!("{}{}", ADDRESS_TAG_PREFIX, address));
    tags.push(format!("{}{}", BLOCKCHAIN_TAG_PREFIX, entity.blockchain));

    for required_field in &entity.required_fields {
        for (field, value) in required_field {
            match value {
                Value::Array(elements) => {
                    for element in elements {
                        push_field_tag(&mut tags, field, &scalar_to_tag_string(element));
                    }
                }
                _ => push_field_tag(&mut tags, field, &scalar_to_tag_string(value)),
            }
        }
    }

    EntryParts {
        title,
        tags,
        content: entity.extra.clone(),
        unnormalized_address,
    }
}

/// Append a `field:value` tag, unless both sides hit the store's length
/// constraint (in which case the tag is dropped with a warning).
fn push_field_tag(tags: &mut Vec<String>, field: &str, value: &str) {
    if field.len() >= TAG_FIELD_LIMIT && value.len() >= TAG_FIELD_LIMIT {
        warn!(field = %field, "dropping oversized required field tag");
        return;
    }
    tags.push(format!("{}:{}", field, value));
}

/// Stringify a scalar for tag encoding: strings verbatim, numbers and
/// booleans via their display form, nested structures as compact JSON,
/// null as the empty string.
fn scalar_to_tag_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Convert a stored entry back into the structured entity view.
///
/// `entity_id` overrides the entry's own id (content-update responses carry
/// none); when neither is available the entry is unparsable. The name is
/// recovered from the title by dropping the leading address segment; the
/// address itself is only ever taken from an explicit `address:` tag.
pub fn entry_to_entity(
    entry: &JournalEntry,
    collection_id: Uuid,
    entity_id: Option<Uuid>,
) -> Result<EntityResponse> {
    let entity_id = entity_id
        .or(entry.id)
        .ok_or_else(|| EntixError::UnparsableEntry("missing id".to_string()))?;

    let title = entry
        .title
        .as_deref()
        .ok_or_else(|| EntixError::UnparsableEntry("missing title".to_string()))?;
    let name = title
        .split(TITLE_SEPARATOR)
        .skip(1)
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR);

    let mut address: Option<String> = None;
    let mut blockchain: Option<String> = None;
    let mut required_fields: Vec<Map<String, Value>> = Vec::new();

    for tag in &entry.tags {
        if let Some(rest) = tag.strip_prefix(ADDRESS_TAG_PREFIX) {
            address = Some(rest.to_string());
        } else if let Some(rest) = tag.strip_prefix(BLOCKCHAIN_TAG_PREFIX) {
            blockchain = Some(rest.to_string());
        } else {
            // A tag without a colon keeps the whole tag as the field name
            // with an empty value; permissive real-world tag inputs rely
            // on this.
            let (field, value) = tag.split_once(':').unwrap_or((tag.as_str(), ""));
            let mut mapping = Map::new();
            mapping.insert(field.to_string(), Value::String(value.to_string()));
            required_fields.push(mapping);
        }
    }

    let secondary_fields = parse_content(entry.content.as_deref())?;

    Ok(EntityResponse {
        entity_id,
        collection_id,
        address,
        blockchain,
        name: Some(name),
        required_fields: Some(required_fields),
        secondary_fields: Some(secondary_fields),
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    })
}

/// Decode entry content into the secondary-fields mapping. Absent or empty
/// content is an empty mapping; anything else must be a JSON object.
fn parse_content(content: Option<&str>) -> Result<Map<String, Value>> {
    let raw = match content {
        None => return Ok(Map::new()),
        Some(raw) if raw.trim().is_empty() => return Ok(Map::new()),
        Some(raw) => raw,
    };

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| EntixError::UnparsableEntry(format!("invalid content: {}", e)))?;

    match value {
        Value::Object(mapping) => Ok(mapping),
        _ => Err(EntixError::UnparsableEntry(
            "content is not a JSON object".to_string(),
        )),
    }
}
