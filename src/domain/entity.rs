//! Data model: entities, collections, permissions, search results
//!
//! Entities are the structured view this crate presents; the underlying
//! store only knows journals, entries and tags. Everything here is a
//! transient request-scoped value — no lifecycle state is kept locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use uuid::Uuid;

/// Authentication scheme used against the journal store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    #[default]
    Bearer,
    Web3,
}

impl AuthScheme {
    /// Header prefix for the Authorization header
    pub fn header_prefix(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Web3 => "Web3",
        }
    }
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bearer" => Ok(AuthScheme::Bearer),
            "web3" => Ok(AuthScheme::Web3),
            _ => Err(format!(
                "Invalid auth type: '{}'. Valid types are: bearer, web3",
                s
            )),
        }
    }
}

/// Who holds a permission grant on a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderType {
    User,
    Group,
    Token,
}

impl FromStr for HolderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(HolderType::User),
            "group" => Ok(HolderType::Group),
            "token" => Ok(HolderType::Token),
            _ => Err(format!(
                "Invalid holder type: '{}'. Valid types are: user, group, token",
                s
            )),
        }
    }
}

/// Entity creation/update payload.
///
/// `address`, `blockchain`, `name` and `required_fields` are the fixed
/// schema; every other key the caller supplies is collected into `extra`
/// via `#[serde(flatten)]` and travels to the store as the entry content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub address: String,
    pub blockchain: String,
    pub name: String,

    /// Ordered sequence of single-key mappings, each key -> scalar or list.
    /// Encoded as `key:value` tags on the stored entry.
    #[serde(default)]
    pub required_fields: Vec<Map<String, Value>>,

    /// Open-ended attribute bag; becomes the entry content.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    pub fn new(address: &str, blockchain: &str, name: &str) -> Self {
        Entity {
            address: address.to_string(),
            blockchain: blockchain.to_string(),
            name: name.to_string(),
            required_fields: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// A stored journal entry as the store reports it.
///
/// The store answers with two overlapping shapes: the full record and a
/// reduced content record (returned by content updates) that lacks the id
/// and timestamps. One struct with optional fields covers both; readers
/// branch only where those fields matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Structured entity view of a stored entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityResponse {
    pub entity_id: Uuid,
    pub collection_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitiesResponse {
    #[serde(default)]
    pub entities: Vec<EntityResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse {
    pub collection_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionsResponse {
    #[serde(default)]
    pub collections: Vec<CollectionResponse>,
}

/// Permission strings one holder carries on a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPermission {
    pub holder_type: HolderType,
    pub holder_id: Uuid,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPermissionsResponse {
    pub collection_id: Uuid,
    #[serde(default)]
    pub permissions: Vec<CollectionPermission>,
}

/// Search response mirroring the store's paging envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySearchResponse {
    pub total_results: usize,
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
    pub max_score: f64,
    #[serde(default)]
    pub entities: Vec<EntityResponse>,
}
