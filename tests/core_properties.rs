//! Integration tests for the mapping and translation core
//!
//! Pure-value tests exercising the library surface the way a request
//! handler would: entity in, entry shape out, and back again.

use entix::domain::{
    entity_to_entry, entry_to_entity, rename_permission, scope_specs_to_permissions,
    to_search_query, Entity, HolderType, JournalEntry, ScopeSpec,
};
use entix::error::EntixError;
use serde_json::{json, Map, Value};
use uuid::Uuid;

fn entry_from_parts(parts: &entix::domain::EntryParts, id: Uuid) -> JournalEntry {
    JournalEntry {
        id: Some(id),
        title: Some(parts.title.clone()),
        tags: parts.tags.clone(),
        content: Some(serde_json::to_string(&parts.content).unwrap()),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_entity_round_trip() {
    let mut entity = Entity::new(
        "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
        "ethereum",
        "Gas Station",
    );
    entity.required_fields = vec![
        json!({"category": "infrastructure"})
            .as_object()
            .unwrap()
            .clone(),
        json!({"erc": ["20", "721"]}).as_object().unwrap().clone(),
    ];
    entity
        .extra
        .insert("description".to_string(), json!("fuel for the network"));

    let parts = entity_to_entry(&entity);
    let entity_id = Uuid::new_v4();
    let collection_id = Uuid::new_v4();

    let response = entry_to_entity(&entry_from_parts(&parts, entity_id), collection_id, None)
        .expect("round trip should parse");

    assert_eq!(response.entity_id, entity_id);
    assert_eq!(response.collection_id, collection_id);
    assert_eq!(
        response.address.as_deref(),
        Some("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359")
    );
    assert_eq!(response.blockchain.as_deref(), Some("ethereum"));
    assert_eq!(response.name.as_deref(), Some("Gas Station"));

    let required = response.required_fields.unwrap();
    assert_eq!(required.len(), 3);
    assert_eq!(required[0].get("category"), Some(&json!("infrastructure")));
    assert_eq!(required[1].get("erc"), Some(&json!("20")));
    assert_eq!(required[2].get("erc"), Some(&json!("721")));

    let secondary = response.secondary_fields.unwrap();
    assert_eq!(
        secondary.get("description"),
        Some(&json!("fuel for the network"))
    );
}

#[test]
fn test_search_query_shapes() {
    assert_eq!(to_search_query(&[], &[]), "");
    assert_eq!(
        to_search_query(&["k1:v1".to_string()], &[]),
        "tag:k1:v1"
    );
    assert_eq!(
        to_search_query(&["k1:v1".to_string()], &["foo".to_string()]),
        "tag:k1:v1 foo"
    );
}

#[test]
fn test_list_required_field_expands_in_order() {
    let mut entity = Entity::new(
        "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
        "ethereum",
        "Alice",
    );
    entity.required_fields = vec![json!({"a": ["1", "2"]}).as_object().unwrap().clone()];

    let parts = entity_to_entry(&entity);
    let field_tags: Vec<&String> = parts.tags.iter().skip(2).collect();
    assert_eq!(field_tags, vec!["a:1", "a:2"]);
}

#[test]
fn test_oversized_required_field_dropped_silently() {
    let mut oversized = Map::new();
    oversized.insert("k".repeat(128), Value::String("v".repeat(128)));
    let mut entity = Entity::new(
        "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
        "ethereum",
        "Alice",
    );
    entity.required_fields = vec![oversized];

    let parts = entity_to_entry(&entity);
    assert_eq!(parts.tags.len(), 2);
    assert_eq!(parts.unnormalized_address, "");
}

#[test]
fn test_permission_rename_round_trip() {
    let renamed = rename_permission("journals.entries.read", true);
    assert_eq!(renamed, "collections.entities.read");
    assert_eq!(rename_permission(&renamed, false), "journals.entries.read");
}

#[test]
fn test_title_only_entry_yields_name_without_address() {
    let entry = JournalEntry {
        id: Some(Uuid::new_v4()),
        title: Some("0xABC - Alice".to_string()),
        tags: vec![],
        content: None,
        created_at: None,
        updated_at: None,
    };

    let response = entry_to_entity(&entry, Uuid::new_v4(), None).unwrap();
    assert_eq!(response.name.as_deref(), Some("Alice"));
    assert_eq!(response.address, None);
}

#[test]
fn test_tag_scan_splits_address_blockchain_and_custom() {
    let entry = JournalEntry {
        id: Some(Uuid::new_v4()),
        title: Some("0xABC - Alice".to_string()),
        tags: vec![
            "address:0xABC".to_string(),
            "blockchain:eth".to_string(),
            "custom:42".to_string(),
        ],
        content: None,
        created_at: None,
        updated_at: None,
    };

    let response = entry_to_entity(&entry, Uuid::new_v4(), None).unwrap();
    assert_eq!(response.address.as_deref(), Some("0xABC"));
    assert_eq!(response.blockchain.as_deref(), Some("eth"));
    assert_eq!(
        response.required_fields,
        Some(vec![json!({"custom": "42"}).as_object().unwrap().clone()])
    );
}

#[test]
fn test_scope_mismatch_surfaces_inconsistency() {
    let collection_id = Uuid::new_v4();
    let holder_id = Uuid::new_v4();
    let scopes = vec![ScopeSpec {
        journal_id: collection_id,
        holder_type: HolderType::User,
        holder_id: Uuid::new_v4(),
        permission: "journals.read".to_string(),
    }];

    let err = scope_specs_to_permissions(collection_id, HolderType::User, holder_id, &scopes)
        .unwrap_err();
    assert!(matches!(err, EntixError::InconsistentScopeResponse(_)));
}

#[test]
fn test_scope_translation_happy_path() {
    let collection_id = Uuid::new_v4();
    let holder_id = Uuid::new_v4();
    let scopes = vec![
        ScopeSpec {
            journal_id: collection_id,
            holder_type: HolderType::Token,
            holder_id,
            permission: "journals.read".to_string(),
        },
        ScopeSpec {
            journal_id: collection_id,
            holder_type: HolderType::Token,
            holder_id,
            permission: "journals.entries.update".to_string(),
        },
    ];

    let response =
        scope_specs_to_permissions(collection_id, HolderType::Token, holder_id, &scopes).unwrap();
    assert_eq!(response.collection_id, collection_id);
    assert_eq!(
        response.permissions[0].permissions,
        vec!["collections.read", "collections.entities.update"]
    );
}
