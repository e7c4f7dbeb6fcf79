//! Entity use cases
//!
//! Each operation maps between the structured entity model and the store's
//! entry shape, delegating transport to the journal client. Unknown address
//! formats are reported through the diagnostic side channel after the store
//! call succeeds; they never fail the request.

use crate::domain::entity::{AuthScheme, EntitiesResponse, Entity, EntityResponse};
use crate::domain::mapping::{entity_to_entry, entry_to_entity};
use crate::error::Result;
use crate::infrastructure::client::EntryPayload;
use crate::infrastructure::{JournalClient, Reporter};
use uuid::Uuid;

const ENTITY_CONTEXT_TYPE: &str = "entity";

pub struct EntityService<'a> {
    client: &'a JournalClient,
    reporter: &'a Reporter,
}

impl<'a> EntityService<'a> {
    pub fn new(client: &'a JournalClient, reporter: &'a Reporter) -> Self {
        EntityService { client, reporter }
    }

    pub fn add(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        entity: &Entity,
    ) -> Result<EntityResponse> {
        let (payload, unnormalized_address) = to_payload(entity)?;

        let entry = self
            .client
            .create_entry(token, scheme, collection_id, &payload)?;
        let response = entry_to_entity(&entry, collection_id, None)?;

        if !unnormalized_address.is_empty() {
            self.reporter.custom_report(
                "Unknown type of blockchain address",
                &format!(
                    "Added entity with unknown blockchain address `{}` to collection `{}` entity `{}`",
                    unnormalized_address, collection_id, response.entity_id
                ),
                vec![
                    format!("collection_id:{}", collection_id),
                    format!("unknown_blockchain_address:{}", unnormalized_address),
                ],
            );
        }

        Ok(response)
    }

    pub fn add_bulk(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        entities: &[Entity],
    ) -> Result<EntitiesResponse> {
        let mut payloads = Vec::with_capacity(entities.len());
        let mut unnormalized_addresses = Vec::new();

        for entity in entities {
            let (payload, unnormalized_address) = to_payload(entity)?;
            if !unnormalized_address.is_empty() {
                unnormalized_addresses.push(unnormalized_address);
            }
            payloads.push(payload);
        }

        let created = self
            .client
            .create_entries_pack(token, scheme, collection_id, &payloads)?;

        let mut entities_response = EntitiesResponse {
            entities: Vec::with_capacity(created.entries.len()),
        };
        for entry in &created.entries {
            entities_response
                .entities
                .push(entry_to_entity(entry, collection_id, None)?);
        }

        if !unnormalized_addresses.is_empty() {
            self.reporter.custom_report(
                "Unknown type of blockchain address - pack",
                &format!(
                    "Added pack of entities with unknown blockchain addresses `{}` to collection `{}`",
                    unnormalized_addresses.join(", "),
                    collection_id
                ),
                vec![
                    format!("collection_id:{}", collection_id),
                    "unknown_blockchain_address:pack".to_string(),
                ],
            );
        }

        Ok(entities_response)
    }

    pub fn get(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        entity_id: Uuid,
    ) -> Result<EntityResponse> {
        let entry = self
            .client
            .get_entry(token, scheme, collection_id, entity_id)?;
        entry_to_entity(&entry, collection_id, None)
    }

    pub fn update(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        entity_id: Uuid,
        entity: &Entity,
    ) -> Result<EntityResponse> {
        let (payload, _) = to_payload(entity)?;

        // The content-update response carries no id; pass the known one
        let entry = self
            .client
            .update_entry_content(token, scheme, collection_id, entity_id, &payload)?;
        entry_to_entity(&entry, collection_id, Some(entity_id))
    }

    pub fn list(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
    ) -> Result<EntitiesResponse> {
        let response = self.client.get_entries(token, scheme, collection_id)?;

        let mut entities_response = EntitiesResponse {
            entities: Vec::with_capacity(response.entries.len()),
        };
        for entry in &response.entries {
            entities_response
                .entities
                .push(entry_to_entity(entry, collection_id, None)?);
        }
        Ok(entities_response)
    }

    pub fn delete(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        entity_id: Uuid,
    ) -> Result<EntityResponse> {
        let entry = self
            .client
            .delete_entry(token, scheme, collection_id, entity_id)?;

        // Deletion answers with a bare confirmation; no field reconstruction
        Ok(EntityResponse {
            entity_id: entry.id.unwrap_or(entity_id),
            collection_id,
            address: None,
            blockchain: None,
            name: None,
            required_fields: None,
            secondary_fields: None,
            created_at: None,
            updated_at: None,
        })
    }
}

/// Map an entity to the wire payload, serializing its content and passing
/// the unnormalized-address signal through.
fn to_payload(entity: &Entity) -> Result<(EntryPayload, String)> {
    let parts = entity_to_entry(entity);
    let content = serde_json::to_string(&parts.content)?;

    Ok((
        EntryPayload {
            title: parts.title,
            content,
            tags: parts.tags,
            context_type: ENTITY_CONTEXT_TYPE.to_string(),
        },
        parts.unnormalized_address,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_payload_serializes_extra_as_content() {
        let mut entity = Entity::new(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "ethereum",
            "Alice",
        );
        entity
            .extra
            .insert("website".to_string(), serde_json::json!("https://example.com"));

        let (payload, unnormalized) = to_payload(&entity).unwrap();
        assert_eq!(payload.context_type, "entity");
        assert_eq!(payload.content, r#"{"website":"https://example.com"}"#);
        assert_eq!(unnormalized, "");
    }

    #[test]
    fn test_to_payload_signals_unknown_address() {
        let entity = Entity::new("not-an-address", "solana", "Bob");
        let (_, unnormalized) = to_payload(&entity).unwrap();
        assert_eq!(unnormalized, "not-an-address");
    }
}
