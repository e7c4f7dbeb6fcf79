//! Collection use cases

use crate::domain::entity::{AuthScheme, CollectionResponse, CollectionsResponse};
use crate::error::Result;
use crate::infrastructure::JournalClient;
use uuid::Uuid;

pub struct CollectionService<'a> {
    client: &'a JournalClient,
}

impl<'a> CollectionService<'a> {
    pub fn new(client: &'a JournalClient) -> Self {
        CollectionService { client }
    }

    pub fn create(
        &self,
        token: &str,
        scheme: AuthScheme,
        name: &str,
    ) -> Result<CollectionResponse> {
        let journal = self.client.create_journal(token, scheme, name)?;
        Ok(CollectionResponse {
            collection_id: journal.id,
            name: journal.name,
        })
    }

    pub fn list(&self, token: &str, scheme: AuthScheme) -> Result<CollectionsResponse> {
        let response = self.client.list_journals(token, scheme)?;
        Ok(CollectionsResponse {
            collections: response
                .journals
                .into_iter()
                .map(|journal| CollectionResponse {
                    collection_id: journal.id,
                    name: journal.name,
                })
                .collect(),
        })
    }

    pub fn delete(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
    ) -> Result<CollectionResponse> {
        let journal = self.client.delete_journal(token, scheme, collection_id)?;
        Ok(CollectionResponse {
            collection_id: journal.id,
            name: journal.name,
        })
    }
}
