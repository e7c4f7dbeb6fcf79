//! Entity search use case

use crate::domain::entity::{AuthScheme, EntitySearchResponse, JournalEntry};
use crate::domain::mapping::entry_to_entity;
use crate::domain::search::to_search_query;
use crate::error::{EntixError, Result};
use crate::infrastructure::client::SearchResultEntry;
use crate::infrastructure::JournalClient;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub required_fields: Vec<String>,
    pub secondary_fields: Vec<String>,
    pub filters: Vec<String>,
    pub limit: usize,
    pub offset: usize,
    pub content: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            required_fields: Vec::new(),
            secondary_fields: Vec::new(),
            filters: Vec::new(),
            limit: 10,
            offset: 0,
            content: true,
        }
    }
}

pub struct SearchService<'a> {
    client: &'a JournalClient,
}

impl<'a> SearchService<'a> {
    pub fn new(client: &'a JournalClient) -> Self {
        SearchService { client }
    }

    pub fn search(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        options: &SearchOptions,
    ) -> Result<EntitySearchResponse> {
        let query = to_search_query(&options.required_fields, &options.secondary_fields);

        let results = self.client.search(
            token,
            scheme,
            collection_id,
            &query,
            &options.filters,
            options.limit,
            options.offset,
            options.content,
        )?;

        let mut entities = Vec::with_capacity(results.results.len());
        for result in &results.results {
            let entry = to_journal_entry(result)?;
            entities.push(entry_to_entity(&entry, collection_id, None)?);
        }

        Ok(EntitySearchResponse {
            total_results: results.total_results,
            offset: results.offset,
            next_offset: results.next_offset,
            max_score: results.max_score,
            entities,
        })
    }
}

/// Rebuild a journal entry from a search hit; the id is the trailing
/// segment of the hit's entry_url.
fn to_journal_entry(result: &SearchResultEntry) -> Result<JournalEntry> {
    let id_segment = result
        .entry_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    let id: Uuid = id_segment.parse().map_err(|_| {
        EntixError::UnparsableEntry(format!(
            "entry url has no usable id: {}",
            result.entry_url
        ))
    })?;

    Ok(JournalEntry {
        id: Some(id),
        title: result.title.clone(),
        tags: result.tags.clone(),
        content: result.content.clone(),
        created_at: result.created_at,
        updated_at: result.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(entry_url: &str) -> SearchResultEntry {
        SearchResultEntry {
            entry_url: entry_url.to_string(),
            title: Some("0xABC - Alice".to_string()),
            content: None,
            tags: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_entry_id_recovered_from_url_tail() {
        let id = Uuid::new_v4();
        let entry = to_journal_entry(&hit(&format!(
            "https://journal.example.com/journals/a/entries/{}/",
            id
        )))
        .unwrap();
        assert_eq!(entry.id, Some(id));
    }

    #[test]
    fn test_bad_entry_url_is_unparsable() {
        let err = to_journal_entry(&hit("https://journal.example.com/entries/not-a-uuid"))
            .unwrap_err();
        assert!(matches!(err, EntixError::UnparsableEntry(_)));
    }
}
