//! Output formatting utilities

use crate::domain::entity::{CollectionsResponse, EntitySearchResponse};
use crate::error::Result;
use serde::Serialize;

/// Render a response as pretty JSON for stdout
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a collection listing for display
pub fn format_collection_list(response: &CollectionsResponse) -> String {
    if response.collections.is_empty() {
        return "No collections found".to_string();
    }

    let mut output = String::new();
    for collection in &response.collections {
        output.push_str(&format!(
            "{}  {}\n",
            collection.collection_id, collection.name
        ));
    }
    output
}

/// One-line summary of a search response
pub fn format_search_summary(response: &EntitySearchResponse) -> String {
    format!(
        "{} results (offset {}, max score {})",
        response.total_results, response.offset, response.max_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::CollectionResponse;
    use uuid::Uuid;

    #[test]
    fn test_format_empty_collection_list() {
        let response = CollectionsResponse {
            collections: vec![],
        };
        assert_eq!(format_collection_list(&response), "No collections found");
    }

    #[test]
    fn test_format_collection_list() {
        let id = Uuid::new_v4();
        let response = CollectionsResponse {
            collections: vec![CollectionResponse {
                collection_id: id,
                name: "watchlist".to_string(),
            }],
        };

        let output = format_collection_list(&response);
        assert!(output.contains(&id.to_string()));
        assert!(output.contains("watchlist"));
    }

    #[test]
    fn test_to_pretty_json() {
        let response = CollectionsResponse {
            collections: vec![],
        };
        let output = to_pretty_json(&response).unwrap();
        assert!(output.contains("\"collections\""));
    }

    #[test]
    fn test_format_search_summary() {
        let response = EntitySearchResponse {
            total_results: 3,
            offset: 0,
            next_offset: None,
            max_score: 1.5,
            entities: vec![],
        };
        assert_eq!(
            format_search_summary(&response),
            "3 results (offset 0, max score 1.5)"
        );
    }
}
