//! Journal store HTTP client
//!
//! The single infrastructure gateway to the external document store. Every
//! method is a blocking request/response round trip: no retries, no
//! caching; non-2xx responses surface as `EntixError::Api` for the caller
//! to map.

use crate::domain::entity::{AuthScheme, HolderType, JournalEntry};
use crate::domain::permissions::ScopeSpec;
use crate::error::{EntixError, Result};
use crate::infrastructure::config::Config;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const APPLICATION_ID_HEADER: &str = "X-Application-Id";

/// A journal as the store reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalsListResponse {
    #[serde(default)]
    pub journals: Vec<JournalRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntriesResponse {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

/// Entry payload for create and bulk-create calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub context_type: String,
}

/// Scopes of one holder on a journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalPermissionHolder {
    pub holder_type: HolderType,
    pub holder_id: Uuid,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalPermissionsRecord {
    pub journal_id: Uuid,
    #[serde(default)]
    pub permissions: Vec<JournalPermissionHolder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopesResponse {
    #[serde(default)]
    pub scopes: Vec<ScopeSpec>,
}

/// One full-text search hit; the entry id hides in the entry_url tail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub entry_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total_results: usize,
    pub offset: usize,
    #[serde(default)]
    pub next_offset: Option<usize>,
    pub max_score: f64,
    #[serde(default)]
    pub results: Vec<SearchResultEntry>,
}

/// Blocking client for the journal store API
pub struct JournalClient {
    http: Client,
    base_url: String,
    application_id: Option<String>,
}

impl JournalClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(JournalClient {
            http,
            base_url: config.journal_api_url.clone(),
            application_id: config.application_id.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder, token: &str, scheme: AuthScheme) -> RequestBuilder {
        let request = request.header(
            "Authorization",
            format!("{} {}", scheme.header_prefix(), token),
        );
        match &self.application_id {
            Some(app_id) => request.header(APPLICATION_ID_HEADER, app_id),
            None => request,
        }
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(EntixError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json()?)
    }

    pub fn create_journal(
        &self,
        token: &str,
        scheme: AuthScheme,
        name: &str,
    ) -> Result<JournalRecord> {
        debug!(name, "creating journal");
        let request = self
            .http
            .post(self.url("/journals"))
            .json(&json!({ "name": name }));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn list_journals(&self, token: &str, scheme: AuthScheme) -> Result<JournalsListResponse> {
        let request = self.http.get(self.url("/journals"));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn delete_journal(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
    ) -> Result<JournalRecord> {
        let request = self.http.delete(self.url(&format!("/journals/{}", journal_id)));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn create_entry(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        payload: &EntryPayload,
    ) -> Result<JournalEntry> {
        debug!(%journal_id, title = %payload.title, "creating entry");
        let request = self
            .http
            .post(self.url(&format!("/journals/{}/entries", journal_id)))
            .json(payload);
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn create_entries_pack(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        entries: &[EntryPayload],
    ) -> Result<JournalEntriesResponse> {
        debug!(%journal_id, count = entries.len(), "creating entries pack");
        let request = self
            .http
            .post(self.url(&format!("/journals/{}/bulk", journal_id)))
            .json(entries);
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn get_entry(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        entry_id: Uuid,
    ) -> Result<JournalEntry> {
        let request = self
            .http
            .get(self.url(&format!("/journals/{}/entries/{}", journal_id, entry_id)));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn get_entries(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
    ) -> Result<JournalEntriesResponse> {
        let request = self
            .http
            .get(self.url(&format!("/journals/{}/entries", journal_id)));
        self.execute(self.authorize(request, token, scheme))
    }

    /// Replace an entry's title, content and tags. The store answers with
    /// the reduced content record: no id, no timestamps.
    pub fn update_entry_content(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        entry_id: Uuid,
        payload: &EntryPayload,
    ) -> Result<JournalEntry> {
        let request = self
            .http
            .put(self.url(&format!("/journals/{}/entries/{}", journal_id, entry_id)))
            .query(&[("tags_action", "replace")])
            .json(payload);
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn delete_entry(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        entry_id: Uuid,
    ) -> Result<JournalEntry> {
        let request = self
            .http
            .delete(self.url(&format!("/journals/{}/entries/{}", journal_id, entry_id)));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn get_journal_permissions(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
    ) -> Result<JournalPermissionsRecord> {
        let request = self
            .http
            .get(self.url(&format!("/journals/{}/scopes", journal_id)));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn update_journal_scopes(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: Uuid,
        permission_list: &[String],
    ) -> Result<ScopesResponse> {
        let request = self
            .http
            .post(self.url(&format!("/journals/{}/scopes", journal_id)))
            .json(&json!({
                "holder_type": holder_type,
                "holder_id": holder_id,
                "permission_list": permission_list,
            }));
        self.execute(self.authorize(request, token, scheme))
    }

    pub fn delete_journal_scopes(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: Uuid,
        permission_list: &[String],
    ) -> Result<ScopesResponse> {
        let request = self
            .http
            .delete(self.url(&format!("/journals/{}/scopes", journal_id)))
            .json(&json!({
                "holder_type": holder_type,
                "holder_id": holder_id,
                "permission_list": permission_list,
            }));
        self.execute(self.authorize(request, token, scheme))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &self,
        token: &str,
        scheme: AuthScheme,
        journal_id: Uuid,
        query: &str,
        filters: &[String],
        limit: usize,
        offset: usize,
        content: bool,
    ) -> Result<SearchResults> {
        let mut params: Vec<(String, String)> = vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("content".to_string(), content.to_string()),
        ];
        for filter in filters {
            params.push(("filters".to_string(), filter.clone()));
        }

        let request = self
            .http
            .get(self.url(&format!("/journals/{}/search", journal_id)))
            .query(&params);
        self.execute(self.authorize(request, token, scheme))
    }
}
