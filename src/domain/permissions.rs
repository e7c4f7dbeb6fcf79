//! Permission vocabulary translation
//!
//! The store grants scopes on journals/entries; this crate presents them as
//! permissions on collections/entities. Translation is a plain string
//! substitution plus a defensive repackaging of scope-list responses.

use crate::domain::entity::{CollectionPermission, CollectionPermissionsResponse, HolderType};
use crate::error::{EntixError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scope grant as the store reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeSpec {
    pub journal_id: Uuid,
    pub holder_type: HolderType,
    pub holder_id: Uuid,
    pub permission: String,
}

/// Rename a permission string between the store and collection vocabularies.
///
/// `to_collections = true` replaces `journals`->`collections` and
/// `entries`->`entities`; `false` applies the inverse. The substitution is
/// deliberately not token-aware: occurrences anywhere in the path are
/// replaced, and external clients depend on that, so do not make it
/// smarter.
pub fn rename_permission(permission: &str, to_collections: bool) -> String {
    if to_collections {
        permission
            .replace("journals", "collections")
            .replace("entries", "entities")
    } else {
        permission
            .replace("collections", "journals")
            .replace("entities", "entries")
    }
}

/// Repackage a scope-list response into the collection permission schema.
///
/// Every scope must belong to the expected collection and holder; a
/// mismatch means the store and this client disagree about what was
/// requested, which is fatal for the response.
pub fn scope_specs_to_permissions(
    collection_id: Uuid,
    holder_type: HolderType,
    holder_id: Uuid,
    scopes: &[ScopeSpec],
) -> Result<CollectionPermissionsResponse> {
    let mut permissions: Vec<String> = Vec::with_capacity(scopes.len());

    for scope in scopes {
        if scope.holder_type != holder_type {
            return Err(EntixError::InconsistentScopeResponse(format!(
                "unexpected holder type {:?} for holder {}",
                scope.holder_type, holder_id
            )));
        }
        if scope.holder_id != holder_id {
            return Err(EntixError::InconsistentScopeResponse(format!(
                "unexpected holder id {}",
                scope.holder_id
            )));
        }
        if scope.journal_id != collection_id {
            return Err(EntixError::InconsistentScopeResponse(format!(
                "scope belongs to collection {}, expected {}",
                scope.journal_id, collection_id
            )));
        }
        permissions.push(rename_permission(&scope.permission, true));
    }

    Ok(CollectionPermissionsResponse {
        collection_id,
        permissions: vec![CollectionPermission {
            holder_type,
            holder_id,
            permissions,
        }],
    })
}
