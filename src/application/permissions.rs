//! Collection permission use cases
//!
//! Permission strings cross the boundary in the store vocabulary
//! (journals/entries) and are always handed back to callers in the
//! collection vocabulary (collections/entities).

use crate::domain::entity::{
    AuthScheme, CollectionPermission, CollectionPermissionsResponse, HolderType,
};
use crate::domain::permissions::{rename_permission, scope_specs_to_permissions};
use crate::error::Result;
use crate::infrastructure::JournalClient;
use uuid::Uuid;

pub struct PermissionService<'a> {
    client: &'a JournalClient,
}

impl<'a> PermissionService<'a> {
    pub fn new(client: &'a JournalClient) -> Self {
        PermissionService { client }
    }

    pub fn get(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
    ) -> Result<CollectionPermissionsResponse> {
        let record = self
            .client
            .get_journal_permissions(token, scheme, collection_id)?;

        Ok(CollectionPermissionsResponse {
            collection_id: record.journal_id,
            permissions: record
                .permissions
                .into_iter()
                .map(|holder| CollectionPermission {
                    holder_type: holder.holder_type,
                    holder_id: holder.holder_id,
                    permissions: holder
                        .permissions
                        .iter()
                        .map(|permission| rename_permission(permission, true))
                        .collect(),
                })
                .collect(),
        })
    }

    pub fn update(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        holder_type: HolderType,
        holder_id: Uuid,
        permissions: &[String],
    ) -> Result<CollectionPermissionsResponse> {
        let permission_list = to_store_vocabulary(permissions);
        let response = self.client.update_journal_scopes(
            token,
            scheme,
            collection_id,
            holder_type,
            holder_id,
            &permission_list,
        )?;

        scope_specs_to_permissions(collection_id, holder_type, holder_id, &response.scopes)
    }

    pub fn delete(
        &self,
        token: &str,
        scheme: AuthScheme,
        collection_id: Uuid,
        holder_type: HolderType,
        holder_id: Uuid,
        permissions: &[String],
    ) -> Result<CollectionPermissionsResponse> {
        let permission_list = to_store_vocabulary(permissions);
        let response = self.client.delete_journal_scopes(
            token,
            scheme,
            collection_id,
            holder_type,
            holder_id,
            &permission_list,
        )?;

        scope_specs_to_permissions(collection_id, holder_type, holder_id, &response.scopes)
    }
}

fn to_store_vocabulary(permissions: &[String]) -> Vec<String> {
    permissions
        .iter()
        .map(|permission| rename_permission(permission, false))
        .collect()
}
