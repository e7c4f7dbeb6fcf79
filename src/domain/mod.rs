//! Domain layer - Pure mapping and translation core
//!
//! Everything in this layer is a stateless, synchronous transformation over
//! in-memory values: no I/O, no locks, no shared mutable state. Concurrent
//! callers need no coordination.

pub mod address;
pub mod entity;
pub mod mapping;
pub mod permissions;
pub mod search;

pub use entity::{
    AuthScheme, CollectionPermission, CollectionPermissionsResponse, CollectionResponse,
    CollectionsResponse, EntitiesResponse, Entity, EntityResponse, EntitySearchResponse,
    HolderType, JournalEntry,
};
pub use mapping::{entity_to_entry, entry_to_entity, EntryParts};
pub use permissions::{rename_permission, scope_specs_to_permissions, ScopeSpec};
pub use search::to_search_query;
