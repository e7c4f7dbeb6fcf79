//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "entix")]
#[command(about = "Collections and entities over a journal document store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Access token for the journal store (or ENTIX_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Authentication scheme (bearer, web3)
    #[arg(long, global = true, default_value = "bearer")]
    pub auth_type: String,

    /// Journal store API URL (overrides ENTIX_JOURNAL_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage entity collections
    Collections {
        #[command(subcommand)]
        command: CollectionsCommands,
    },

    /// Manage entities inside a collection
    Entities {
        #[command(subcommand)]
        command: EntitiesCommands,
    },

    /// Manage collection permissions
    Permissions {
        #[command(subcommand)]
        command: PermissionsCommands,
    },

    /// Search entities in a collection
    Search {
        /// Collection to search
        #[arg(short, long)]
        collection_id: Uuid,

        /// Required field to match as a tag clause, repeatable
        #[arg(short, long)]
        required_field: Vec<String>,

        /// Free-text fragment, repeatable
        #[arg(short, long)]
        secondary_field: Vec<String>,

        /// Store-side filter, repeatable
        #[arg(long)]
        filter: Vec<String>,

        #[arg(long, default_value_t = 10)]
        limit: usize,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Skip entry content in results
        #[arg(long)]
        no_content: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CollectionsCommands {
    /// Create a collection
    Create {
        /// Name of the collection
        #[arg(short, long)]
        name: String,
    },

    /// List all collections the token can see
    List,

    /// Delete a collection
    Delete {
        #[arg(short, long)]
        collection_id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntitiesCommands {
    /// Create an entity
    Create {
        #[arg(short, long)]
        collection_id: Uuid,

        /// Blockchain account address
        #[arg(short, long)]
        address: String,

        /// Chain name
        #[arg(short, long)]
        blockchain: String,

        /// Human label for the entity
        #[arg(short, long)]
        name: String,

        /// Required field as a single-key JSON object, repeatable
        #[arg(short, long)]
        required_field: Vec<String>,

        /// Secondary field as a JSON object, repeatable
        #[arg(short, long)]
        secondary_field: Vec<String>,
    },

    /// Create a pack of entities from a CSV file
    Bulk {
        #[arg(short, long)]
        collection_id: Uuid,

        /// Chain name applied to every row
        #[arg(short, long)]
        blockchain: String,

        /// Input CSV file (address and name columns required)
        #[arg(short, long)]
        input: PathBuf,

        /// Required field as a single-key JSON object, repeatable
        #[arg(short, long)]
        required_field: Vec<String>,

        /// Secondary field as a JSON object, repeatable
        #[arg(short, long)]
        secondary_field: Vec<String>,
    },

    /// Get an entity by id
    Get {
        #[arg(short, long)]
        collection_id: Uuid,

        #[arg(short, long)]
        entity_id: Uuid,
    },

    /// Replace an entity's fields
    Update {
        #[arg(short, long)]
        collection_id: Uuid,

        #[arg(short, long)]
        entity_id: Uuid,

        #[arg(short, long)]
        address: String,

        #[arg(short, long)]
        blockchain: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        required_field: Vec<String>,

        #[arg(short, long)]
        secondary_field: Vec<String>,
    },

    /// List all entities in a collection
    List {
        #[arg(short, long)]
        collection_id: Uuid,
    },

    /// Delete an entity
    Delete {
        #[arg(short, long)]
        collection_id: Uuid,

        #[arg(short, long)]
        entity_id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum PermissionsCommands {
    /// Show permission grants on a collection
    Get {
        #[arg(short, long)]
        collection_id: Uuid,
    },

    /// Grant permissions to a holder
    Update {
        #[arg(short, long)]
        collection_id: Uuid,

        /// Holder type (user, group, token)
        #[arg(long)]
        holder_type: String,

        #[arg(long)]
        holder_id: Uuid,

        /// Permission string, repeatable
        #[arg(short, long)]
        permission: Vec<String>,
    },

    /// Revoke permissions from a holder
    Delete {
        #[arg(short, long)]
        collection_id: Uuid,

        /// Holder type (user, group, token)
        #[arg(long)]
        holder_type: String,

        #[arg(long)]
        holder_id: Uuid,

        /// Permission string, repeatable
        #[arg(short, long)]
        permission: Vec<String>,
    },
}
