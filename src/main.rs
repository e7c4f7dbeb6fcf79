use clap::Parser;
use entix::application::{
    load_entities, CollectionService, EntityService, ImportOptions, PermissionService,
    SearchOptions, SearchService,
};
use entix::cli::{
    format_collection_list, format_search_summary, to_pretty_json, Cli, Commands,
};
use entix::cli::commands::{CollectionsCommands, EntitiesCommands, PermissionsCommands};
use entix::domain::entity::{AuthScheme, Entity, HolderType};
use entix::error::{EntixError, Result};
use entix::infrastructure::{Config, JournalClient, Reporter};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env("ENTIX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let token = cli
        .token
        .or_else(|| std::env::var("ENTIX_TOKEN").ok())
        .ok_or_else(|| EntixError::Config("No access token provided".to_string()))?;
    let scheme = AuthScheme::from_str(&cli.auth_type).map_err(EntixError::Config)?;

    let mut config = Config::from_env(cli.api_url.as_deref())?;
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let client = JournalClient::new(&config)?;
    let reporter = Reporter::from_config(&config);

    match cli.command {
        Commands::Collections { command } => {
            let service = CollectionService::new(&client);
            match command {
                CollectionsCommands::Create { name } => {
                    let response = service.create(&token, scheme, &name)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                CollectionsCommands::List => {
                    let response = service.list(&token, scheme)?;
                    print!("{}", format_collection_list(&response));
                }
                CollectionsCommands::Delete { collection_id } => {
                    let response = service.delete(&token, scheme, collection_id)?;
                    println!("{}", to_pretty_json(&response)?);
                }
            }
        }
        Commands::Entities { command } => {
            let service = EntityService::new(&client, &reporter);
            match command {
                EntitiesCommands::Create {
                    collection_id,
                    address,
                    blockchain,
                    name,
                    required_field,
                    secondary_field,
                } => {
                    let entity =
                        build_entity(&address, &blockchain, &name, &required_field, &secondary_field)?;
                    let response = service.add(&token, scheme, collection_id, &entity)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                EntitiesCommands::Bulk {
                    collection_id,
                    blockchain,
                    input,
                    required_field,
                    secondary_field,
                } => {
                    let options = ImportOptions {
                        blockchain,
                        required_fields: parse_required_fields(&required_field)?,
                        secondary_fields: parse_secondary_fields(&secondary_field)?,
                    };
                    let entities = load_entities(&input, &options)?;
                    let response = service.add_bulk(&token, scheme, collection_id, &entities)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                EntitiesCommands::Get {
                    collection_id,
                    entity_id,
                } => {
                    let response = service.get(&token, scheme, collection_id, entity_id)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                EntitiesCommands::Update {
                    collection_id,
                    entity_id,
                    address,
                    blockchain,
                    name,
                    required_field,
                    secondary_field,
                } => {
                    let entity =
                        build_entity(&address, &blockchain, &name, &required_field, &secondary_field)?;
                    let response =
                        service.update(&token, scheme, collection_id, entity_id, &entity)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                EntitiesCommands::List { collection_id } => {
                    let response = service.list(&token, scheme, collection_id)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                EntitiesCommands::Delete {
                    collection_id,
                    entity_id,
                } => {
                    let response = service.delete(&token, scheme, collection_id, entity_id)?;
                    println!("{}", to_pretty_json(&response)?);
                }
            }
        }
        Commands::Permissions { command } => {
            let service = PermissionService::new(&client);
            match command {
                PermissionsCommands::Get { collection_id } => {
                    let response = service.get(&token, scheme, collection_id)?;
                    println!("{}", to_pretty_json(&response)?);
                }
                PermissionsCommands::Update {
                    collection_id,
                    holder_type,
                    holder_id,
                    permission,
                } => {
                    let holder_type =
                        HolderType::from_str(&holder_type).map_err(EntixError::Config)?;
                    let response = service.update(
                        &token,
                        scheme,
                        collection_id,
                        holder_type,
                        holder_id,
                        &permission,
                    )?;
                    println!("{}", to_pretty_json(&response)?);
                }
                PermissionsCommands::Delete {
                    collection_id,
                    holder_type,
                    holder_id,
                    permission,
                } => {
                    let holder_type =
                        HolderType::from_str(&holder_type).map_err(EntixError::Config)?;
                    let response = service.delete(
                        &token,
                        scheme,
                        collection_id,
                        holder_type,
                        holder_id,
                        &permission,
                    )?;
                    println!("{}", to_pretty_json(&response)?);
                }
            }
        }
        Commands::Search {
            collection_id,
            required_field,
            secondary_field,
            filter,
            limit,
            offset,
            no_content,
        } => {
            let service = SearchService::new(&client);
            let options = SearchOptions {
                required_fields: required_field,
                secondary_fields: secondary_field,
                filters: filter,
                limit,
                offset,
                content: !no_content,
            };
            let response = service.search(&token, scheme, collection_id, &options)?;
            eprintln!("{}", format_search_summary(&response));
            println!("{}", to_pretty_json(&response)?);
        }
    }

    Ok(())
}

fn build_entity(
    address: &str,
    blockchain: &str,
    name: &str,
    required_fields: &[String],
    secondary_fields: &[String],
) -> Result<Entity> {
    let mut entity = Entity::new(address, blockchain, name);
    entity.required_fields = parse_required_fields(required_fields)?;
    entity.extra = parse_secondary_fields(secondary_fields)?;
    Ok(entity)
}

/// Parse repeated `--required-field` JSON objects, keeping input order
fn parse_required_fields(raw: &[String]) -> Result<Vec<Map<String, Value>>> {
    raw.iter()
        .map(|field| {
            let value: Value = serde_json::from_str(field).map_err(|e| {
                EntixError::Config(format!("Invalid required field JSON '{}': {}", field, e))
            })?;
            value.as_object().cloned().ok_or_else(|| {
                EntixError::Config(format!("Required field must be a JSON object: {}", field))
            })
        })
        .collect()
}

/// Parse repeated `--secondary-field` JSON objects and flatten them into
/// one mapping; later objects win on key collisions
fn parse_secondary_fields(raw: &[String]) -> Result<Map<String, Value>> {
    let mut merged = Map::new();
    for field in raw {
        let value: Value = serde_json::from_str(field).map_err(|e| {
            EntixError::Config(format!("Invalid secondary field JSON '{}': {}", field, e))
        })?;
        let object = value.as_object().ok_or_else(|| {
            EntixError::Config(format!("Secondary field must be a JSON object: {}", field))
        })?;
        for (key, value) in object {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}
