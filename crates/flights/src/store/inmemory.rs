//! In-memory store for testing.
//!
//! Stores every table in a `HashMap` wrapped in `Arc<RwLock<_>>` and mirrors
//! the DynamoDB behaviour the repository depends on: idempotent deletes,
//! string-set add/remove, empty sets dropped from the item, and set updates
//! rejected when the target item does not exist.
//!
//! # Example
//!
//! ```rust,ignore
//! use flights::store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Seed flights with `store.put(Table::Flights, item)` and test against it...
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use flights_core::storage::{ItemKey, SetMutation, StoreError, StringSet, Table};

use super::{Item, StoreClient, StoreResult};

/// In-memory store backend for testing.
///
/// Data is not persisted and will be lost when the store is dropped. Clones
/// share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<Table, HashMap<String, Item>>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently held in a table.
    pub async fn item_count(&self, table: Table) -> usize {
        let tables = self.tables.read().await;
        tables.get(&table).map_or(0, HashMap::len)
    }
}

/// Extracts the partition key value of an item being written.
fn partition_key_value(table: Table, item: &Item) -> StoreResult<String> {
    let key_name = table.partition_key();
    match item.get(key_name).and_then(|v| v.as_s().ok()) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(StoreError::RequestFailed {
            operation: "PutItem",
            message: format!("Missing or empty key attribute: {}", key_name),
        }),
    }
}

/// Applies a set mutation to one item, following DynamoDB's `ADD`/`DELETE`
/// semantics for string sets.
fn apply_set_mutation(
    item: &mut Item,
    attribute: &str,
    mutation: SetMutation,
    member: &str,
) -> StoreResult<()> {
    let type_mismatch = || StoreError::RequestFailed {
        operation: "UpdateItem",
        message: format!("Attribute {} is not a string set", attribute),
    };

    match mutation {
        SetMutation::Add => match item.get_mut(attribute) {
            Some(AttributeValue::Ss(members)) => {
                if !members.iter().any(|m| m == member) {
                    members.push(member.to_string());
                }
            }
            Some(_) => return Err(type_mismatch()),
            None => {
                item.insert(
                    attribute.to_string(),
                    AttributeValue::Ss(vec![member.to_string()]),
                );
            }
        },
        SetMutation::Remove => match item.get_mut(attribute) {
            Some(AttributeValue::Ss(members)) => {
                members.retain(|m| m != member);
                // The store never keeps empty sets.
                if members.is_empty() {
                    item.remove(attribute);
                }
            }
            Some(_) => return Err(type_mismatch()),
            None => {}
        },
    }

    Ok(())
}

#[async_trait]
impl StoreClient for InMemoryStore {
    async fn put(&self, table: Table, item: Item) -> StoreResult<()> {
        let key = partition_key_value(table, &item)?;
        let mut tables = self.tables.write().await;
        tables.entry(table).or_default().insert(key, item);
        Ok(())
    }

    async fn delete_by_key(&self, key: &ItemKey) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(items) = tables.get_mut(&key.table) {
            items.remove(&key.value);
        }
        Ok(())
    }

    async fn get_by_key(&self, key: &ItemKey) -> StoreResult<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&key.table)
            .and_then(|items| items.get(&key.value))
            .cloned())
    }

    async fn scan_all(&self, table: Table) -> StoreResult<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update_set(
        &self,
        set: StringSet,
        key_value: &str,
        mutation: SetMutation,
        member: &str,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let item = tables
            .get_mut(&set.table)
            .and_then(|items| items.get_mut(key_value))
            .ok_or_else(|| StoreError::ItemNotFound {
                table: set.table.default_name().to_string(),
                key: key_value.to_string(),
            })?;

        apply_set_mutation(item, set.attribute, mutation, member)
    }
}
