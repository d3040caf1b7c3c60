//! Table-scoped store primitives.
//!
//! [`StoreClient`] is the only capability the repository needs from the
//! backing store. Items use DynamoDB's native attribute-map representation
//! for every implementation.

pub mod dynamodb;
pub mod inmemory;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use flights_core::storage::{ItemKey, SetMutation, StoreError, StringSet, Table};

pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;

/// One record in the store's attribute-map representation.
pub type Item = HashMap<String, AttributeValue>;

/// Result type for store primitives.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Primitive operations against the backing store.
///
/// Implementations hold one shared connection and are safe for concurrent
/// use. No primitive retries on its own.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Inserts or fully replaces the item at its partition key.
    ///
    /// There is no overwrite guard: the last writer wins.
    async fn put(&self, table: Table, item: Item) -> StoreResult<()>;

    /// Removes the item. Succeeds whether or not the item existed.
    async fn delete_by_key(&self, key: &ItemKey) -> StoreResult<()>;

    /// Gets the item, or `None` if it does not exist.
    async fn get_by_key(&self, key: &ItemKey) -> StoreResult<Option<Item>>;

    /// Returns every item in the table from a single request.
    ///
    /// Results are not paginated, so tables beyond one response page are
    /// truncated.
    async fn scan_all(&self, table: Table) -> StoreResult<Vec<Item>>;

    /// Atomically adds `member` to or removes it from a string set on one
    /// existing item.
    ///
    /// Fails with [`StoreError::ItemNotFound`] if the item does not exist.
    async fn update_set(
        &self,
        set: StringSet,
        key_value: &str,
        mutation: SetMutation,
        member: &str,
    ) -> StoreResult<()>;

    /// Adds `member` to the set. A no-op if it is already present.
    async fn add_to_set(&self, set: StringSet, key_value: &str, member: &str) -> StoreResult<()> {
        self.update_set(set, key_value, SetMutation::Add, member).await
    }

    /// Removes `member` from the set. A no-op if it is absent.
    async fn remove_from_set(
        &self,
        set: StringSet,
        key_value: &str,
        member: &str,
    ) -> StoreResult<()> {
        self.update_set(set, key_value, SetMutation::Remove, member).await
    }
}
