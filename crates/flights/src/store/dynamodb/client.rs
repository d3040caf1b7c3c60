//! DynamoDB store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use flights_core::storage::{ItemKey, SetMutation, StringSet, Table, TableNames};

use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::config::Config;
use crate::store::{Item, StoreClient, StoreResult};

/// DynamoDB-backed store.
///
/// Wraps a single SDK client. The client is cheap to clone and safe to share
/// between concurrent callers; build one at startup and inject it.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    tables: TableNames,
}

impl DynamoDbStore {
    /// Creates a store from an existing client and table names.
    pub fn new(client: Client, tables: TableNames) -> Self {
        Self { client, tables }
    }

    /// Creates a store from configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint (e.g. local DynamoDB).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(endpoint = %config.target_display(), "DynamoDB client initialised");

        Self::new(Client::new(&sdk_config), config.tables.clone())
    }

    fn table_name(&self, table: Table) -> &str {
        self.tables.name(table)
    }
}

#[async_trait]
impl StoreClient for DynamoDbStore {
    async fn put(&self, table: Table, item: Item) -> StoreResult<()> {
        let table_name = self.table_name(table);

        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table_name))?;

        Ok(())
    }

    async fn delete_by_key(&self, key: &ItemKey) -> StoreResult<()> {
        let table_name = self.table_name(key.table);

        self.client
            .delete_item()
            .table_name(table_name)
            .key(key.key_name(), AttributeValue::S(key.value.clone()))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, table_name))?;

        Ok(())
    }

    async fn get_by_key(&self, key: &ItemKey) -> StoreResult<Option<Item>> {
        let table_name = self.table_name(key.table);

        let result = self
            .client
            .get_item()
            .table_name(table_name)
            .key(key.key_name(), AttributeValue::S(key.value.clone()))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, table_name))?;

        Ok(result.item)
    }

    async fn scan_all(&self, table: Table) -> StoreResult<Vec<Item>> {
        let table_name = self.table_name(table);

        let result = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_scan_error(e, table_name))?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = table_name,
                "Scan returned a partial result; remaining pages are not read"
            );
        }

        Ok(result.items.unwrap_or_default())
    }

    async fn update_set(
        &self,
        set: StringSet,
        key_value: &str,
        mutation: SetMutation,
        member: &str,
    ) -> StoreResult<()> {
        let key = set.key(key_value);
        let table_name = self.table_name(key.table);
        tracing::trace!(
            table = table_name,
            key = %key,
            operation = mutation.operation(),
            "Updating string set"
        );

        self.client
            .update_item()
            .table_name(table_name)
            .key(key.key_name(), AttributeValue::S(key.value.clone()))
            .update_expression(mutation.update_expression())
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", key.key_name())
            .expression_attribute_names("#0", set.attribute)
            .expression_attribute_values(":0", AttributeValue::Ss(vec![member.to_string()]))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, table_name, key.value.clone()))?;

        Ok(())
    }
}
