//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `flights_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use flights_core::storage::StoreError;

/// Requests that never reached DynamoDB or timed out on the way.
fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<StoreError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Some(StoreError::ConnectionFailed(err.to_string()))
        }
        _ => None,
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => StoreError::TableNotFound(table.to_string()),
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => StoreError::Throttled,
        PutItemError::ItemCollectionSizeLimitExceededException(_) => StoreError::RequestFailed {
            operation: "PutItem",
            message: "Item collection size limit exceeded".to_string(),
        },
        PutItemError::TransactionConflictException(_) => StoreError::RequestFailed {
            operation: "PutItem",
            message: "Transaction conflict, please retry".to_string(),
        },
        err => StoreError::RequestFailed {
            operation: "PutItem",
            message: format!("{:?}", err),
        },
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::TableNotFound(table.to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_)
        | DeleteItemError::RequestLimitExceeded(_) => StoreError::Throttled,
        DeleteItemError::TransactionConflictException(_) => StoreError::RequestFailed {
            operation: "DeleteItem",
            message: "Transaction conflict, please retry".to_string(),
        },
        err => StoreError::RequestFailed {
            operation: "DeleteItem",
            message: format!("{:?}", err),
        },
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => StoreError::TableNotFound(table.to_string()),
        GetItemError::ProvisionedThroughputExceededException(_)
        | GetItemError::RequestLimitExceeded(_) => StoreError::Throttled,
        err => StoreError::RequestFailed {
            operation: "GetItem",
            message: format!("{:?}", err),
        },
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table: &str,
) -> StoreError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => StoreError::TableNotFound(table.to_string()),
        ScanError::ProvisionedThroughputExceededException(_) | ScanError::RequestLimitExceeded(_) => {
            StoreError::Throttled
        }
        err => StoreError::RequestFailed {
            operation: "Scan",
            message: format!("{:?}", err),
        },
    }
}

/// Map an UpdateItem SDK error to StoreError.
///
/// Set updates are guarded by `attribute_exists` on the partition key, so a
/// failed condition means the item is missing.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    table: &str,
    key: impl Into<String>,
) -> StoreError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => StoreError::ItemNotFound {
            table: table.to_string(),
            key: key.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            StoreError::TableNotFound(table.to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_)
        | UpdateItemError::RequestLimitExceeded(_) => StoreError::Throttled,
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::RequestFailed {
                operation: "UpdateItem",
                message: "Item collection size limit exceeded".to_string(),
            }
        }
        UpdateItemError::TransactionConflictException(_) => StoreError::RequestFailed {
            operation: "UpdateItem",
            message: "Transaction conflict, please retry".to_string(),
        },
        err => StoreError::RequestFailed {
            operation: "UpdateItem",
            message: format!("{:?}", err),
        },
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ProvisionedThroughputExceededException,
        RequestLimitExceeded, ResourceNotFoundException,
    };

    use super::*;

    fn update_service_error(err: UpdateItemError) -> SdkError<UpdateItemError, ()> {
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_failed_existence_condition_maps_to_item_not_found() {
        let err = update_service_error(UpdateItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder().build(),
        ));

        assert_eq!(
            map_update_item_error(err, "flights", "XX999"),
            StoreError::ItemNotFound {
                table: "flights".to_string(),
                key: "XX999".to_string(),
            }
        );
    }

    #[test]
    fn test_update_throttling_maps_to_throttled() {
        let throughput = update_service_error(
            UpdateItemError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
        );
        let request_limit = update_service_error(UpdateItemError::RequestLimitExceeded(
            RequestLimitExceeded::builder().build(),
        ));

        assert_eq!(
            map_update_item_error(throughput, "flights", "BA100"),
            StoreError::Throttled
        );
        assert_eq!(
            map_update_item_error(request_limit, "flights", "BA100"),
            StoreError::Throttled
        );
    }

    #[test]
    fn test_update_missing_table_maps_to_table_not_found() {
        let err = update_service_error(UpdateItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        ));

        assert_eq!(
            map_update_item_error(err, "dev-flights", "BA100"),
            StoreError::TableNotFound("dev-flights".to_string())
        );
    }

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let update = SdkError::<UpdateItemError, ()>::timeout_error("request timed out");
        let get = SdkError::<GetItemError, ()>::timeout_error("request timed out");
        let scan = SdkError::<ScanError, ()>::timeout_error("request timed out");

        assert!(matches!(
            map_update_item_error(update, "flights", "BA100"),
            StoreError::ConnectionFailed(_)
        ));
        assert!(matches!(
            map_get_item_error(get, "passengers"),
            StoreError::ConnectionFailed(_)
        ));
        assert!(matches!(
            map_scan_error(scan, "flights"),
            StoreError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_get_and_scan_throttling_maps_to_throttled() {
        let get: SdkError<GetItemError, ()> = SdkError::service_error(
            GetItemError::RequestLimitExceeded(RequestLimitExceeded::builder().build()),
            (),
        );
        let scan: SdkError<ScanError, ()> = SdkError::service_error(
            ScanError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert_eq!(map_get_item_error(get, "passengers"), StoreError::Throttled);
        assert_eq!(map_scan_error(scan, "flights"), StoreError::Throttled);
    }

    #[test]
    fn test_put_and_delete_missing_table_maps_to_table_not_found() {
        let put: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );
        let delete: SdkError<DeleteItemError, ()> = SdkError::service_error(
            DeleteItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_put_item_error(put, "passengers"),
            StoreError::TableNotFound("passengers".to_string())
        );
        assert_eq!(
            map_delete_item_error(delete, "passengers"),
            StoreError::TableNotFound("passengers".to_string())
        );
    }
}
