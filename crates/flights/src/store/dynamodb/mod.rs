//! DynamoDB store implementation.
//!
//! Implements [`StoreClient`](crate::store::StoreClient) on top of
//! `aws-sdk-dynamodb`.

mod client;
mod error;

pub use client::DynamoDbStore;
