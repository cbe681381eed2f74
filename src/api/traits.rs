//! Trait abstraction for the backend client to enable mocking in tests

use super::error::RemoteError;
use crate::state::{ClassOption, Resource};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Trait for school backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolApi: Send + Sync {
    /// Send one create request for `resource` with the form's value map;
    /// returns the created record on success
    async fn create(
        &self,
        resource: Resource,
        payload: Map<String, Value>,
    ) -> Result<Value, RemoteError>;

    /// Fetch the class list used to populate selection fields
    async fn list_classes(&self) -> Result<Vec<ClassOption>, RemoteError>;
}
