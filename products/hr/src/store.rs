use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::{Employee, EmployeeId, EmployeeRecord};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's uniqueness constraint rejected the write.
    #[error("email {email} is already stored")]
    Conflict { email: String },
    /// A replace targeted a row that is no longer there.
    #[error("employee {0} is not stored")]
    Missing(EmployeeId),
    #[error("store backend failure")]
    Backend(#[source] DbErr),
}

/// Durable keyed storage for employees.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>>;

    /// First employee (lowest id) with exactly this first and last name.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<Employee>>;

    async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;

    /// All employees in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Employee>>;

    /// Inserts an unsaved record (assigning an id) or replaces a saved one.
    async fn save(&self, record: EmployeeRecord) -> StoreResult<Employee>;

    /// Absent ids are not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<()>;
}
