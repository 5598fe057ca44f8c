use thiserror::Error;

use crate::{model::EmployeeId, store::StoreError};

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("employee already exists with email {0}")]
    DuplicateEmail(String),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for HrError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { email } => HrError::DuplicateEmail(email),
            StoreError::Missing(id) => HrError::NotFound(id),
            other => HrError::Store(other),
        }
    }
}
