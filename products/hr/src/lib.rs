//! HR module: employee records and the service that guards their invariants.

mod error;
mod model;
mod service;
mod sea_orm_store;
mod store;

pub use error::{HrError, HrResult};
pub use model::{Employee, EmployeeId, EmployeeRecord, NewEmployee};
pub use sea_orm_store::SeaOrmEmployeeStore;
pub use service::EmployeeService;
pub use store::{EmployeeStore, StoreError, StoreResult};
