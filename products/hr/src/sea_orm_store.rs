use async_trait::async_trait;
use entity::employees;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::debug;

use crate::{
    model::{Employee, EmployeeId, EmployeeRecord},
    store::{EmployeeStore, StoreError, StoreResult},
};

/// [`EmployeeStore`] over the `employees` table.
#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeStore {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn write_error(err: DbErr, email: &str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            debug!(%detail, "unique constraint rejected write");
            StoreError::Conflict {
                email: email.to_string(),
            }
        }
        _ => StoreError::Backend(err),
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>> {
        let found = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(StoreError::Backend)?;
        Ok(found.map(Employee::from))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<Employee>> {
        let found = employees::Entity::find()
            .filter(
                employees::Column::FirstName
                    .eq(first_name)
                    .and(employees::Column::LastName.eq(last_name)),
            )
            .order_by_asc(employees::Column::Id)
            .one(&self.db)
            .await
            .map_err(StoreError::Backend)?;
        Ok(found.map(Employee::from))
    }

    async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        let found = employees::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .map_err(StoreError::Backend)?;
        Ok(found.map(Employee::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .map_err(StoreError::Backend)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn save(&self, record: EmployeeRecord) -> StoreResult<Employee> {
        let email = record.email().to_string();
        match record {
            EmployeeRecord::Unsaved(new) => {
                let model = employees::ActiveModel {
                    id: NotSet,
                    first_name: Set(new.first_name),
                    last_name: Set(new.last_name),
                    email: Set(new.email),
                };
                let inserted = model
                    .insert(&self.db)
                    .await
                    .map_err(|err| write_error(err, &email))?;
                Ok(inserted.into())
            }
            EmployeeRecord::Saved(employee) => {
                let id = employee.id;
                let model = employees::ActiveModel {
                    id: Set(id.get()),
                    first_name: Set(employee.first_name),
                    last_name: Set(employee.last_name),
                    email: Set(employee.email),
                };
                let updated = model.update(&self.db).await.map_err(|err| match err {
                    DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::Missing(id),
                    other => write_error(other, &email),
                })?;
                Ok(updated.into())
            }
        }
    }

    async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<()> {
        let result = employees::Entity::delete_by_id(id.get())
            .exec(&self.db)
            .await
            .map_err(StoreError::Backend)?;
        debug!(employee_id = %id, rows = result.rows_affected, "delete executed");
        Ok(())
    }
}
