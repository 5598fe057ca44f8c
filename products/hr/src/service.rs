use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeId, EmployeeRecord, NewEmployee},
    store::EmployeeStore,
};

/// Enforces employee invariants on top of an [`EmployeeStore`].
///
/// Holds no state of its own; every operation is one or two store calls and
/// store failures are passed through unchanged.
pub struct EmployeeService<S> {
    store: Arc<S>,
}

impl<S> Clone for EmployeeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EmployeeStore> EmployeeService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persists a new employee unless another one already has its email.
    ///
    /// The lookup and the insert are separate store calls; two concurrent
    /// creates with the same email are only kept apart by the store's own
    /// uniqueness constraint, which also surfaces as
    /// [`HrError::DuplicateEmail`].
    #[instrument(skip_all)]
    pub async fn create(&self, employee: NewEmployee) -> HrResult<Employee> {
        if self.store.find_by_email(&employee.email).await?.is_some() {
            warn!("rejected employee with duplicate email");
            return Err(HrError::DuplicateEmail(employee.email));
        }
        let saved = self.store.save(EmployeeRecord::Unsaved(employee)).await?;
        info!(employee_id = %saved.id, "employee created");
        Ok(saved)
    }

    #[instrument(skip_all)]
    pub async fn list(&self) -> HrResult<Vec<Employee>> {
        let employees = self.store.find_all().await?;
        debug!(count = employees.len(), "employees listed");
        Ok(employees)
    }

    /// Absence is a normal outcome here; see [`Self::get_by_id_or_fail`].
    #[instrument(skip_all, fields(employee_id = %id))]
    pub async fn get_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>> {
        Ok(self.store.find_by_id(id).await?)
    }

    #[instrument(skip_all, fields(employee_id = %id))]
    pub async fn get_by_id_or_fail(&self, id: EmployeeId) -> HrResult<Employee> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(HrError::NotFound(id))
    }

    /// Replaces every field but the id. The new email is not checked against
    /// other employees here.
    #[instrument(skip_all, fields(employee_id = %id))]
    pub async fn update(&self, id: EmployeeId, patch: NewEmployee) -> HrResult<Employee> {
        let current = self.get_by_id_or_fail(id).await?;
        let replacement = current.replaced_with(patch);
        let saved = self.store.save(EmployeeRecord::Saved(replacement)).await?;
        info!("employee updated");
        Ok(saved)
    }

    /// Deleting an unknown id succeeds silently.
    #[instrument(skip_all, fields(employee_id = %id))]
    pub async fn delete(&self, id: EmployeeId) -> HrResult<()> {
        self.store.delete_by_id(id).await?;
        info!("employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sea_orm::DbErr;

    use super::*;
    use crate::store::{StoreError, StoreResult};

    #[derive(Default)]
    struct RecordingStore {
        rows: Mutex<Vec<Employee>>,
        next_id: Mutex<i64>,
        saves: Mutex<Vec<EmployeeRecord>>,
        fail_reads: bool,
    }

    impl RecordingStore {
        fn seeded(rows: Vec<Employee>) -> Self {
            let next = rows.iter().map(|row| row.id.get()).max().unwrap_or(0);
            Self {
                rows: Mutex::new(rows),
                next_id: Mutex::new(next),
                ..Self::default()
            }
        }

        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EmployeeStore for RecordingStore {
        async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>> {
            if self.fail_reads {
                return Err(StoreError::Backend(DbErr::Custom("store offline".into())));
            }
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|row| row.email == email).cloned())
        }

        async fn find_by_name(
            &self,
            first_name: &str,
            last_name: &str,
        ) -> StoreResult<Option<Employee>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|row| row.first_name == first_name && row.last_name == last_name)
                .cloned())
        }

        async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|row| row.id == id).cloned())
        }

        async fn find_all(&self) -> StoreResult<Vec<Employee>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn save(&self, record: EmployeeRecord) -> StoreResult<Employee> {
            self.saves.lock().unwrap().push(record.clone());
            let mut rows = self.rows.lock().unwrap();
            match record {
                EmployeeRecord::Unsaved(new) => {
                    let mut next = self.next_id.lock().unwrap();
                    *next += 1;
                    let saved = Employee::from_parts(EmployeeId::new(*next), new);
                    rows.push(saved.clone());
                    Ok(saved)
                }
                EmployeeRecord::Saved(employee) => {
                    let slot = rows
                        .iter_mut()
                        .find(|row| row.id == employee.id)
                        .ok_or(StoreError::Missing(employee.id))?;
                    *slot = employee.clone();
                    Ok(employee)
                }
            }
        }

        async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<()> {
            self.rows.lock().unwrap().retain(|row| row.id != id);
            Ok(())
        }
    }

    fn matt() -> NewEmployee {
        NewEmployee::new("Matt", "Random", "test@gmail.com")
    }

    fn service(store: RecordingStore) -> (EmployeeService<RecordingStore>, Arc<RecordingStore>) {
        let store = Arc::new(store);
        (EmployeeService::new(Arc::clone(&store)), store)
    }

    #[tokio::test]
    async fn create_assigns_id() {
        let (service, store) = service(RecordingStore::default());
        let created = service.create(matt()).await.unwrap();
        assert_eq!(created.id, EmployeeId::new(1));
        assert_eq!(created.fields(), matt());
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_never_reaches_save() {
        let existing = Employee::from_parts(EmployeeId::new(1), matt());
        let (service, store) = service(RecordingStore::seeded(vec![existing]));

        let err = service
            .create(NewEmployee::new("Other", "Person", "test@gmail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, HrError::DuplicateEmail(ref email) if email == "test@gmail.com"));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn list_returns_store_contents() {
        let rows = vec![
            Employee::from_parts(EmployeeId::new(1), matt()),
            Employee::from_parts(
                EmployeeId::new(2),
                NewEmployee::new("Matheus", "Siegmund", "random@gmail.com"),
            ),
        ];
        let (service, _) = service(RecordingStore::seeded(rows.clone()));
        assert_eq!(service.list().await.unwrap(), rows);
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty() {
        let (service, _) = service(RecordingStore::default());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_id_reports_absence_without_error() {
        let (service, _) = service(RecordingStore::default());
        assert_eq!(service.get_by_id(EmployeeId::new(42)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn strict_lookup_fails_with_not_found() {
        let (service, _) = service(RecordingStore::default());
        let err = service
            .get_by_id_or_fail(EmployeeId::new(42))
            .await
            .unwrap_err();
        assert!(matches!(err, HrError::NotFound(id) if id == EmployeeId::new(42)));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let existing = Employee::from_parts(EmployeeId::new(5), matt());
        let (service, store) = service(RecordingStore::seeded(vec![existing]));
        let patch = NewEmployee::new("Request", "Request", "request@gmail.com");

        let updated = service.update(EmployeeId::new(5), patch.clone()).await.unwrap();

        assert_eq!(updated.id, EmployeeId::new(5));
        assert_eq!(updated.fields(), patch);
        assert_eq!(
            store.saves.lock().unwrap().as_slice(),
            &[EmployeeRecord::Saved(updated.clone())]
        );
    }

    #[tokio::test]
    async fn update_of_unknown_id_does_not_write() {
        let (service, store) = service(RecordingStore::default());
        let err = service
            .update(EmployeeId::new(9), matt())
            .await
            .unwrap_err();
        assert!(matches!(err, HrError::NotFound(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn delete_twice_is_fine() {
        let existing = Employee::from_parts(EmployeeId::new(1), matt());
        let (service, _) = service(RecordingStore::seeded(vec![existing]));

        service.delete(EmployeeId::new(1)).await.unwrap();
        service.delete(EmployeeId::new(1)).await.unwrap();

        assert_eq!(service.get_by_id(EmployeeId::new(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let (service, store) = service(RecordingStore {
            fail_reads: true,
            ..RecordingStore::default()
        });
        let err = service.create(matt()).await.unwrap_err();
        assert!(matches!(err, HrError::Store(StoreError::Backend(_))));
        assert_eq!(store.save_count(), 0);
    }
}
