use products_hr::{EmployeeService, EmployeeStore, HrError, HrResult, NewEmployee};
use tracing::{debug, info};

fn fixtures() -> Vec<NewEmployee> {
    vec![
        NewEmployee::new("Matt", "Random", "test@gmail.com"),
        NewEmployee::new("Matheus", "Siegmund", "random@gmail.com"),
        NewEmployee::new("Request", "Request", "request@gmail.com"),
    ]
}

/// Inserts the fixture employees, skipping emails that are already taken.
/// Returns how many were inserted.
pub async fn seed_employees<S: EmployeeStore>(service: &EmployeeService<S>) -> HrResult<usize> {
    let mut inserted = 0;
    for employee in fixtures() {
        match service.create(employee).await {
            Ok(created) => {
                debug!(employee_id = %created.id, "seeded employee");
                inserted += 1;
            }
            Err(HrError::DuplicateEmail(email)) => debug!(%email, "seed fixture already present"),
            Err(err) => return Err(err),
        }
    }
    info!(inserted, "seed complete");
    Ok(inserted)
}
