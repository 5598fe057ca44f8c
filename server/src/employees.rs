//! `/api/employees` handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use platform_api::{ApiError, ApiResult};
use products_hr::{Employee, EmployeeId, HrError, NewEmployee};

use crate::http::AppState;

const DELETED_MESSAGE: &str = "Employee deleted successfully!";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/employees", post(create_employee).get(list_employees))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

fn api_error(err: HrError) -> ApiError {
    match err {
        HrError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
        HrError::NotFound(_) => ApiError::NotFound,
        HrError::Store(store) => ApiError::internal(store),
    }
}

fn body(payload: Result<Json<NewEmployee>, JsonRejection>) -> ApiResult<NewEmployee> {
    payload
        .map(|Json(employee)| employee)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let created = state
        .employees
        .create(body(payload)?)
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employees.list().await.map_err(api_error)?;
    Ok(Json(employees))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    state
        .employees
        .get_by_id(EmployeeId::new(id))
        .await
        .map_err(api_error)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let updated = state
        .employees
        .update(EmployeeId::new(id), body(payload)?)
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(updated)))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<(StatusCode, &'static str)> {
    state
        .employees
        .delete(EmployeeId::new(id))
        .await
        .map_err(api_error)?;
    Ok((StatusCode::NO_CONTENT, DELETED_MESSAGE))
}
