//! Route handlers. Each one delegates to
//! [`EmployeeCore`](crate::employee::EmployeeCore) and lets [`ApiError`] map
//! failures.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::employee::{CreateEmployeeRequest, Employee};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn get_all_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.core.all_employees().await?))
}

pub async fn get_employees_by_name_search(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.core.employees_by_name_search(&search).await?))
}

pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.core.employee_by_id(&id).await?))
}

pub async fn get_highest_salary(State(state): State<AppState>) -> Result<Json<u64>, ApiError> {
    Ok(Json(state.core.highest_salary().await?))
}

pub async fn get_top_ten_highest_earning_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.core.top_ten_highest_earning_names().await?))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.core.create_employee(&request).await?))
}

/// Responds with the deleted employee's name as plain text.
pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    Ok(state.core.delete_employee_by_id(&id).await?)
}
