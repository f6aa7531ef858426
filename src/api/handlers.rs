//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{parse_employee_id, Employee, EmployeeRecord};
use crate::{Error, Result};

/// Health check, answered only when the store responds
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List every employee in the collection
#[tracing::instrument(skip(state))]
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let records = state.store.list().await?;
    let employees: Vec<Employee> = records.into_iter().map(Employee::from).collect();

    tracing::debug!(count = employees.len(), "listed employees");
    Ok(Json(employees))
}

/// Create an employee; the store assigns the id
#[tracing::instrument(skip(state, payload))]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Employee>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>)> {
    let Json(employee) = payload.map_err(invalid_body)?;
    let record = EmployeeRecord::from(employee);

    let id = state.store.insert(&record).await?;

    // Read back so the response carries the stored form.
    let created = state.store.find_by_id(id).await?.ok_or_else(|| {
        Error::store(format!("inserted employee {} could not be read back", id))
    })?;

    tracing::info!(%id, "created employee");
    Ok((StatusCode::CREATED, Json(Employee::from(created))))
}

/// Replace name, age and salary of an existing employee
#[tracing::instrument(skip(state, payload))]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Employee>, JsonRejection>,
) -> Result<Json<Employee>> {
    let oid = parse_employee_id(&id)?;
    let Json(employee) = payload.map_err(invalid_body)?;

    let matched = state.store.update_fields(oid, &employee.fields()).await?;
    if !matched {
        return Err(Error::not_found(id));
    }

    tracing::info!(%oid, "updated employee");
    Ok(Json(Employee { id, ..employee }))
}

/// Delete a single employee
#[tracing::instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>> {
    let oid = parse_employee_id(&id)?;

    let deleted = state.store.delete(oid).await?;
    if deleted < 1 {
        return Err(Error::not_found(id));
    }

    tracing::info!(%oid, "deleted employee");
    Ok(Json("record deleted"))
}

fn invalid_body(rejection: JsonRejection) -> Error {
    Error::InvalidBody(rejection.body_text())
}
