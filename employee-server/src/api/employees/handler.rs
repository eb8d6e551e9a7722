//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeId, EmployeeResponse, EmployeeUpdate};
use crate::db::repository::Repository;
use crate::utils::{AppError, AppResult, Validate};

/// List all employees
///
/// An empty store is a 200 with an empty sequence, not a 404.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.find_all();
    Ok(Json(employees.iter().map(EmployeeResponse::from).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<EmployeeId>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.find_by_id(id).ok_or(AppError::NotFound)?;
    Ok(Json(EmployeeResponse::from(&employee)))
}

/// Create a new employee
///
/// Responds 201 with a `Location` header carrying the assigned id. The
/// body echoes the request payload, which never contains the id; clients
/// read it from the header.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<impl IntoResponse> {
    let report = payload.validate();
    if !report.is_valid() {
        return Err(AppError::Validation(report));
    }

    let employee = state.employees.create(payload.clone());
    tracing::info!(id = employee.id, "employee created");

    let location = format!("/employees/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(payload),
    ))
}

/// Update an employee's contact fields
///
/// The existence pre-check is load-bearing: the repository treats an
/// update against an unknown id as a caller bug, so the 404 must be
/// decided here.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<EmployeeId>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if state.employees.find_by_id(id).is_none() {
        return Err(AppError::NotFound);
    }

    let employee = state.employees.update(id, payload)?;
    Ok(Json(employee))
}
