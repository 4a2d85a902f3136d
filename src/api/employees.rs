use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::IntoParams;

use super::response::json_ok;
use crate::error::AppError;
use crate::model::employee::EmployeeInput;
use crate::service::RosterService;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterReadAction {
    #[default]
    List,
    Get,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeesQuery {
    /// `list` (default) or `get`
    #[serde(default)]
    #[param(value_type = Option<String>, example = "list")]
    pub action: RosterReadAction,
    /// Required for `get`
    pub id: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EmployeeCommand {
    Create { employee: EmployeeInput },
    Update { id: u64, employee: EmployeeInput },
    Delete { id: u64 },
}

/// List the roster or fetch one employee
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeesQuery),
    responses(
        (status = 200, description = "Roster", body = Object, example = json!({
            "success": true,
            "employees": [{
                "id": 1,
                "last_name": "Petrova",
                "first_name": "Anna",
                "middle_name": null,
                "position": "Software engineer",
                "status": "active"
            }]
        })),
        (status = 400, description = "Unknown action or missing id"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Employee"
)]
#[instrument(name = "employees_read", skip(service, query), fields(id = ?query.id))]
pub async fn get_employees(
    service: web::Data<RosterService>,
    query: web::Query<EmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let EmployeesQuery { action, id } = query.into_inner();

    match action {
        RosterReadAction::List => {
            let employees = service.list().await?;
            Ok(json_ok(json!({
                "success": true,
                "employees": employees,
            })))
        }
        RosterReadAction::Get => {
            let id = id.ok_or_else(|| AppError::validation("id is required"))?;
            let employee = service.get(id).await?;
            Ok(json_ok(json!({
                "success": true,
                "employee": employee,
            })))
        }
    }
}

/// Create, update or delete an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body(
        content = Object,
        description = "`create`: employee. `update`: id, employee. `delete`: id.",
        content_type = "application/json",
        example = json!({
            "action": "create",
            "employee": {
                "last_name": "Petrova",
                "first_name": "Anna",
                "position": "Software engineer",
                "rank": "Lieutenant",
                "department": "Development"
            }
        })
    ),
    responses(
        (status = 200, description = "Action applied", body = Object, example = json!({
            "success": true,
            "id": 7
        })),
        (status = 400, description = "Unknown action or malformed body"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Employee"
)]
#[instrument(name = "employees_command", skip(service, body))]
pub async fn post_employees(
    service: web::Data<RosterService>,
    body: web::Json<EmployeeCommand>,
) -> Result<HttpResponse, AppError> {
    match body.into_inner() {
        EmployeeCommand::Create { employee } => {
            let id = service.create(employee).await?;
            Ok(json_ok(json!({ "success": true, "id": id })))
        }
        EmployeeCommand::Update { id, employee } => {
            service.update(id, employee).await?;
            Ok(json_ok(json!({ "success": true })))
        }
        EmployeeCommand::Delete { id } => {
            service.delete(id).await?;
            Ok(json_ok(json!({ "success": true })))
        }
    }
}
