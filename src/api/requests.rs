use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::IntoParams;

use super::blank_as_none;
use super::response::json_ok;
use crate::error::AppError;
use crate::model::request::{NewRequestGroup, RequestStatus, UpdateGroupStatus};
use crate::service::RequestAggregationService;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadAction {
    #[default]
    List,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequestsQuery {
    /// Only `list` is served; defaults to `list`
    #[serde(default)]
    #[param(value_type = Option<String>, example = "list")]
    pub action: ReadAction,
    /// Keep only groups in this status
    #[serde(default, deserialize_with = "blank_as_none")]
    #[param(value_type = Option<String>, example = "pending")]
    pub status: Option<RequestStatus>,
}

/// Body of `POST /requests`, selected by its `action` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RequestCommand {
    Create(NewRequestGroup),
    UpdateStatus(UpdateGroupStatus),
}

/// List request groups, newest first
#[utoipa::path(
    get,
    path = "/api/requests",
    params(RequestsQuery),
    responses(
        (status = 200, description = "Request groups", body = Object, example = json!({
            "success": true,
            "requests": [{
                "id": 41,
                "request_group_id": "group_4f1c2a9e0b7d4c3e8a5f6b1d2c3e4f5a",
                "request_type": "ibd-r",
                "request_category": "systems",
                "status": "pending",
                "notes": "",
                "created_at": "2026-01-01T09:00:00Z",
                "updated_at": "2026-01-01T09:00:00Z",
                "approved_at": null,
                "employees": [{ "id": 1, "last_name": "Petrova", "first_name": "Anna" }]
            }]
        })),
        (status = 400, description = "Unknown action or status"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Requests"
)]
#[instrument(name = "requests_list", skip(service, query), fields(status = ?query.status))]
pub async fn get_requests(
    service: web::Data<RequestAggregationService>,
    query: web::Query<RequestsQuery>,
) -> Result<HttpResponse, AppError> {
    let RequestsQuery { action, status } = query.into_inner();

    match action {
        ReadAction::List => {
            let requests = service.list(status).await?;
            Ok(json_ok(json!({
                "success": true,
                "requests": requests,
            })))
        }
    }
}

/// Create a request group or change its status
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body(
        content = Object,
        description = "`create`: employee_ids, request_type, request_category, notes. \
                       `update_status`: request_group_id, status.",
        content_type = "application/json",
        example = json!({
            "action": "create",
            "employee_ids": [1, 2],
            "request_type": "ibd-r",
            "request_category": "systems",
            "notes": ""
        })
    ),
    responses(
        (status = 200, description = "Action applied", body = Object, example = json!({
            "success": true,
            "message": "Created requests: 2",
            "request_group_id": "group_4f1c2a9e0b7d4c3e8a5f6b1d2c3e4f5a",
            "request_ids": [41, 42]
        })),
        (status = 400, description = "Unknown action or malformed body", body = Object, example = json!({
            "success": false,
            "error": "Invalid action"
        })),
        (status = 500, description = "Storage failure")
    ),
    tag = "Requests"
)]
#[instrument(name = "requests_command", skip(service, body))]
pub async fn post_requests(
    service: web::Data<RequestAggregationService>,
    body: web::Json<RequestCommand>,
) -> Result<HttpResponse, AppError> {
    match body.into_inner() {
        RequestCommand::Create(new_group) => {
            let created = service.create(new_group).await?;
            Ok(json_ok(json!({
                "success": true,
                "message": format!("Created requests: {}", created.created_ids.len()),
                "request_group_id": created.group_id,
                "request_ids": created.created_ids,
            })))
        }
        RequestCommand::UpdateStatus(update) => {
            service
                .update_status(&update.request_group_id, update.status)
                .await?;
            Ok(json_ok(json!({
                "success": true,
                "message": "Request status updated",
            })))
        }
    }
}
