use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, ErrorPolicy};
use crate::model::request::{
    CreatedGroup, GroupEmployee, NewRequestGroup, RequestGroup, RequestRow, RequestStatus,
};
use crate::store::RequestStore;

/// Creates, lists and transitions request groups.
pub struct RequestAggregationService {
    store: Arc<dyn RequestStore>,
    errors: ErrorPolicy,
}

impl RequestAggregationService {
    pub fn new(store: Arc<dyn RequestStore>, config: &Config) -> Self {
        Self {
            store,
            errors: ErrorPolicy::from(config),
        }
    }

    pub async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<RequestGroup>, AppError> {
        let rows = self
            .store
            .fetch_request_rows(status)
            .await
            .map_err(|e| self.errors.storage("list requests", e))?;

        debug!(rows = rows.len(), "Folding request rows into groups");
        Ok(group_rows(rows))
    }

    /// Inserts one `pending` request per employee under a fresh group id.
    ///
    /// An empty `employee_ids` list still yields a group id but writes nothing.
    pub async fn create(&self, request: NewRequestGroup) -> Result<CreatedGroup, AppError> {
        if request.request_type.trim().is_empty() {
            return Err(AppError::validation("request_type must not be empty"));
        }
        if request.request_category.trim().is_empty() {
            return Err(AppError::validation("request_category must not be empty"));
        }

        let group_id = new_group_id();

        if request.employee_ids.is_empty() {
            info!(group_id = %group_id, "Request group created without employees");
            return Ok(CreatedGroup {
                group_id,
                created_ids: Vec::new(),
            });
        }

        let created_ids = self
            .store
            .insert_request_group(&group_id, &request)
            .await
            .map_err(|e| self.errors.storage("create request group", e))?;

        info!(
            group_id = %group_id,
            created = created_ids.len(),
            request_type = %request.request_type,
            "Request group created"
        );

        Ok(CreatedGroup {
            group_id,
            created_ids,
        })
    }

    /// Moves every request of the group to `status`. Unknown groups are a no-op.
    pub async fn update_status(
        &self,
        group_id: &str,
        status: RequestStatus,
    ) -> Result<(), AppError> {
        if group_id.trim().is_empty() {
            return Err(AppError::validation("request_group_id must not be empty"));
        }

        let touched = self
            .store
            .update_group_status(group_id, status)
            .await
            .map_err(|e| self.errors.storage("update request status", e))?;

        info!(group_id, %status, touched, "Request group status updated");
        Ok(())
    }
}

fn new_group_id() -> String {
    format!("group_{}", Uuid::new_v4().to_simple())
}

/// Folds join rows into groups keyed by `request_group_id`.
///
/// Groups keep the order in which their first row appears, and that first row
/// supplies the group-level fields. Every row contributes one employee entry.
pub fn group_rows(rows: Vec<RequestRow>) -> Vec<RequestGroup> {
    let mut groups: Vec<RequestGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let employee = GroupEmployee {
            id: row.employee_id,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            position: row.position,
            rank: row.rank,
            service: row.service,
            department: row.department,
        };

        match index.get(&row.request_group_id) {
            Some(&slot) => groups[slot].employees.push(employee),
            None => {
                index.insert(row.request_group_id.clone(), groups.len());
                groups.push(RequestGroup {
                    id: row.id,
                    request_group_id: row.request_group_id,
                    request_type: row.request_type,
                    request_category: row.request_category,
                    status: row.status,
                    notes: row.notes,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                    approved_at: row.approved_at,
                    employees: vec![employee],
                });
            }
        }
    }

    groups
}
