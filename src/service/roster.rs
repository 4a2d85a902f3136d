use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::{AppError, ErrorPolicy};
use crate::model::employee::{Employee, EmployeeInput};
use crate::store::RosterStore;

pub struct RosterService {
    store: Arc<dyn RosterStore>,
    errors: ErrorPolicy,
}

impl RosterService {
    pub fn new(store: Arc<dyn RosterStore>, config: &Config) -> Self {
        Self {
            store,
            errors: ErrorPolicy::from(config),
        }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.store
            .list_employees()
            .await
            .map_err(|e| self.errors.storage("list employees", e))
    }

    pub async fn get(&self, id: u64) -> Result<Employee, AppError> {
        self.store
            .get_employee(id)
            .await
            .map_err(|e| self.errors.storage("get employee", e))?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<u64, AppError> {
        validate(&input)?;

        let id = self
            .store
            .insert_employee(&input)
            .await
            .map_err(|e| self.errors.storage("create employee", e))?;

        info!(employee_id = id, "Employee created");
        Ok(id)
    }

    pub async fn update(&self, id: u64, input: EmployeeInput) -> Result<(), AppError> {
        validate(&input)?;

        let found = self
            .store
            .update_employee(id, &input)
            .await
            .map_err(|e| self.errors.storage("update employee", e))?;

        if !found {
            return Err(not_found());
        }

        info!(employee_id = id, "Employee updated");
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        let found = self
            .store
            .delete_employee(id)
            .await
            .map_err(|e| self.errors.storage("delete employee", e))?;

        if !found {
            return Err(not_found());
        }

        info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

fn validate(input: &EmployeeInput) -> Result<(), AppError> {
    if input.last_name.trim().is_empty() || input.first_name.trim().is_empty() {
        return Err(AppError::validation("last_name and first_name must not be empty"));
    }
    Ok(())
}
