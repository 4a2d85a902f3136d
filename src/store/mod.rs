//! Data access for the two tables.
//!
//! Services talk to these traits only, so the MySQL implementation can be
//! swapped for the in-memory one in tests.

use async_trait::async_trait;

use crate::model::employee::{Employee, EmployeeInput};
use crate::model::request::{NewRequestGroup, RequestRow, RequestStatus};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlStore;

#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Requests joined with their employees, newest first, ties by request id.
    async fn fetch_request_rows(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<RequestRow>, sqlx::Error>;

    /// Inserts one `pending` row per employee inside a single transaction and
    /// returns the new row ids in input order.
    async fn insert_request_group(
        &self,
        group_id: &str,
        request: &NewRequestGroup,
    ) -> Result<Vec<u64>, sqlx::Error>;

    /// Returns the number of rows touched; zero is not an error.
    async fn update_group_status(
        &self,
        group_id: &str,
        status: RequestStatus,
    ) -> Result<u64, sqlx::Error>;
}

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error>;

    async fn get_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error>;

    async fn insert_employee(&self, input: &EmployeeInput) -> Result<u64, sqlx::Error>;

    /// `false` when no employee has this id.
    async fn update_employee(&self, id: u64, input: &EmployeeInput) -> Result<bool, sqlx::Error>;

    /// `false` when no employee has this id.
    async fn delete_employee(&self, id: u64) -> Result<bool, sqlx::Error>;
}
