use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{RequestStore, RosterStore};
use crate::model::employee::{Employee, EmployeeInput};
use crate::model::request::{NewRequestGroup, RequestRow, RequestStatus};

const REQUEST_ROWS_SQL: &str = r#"
    SELECT
        r.id,
        r.request_type,
        r.request_category,
        r.status,
        r.notes,
        r.created_at,
        r.updated_at,
        r.approved_at,
        r.request_group_id,
        e.id AS employee_id,
        e.last_name,
        e.first_name,
        e.middle_name,
        e.position,
        e.`rank`,
        e.service,
        e.department,
        MAX(r.id) OVER (PARTITION BY r.request_group_id) AS group_last_id
    FROM requests r
    JOIN employees_mvd e ON r.employee_id = e.id
"#;

const EMPLOYEE_COLUMNS: &str = r#"
    id, last_name, first_name, middle_name, position, `rank`, service,
    department, address, office, phone, sudis_login, official_email, status
"#;

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestStore for MySqlStore {
    async fn fetch_request_rows(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<RequestRow>, sqlx::Error> {
        let mut sql = String::from(REQUEST_ROWS_SQL);
        if status.is_some() {
            sql.push_str(" WHERE r.status = ?");
        }
        // TIMESTAMP has whole-second resolution; newer groups win created_at ties
        sql.push_str(" ORDER BY r.created_at DESC, group_last_id DESC, r.id ASC");

        debug!(sql = %sql, status = ?status, "Fetching request rows");

        let mut query = sqlx::query_as::<_, RequestRow>(&sql);
        if let Some(status) = status {
            query = query.bind(status.as_str());
        }

        query.fetch_all(&self.pool).await
    }

    async fn insert_request_group(
        &self,
        group_id: &str,
        request: &NewRequestGroup,
    ) -> Result<Vec<u64>, sqlx::Error> {
        // rolled back on drop if any insert fails
        let mut tx = self.pool.begin().await?;
        let mut created_ids = Vec::with_capacity(request.employee_ids.len());

        for employee_id in &request.employee_ids {
            let result = sqlx::query(
                r#"
                INSERT INTO requests
                    (employee_id, request_type, request_category, notes, status, request_group_id)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(*employee_id)
            .bind(&request.request_type)
            .bind(&request.request_category)
            .bind(&request.notes)
            .bind(RequestStatus::Pending.as_str())
            .bind(group_id)
            .execute(&mut *tx)
            .await?;

            created_ids.push(result.last_insert_id());
        }

        tx.commit().await?;
        Ok(created_ids)
    }

    async fn update_group_status(
        &self,
        group_id: &str,
        status: RequestStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE requests
            SET status = ?,
                updated_at = CURRENT_TIMESTAMP,
                approved_at = CASE WHEN ? = 'approved' THEN CURRENT_TIMESTAMP ELSE approved_at END
            WHERE request_group_id = ?
            "#,
        )
        .bind(status.as_str())
        .bind(status.as_str())
        .bind(group_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RosterStore for MySqlStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees_mvd ORDER BY id");
        sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees_mvd WHERE id = ?");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert_employee(&self, input: &EmployeeInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees_mvd
                (last_name, first_name, middle_name, position, `rank`, service,
                 department, address, office, phone, sudis_login, official_email, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.last_name)
        .bind(&input.first_name)
        .bind(&input.middle_name)
        .bind(&input.position)
        .bind(&input.rank)
        .bind(&input.service)
        .bind(&input.department)
        .bind(&input.address)
        .bind(&input.office)
        .bind(&input.phone)
        .bind(&input.sudis_login)
        .bind(&input.official_email)
        .bind(input.status_or_default())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update_employee(&self, id: u64, input: &EmployeeInput) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // MySQL reports 0 affected rows for a no-op update, so check existence first
        let exists =
            sqlx::query_scalar::<_, u64>("SELECT id FROM employees_mvd WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .is_some();

        if !exists {
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE employees_mvd
            SET last_name = ?, first_name = ?, middle_name = ?, position = ?,
                `rank` = ?, service = ?, department = ?, address = ?, office = ?,
                phone = ?, sudis_login = ?, official_email = ?, status = COALESCE(?, status),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&input.last_name)
        .bind(&input.first_name)
        .bind(&input.middle_name)
        .bind(&input.position)
        .bind(&input.rank)
        .bind(&input.service)
        .bind(&input.department)
        .bind(&input.address)
        .bind(&input.office)
        .bind(&input.phone)
        .bind(&input.sudis_login)
        .bind(&input.official_email)
        .bind(&input.status)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete_employee(&self, id: u64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees_mvd WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
