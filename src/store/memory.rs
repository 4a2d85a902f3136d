//! In-memory stand-in for the MySQL tables.
//!
//! Mirrors the join order, the all-or-nothing group insert and the
//! foreign key from requests to the roster.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{RequestStore, RosterStore};
use crate::model::employee::{Employee, EmployeeInput};
use crate::model::request::{NewRequestGroup, RequestRow, RequestStatus};

#[derive(Debug, Clone)]
struct StoredRequest {
    id: u64,
    employee_id: u64,
    request_type: String,
    request_category: String,
    status: String,
    notes: String,
    request_group_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    approved_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct State {
    employees: Vec<Employee>,
    requests: Vec<StoredRequest>,
    next_employee_id: u64,
    next_request_id: u64,
    ticks: i64,
    frozen: bool,
    unavailable: bool,
}

impl State {
    /// Every write happens one second after the previous one, unless frozen.
    fn now(&mut self) -> DateTime<Utc> {
        if !self.frozen {
            self.ticks += 1;
        }
        Utc.timestamp_opt(1_767_225_600, 0).unwrap() + Duration::seconds(self.ticks)
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail as if the pool were exhausted.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unwrap().unavailable = unavailable;
    }

    /// Stamps every following write with the same second.
    pub fn freeze_clock(&self) {
        self.state.lock().unwrap().frozen = true;
    }

    pub fn seed_employee(&self, last_name: &str, first_name: &str) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.next_employee_id += 1;
        let id = state.next_employee_id;
        state.employees.push(employee(id, input(last_name, first_name)));
        id
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

pub fn input(last_name: &str, first_name: &str) -> EmployeeInput {
    EmployeeInput {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        middle_name: None,
        position: Some("Inspector".to_string()),
        rank: Some("Captain".to_string()),
        service: Some("Patrol".to_string()),
        department: Some("North".to_string()),
        address: None,
        office: Some("101".to_string()),
        phone: None,
        sudis_login: None,
        official_email: None,
        status: None,
    }
}

fn employee(id: u64, input: EmployeeInput) -> Employee {
    let status = input.status_or_default().to_string();
    Employee {
        id,
        last_name: input.last_name,
        first_name: input.first_name,
        middle_name: input.middle_name,
        position: input.position,
        rank: input.rank,
        service: input.service,
        department: input.department,
        address: input.address,
        office: input.office,
        phone: input.phone,
        sudis_login: input.sudis_login,
        official_email: input.official_email,
        status,
    }
}

#[async_trait]
impl RequestStore for MemoryStore {
    async fn fetch_request_rows(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<RequestRow>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        state.check_available()?;

        let mut requests: Vec<&StoredRequest> = state
            .requests
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s.as_str()))
            .collect();

        let mut group_last_id: HashMap<&str, u64> = HashMap::new();
        for r in requests.iter().copied() {
            let last = group_last_id.entry(r.request_group_id.as_str()).or_default();
            *last = (*last).max(r.id);
        }
        let last_id = |r: &StoredRequest| group_last_id[r.request_group_id.as_str()];
        // ties on created_at: newest group first, members in insert order
        requests.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(last_id(*b).cmp(&last_id(*a)))
                .then(a.id.cmp(&b.id))
        });

        let rows = requests
            .into_iter()
            .filter_map(|r| {
                let e = state.employees.iter().find(|e| e.id == r.employee_id)?;
                Some(RequestRow {
                    id: r.id,
                    request_type: r.request_type.clone(),
                    request_category: r.request_category.clone(),
                    status: r.status.clone(),
                    notes: r.notes.clone(),
                    created_at: Some(r.created_at),
                    updated_at: Some(r.updated_at),
                    approved_at: r.approved_at,
                    request_group_id: r.request_group_id.clone(),
                    employee_id: e.id,
                    last_name: e.last_name.clone(),
                    first_name: e.first_name.clone(),
                    middle_name: e.middle_name.clone(),
                    position: e.position.clone(),
                    rank: e.rank.clone(),
                    service: e.service.clone(),
                    department: e.department.clone(),
                })
            })
            .collect();

        Ok(rows)
    }

    async fn insert_request_group(
        &self,
        group_id: &str,
        request: &NewRequestGroup,
    ) -> Result<Vec<u64>, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.check_available()?;

        if let Some(missing) = request
            .employee_ids
            .iter()
            .find(|id| !state.employees.iter().any(|e| e.id == **id))
        {
            return Err(sqlx::Error::Protocol(format!(
                "foreign key constraint fails: employee {missing}"
            )));
        }

        let now = state.now();
        let mut created_ids = Vec::with_capacity(request.employee_ids.len());
        for employee_id in &request.employee_ids {
            state.next_request_id += 1;
            let id = state.next_request_id;
            state.requests.push(StoredRequest {
                id,
                employee_id: *employee_id,
                request_type: request.request_type.clone(),
                request_category: request.request_category.clone(),
                status: RequestStatus::Pending.to_string(),
                notes: request.notes.clone(),
                request_group_id: group_id.to_string(),
                created_at: now,
                updated_at: now,
                approved_at: None,
            });
            created_ids.push(id);
        }

        Ok(created_ids)
    }

    async fn update_group_status(
        &self,
        group_id: &str,
        status: RequestStatus,
    ) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.check_available()?;

        let now = state.now();
        let mut touched = 0;
        for request in state
            .requests
            .iter_mut()
            .filter(|r| r.request_group_id == group_id)
        {
            request.status = status.to_string();
            request.updated_at = now;
            if status == RequestStatus::Approved {
                request.approved_at = Some(now);
            }
            touched += 1;
        }

        Ok(touched)
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        Ok(state.employees.clone())
    }

    async fn get_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        Ok(state.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_employee(&self, input: &EmployeeInput) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.check_available()?;
        state.next_employee_id += 1;
        let id = state.next_employee_id;
        state.employees.push(employee(id, input.clone()));
        Ok(id)
    }

    async fn update_employee(&self, id: u64, input: &EmployeeInput) -> Result<bool, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.check_available()?;
        match state.employees.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                let mut input = input.clone();
                input.status = input.status.or_else(|| Some(existing.status.clone()));
                *existing = employee(id, input);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_employee(&self, id: u64) -> Result<bool, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.check_available()?;
        if state.requests.iter().any(|r| r.employee_id == id) {
            return Err(sqlx::Error::Protocol(format!(
                "foreign key constraint fails: employee {id} has requests"
            )));
        }
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        Ok(state.employees.len() < before)
    }
}
