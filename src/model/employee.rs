use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "last_name": "Petrova",
        "first_name": "Anna",
        "middle_name": "Sergeevna",
        "position": "Software engineer",
        "rank": "Lieutenant",
        "service": "IT service",
        "department": "Development",
        "address": "1 Main st.",
        "office": "204",
        "phone": "+7 900 000-00-00",
        "sudis_login": "apetrova",
        "official_email": "apetrova@example.org",
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    #[schema(nullable = true)]
    pub middle_name: Option<String>,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub service: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub office: Option<String>,
    pub phone: Option<String>,
    pub sudis_login: Option<String>,
    pub official_email: Option<String>,
    #[schema(example = "active")]
    pub status: String,
}

/// Roster fields accepted on create and update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeInput {
    #[schema(example = "Petrova")]
    pub last_name: String,
    #[schema(example = "Anna")]
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub service: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub office: Option<String>,
    pub phone: Option<String>,
    pub sudis_login: Option<String>,
    pub official_email: Option<String>,
    /// Defaults to `active` on create; left unchanged on update when omitted.
    #[schema(example = "active", nullable = true)]
    pub status: Option<String>,
}

pub const DEFAULT_STATUS: &str = "active";

impl EmployeeInput {
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}
