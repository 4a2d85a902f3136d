use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// Lifecycle of a request group: `pending` until someone decides on it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One row of the requests ⨝ employees join, as it comes off the wire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RequestRow {
    pub id: u64,
    pub request_type: String,
    pub request_category: String,
    pub status: String,
    pub notes: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub request_group_id: String,

    pub employee_id: u64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub service: Option<String>,
    pub department: Option<String>,
}

/// Employee as shown inside a request group.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GroupEmployee {
    #[schema(example = 1)]
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: Option<String>,
    pub rank: Option<String>,
    pub service: Option<String>,
    pub department: Option<String>,
}

/// All requests sharing one `request_group_id`, folded into a single object.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 41,
    "request_group_id": "group_4f1c2a9e0b7d4c3e8a5f6b1d2c3e4f5a",
    "request_type": "ibd-r",
    "request_category": "systems",
    "status": "pending",
    "notes": "",
    "created_at": "2026-01-01T09:00:00Z",
    "updated_at": "2026-01-01T09:00:00Z",
    "approved_at": null,
    "employees": [{
        "id": 1,
        "last_name": "Petrova",
        "first_name": "Anna",
        "middle_name": null,
        "position": "Software engineer",
        "rank": "Lieutenant",
        "service": "IT service",
        "department": "Development"
    }]
}))]
pub struct RequestGroup {
    /// id of the row that seeded the group
    pub id: u64,
    pub request_group_id: String,
    pub request_type: String,
    pub request_category: String,
    pub status: String,
    pub notes: String,
    #[schema(format = "date-time", value_type = Option<String>)]
    pub created_at: Option<DateTime<Utc>>,
    #[schema(format = "date-time", value_type = Option<String>)]
    pub updated_at: Option<DateTime<Utc>>,
    #[schema(format = "date-time", value_type = Option<String>)]
    pub approved_at: Option<DateTime<Utc>>,
    pub employees: Vec<GroupEmployee>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewRequestGroup {
    #[serde(default)]
    #[schema(example = json!([1, 2]))]
    pub employee_ids: Vec<u64>,
    #[schema(example = "ibd-r")]
    pub request_type: String,
    #[schema(example = "systems")]
    pub request_category: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGroupStatus {
    #[schema(example = "group_4f1c2a9e0b7d4c3e8a5f6b1d2c3e4f5a")]
    pub request_group_id: String,
    pub status: RequestStatus,
}

#[derive(Debug, Clone)]
pub struct CreatedGroup {
    pub group_id: String,
    pub created_ids: Vec<u64>,
}
