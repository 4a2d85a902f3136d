use crate::model::employee::{Employee, EmployeeInput};
use crate::model::request::{
    GroupEmployee, NewRequestGroup, RequestGroup, RequestStatus, UpdateGroupStatus,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personnel Requests API",
        version = "1.0.0",
        description = r#"
## Personnel Requests

Keeps the employee roster and the access/equipment requests filed for groups of employees.

### 🔹 Key Features
- **Requests**
  - File one request for several employees at once, list requests grouped by submission,
    move a whole group to `approved`, `completed` or `rejected`
- **Roster**
  - Create, update, list, view and delete employees

### 📦 Request Format
Both resources are action based: reads take `?action=` in the query string,
writes take `"action"` in the JSON body. `OPTIONS` answers CORS pre-flight.

### 📦 Response Format
Every JSON body carries `success`. Failures carry `error`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::requests::get_requests,
        crate::api::requests::post_requests,

        crate::api::employees::get_employees,
        crate::api::employees::post_employees
    ),
    components(
        schemas(
            RequestGroup,
            GroupEmployee,
            RequestStatus,
            NewRequestGroup,
            UpdateGroupStatus,
            Employee,
            EmployeeInput
        )
    ),
    tags(
        (name = "Requests", description = "Grouped request workflow"),
        (name = "Employee", description = "Employee roster"),
    )
)]
pub struct ApiDoc;
