use crate::api::attendance::{AttendanceQuery, MarkAttendance};
use crate::api::dashboard::{DashboardResponse, DepartmentCount, EmployeePresentDays};
use crate::api::employee::CreateEmployee;
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A minimal Human Resource Management record-keeper.

### Key Features
- **Employee Management**
  - Create, list, view, and delete employee records
- **Attendance Management**
  - Daily Present/Absent marking, idempotent per day
- **Dashboard**
  - Headcount, today's attendance, per-department and per-employee summaries

### Response Format
- JSON-based RESTful responses
- Errors carry a `message` field

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::dashboard::dashboard,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceQuery,
            DashboardResponse,
            DepartmentCount,
            EmployeePresentDays,
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Aggregated summary APIs"),
    )
)]
pub struct ApiDoc;
