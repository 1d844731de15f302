use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;
use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentCount {
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 4)]
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeePresentDays {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = 17)]
    pub present_days: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 5,
    "present_today": 3,
    "absent_today": 1,
    "departments": [{"department": "Engineering", "count": 4}],
    "present_days_per_employee": [{"employee_id": "EMP-001", "present_days": 17}]
}))]
pub struct DashboardResponse {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub departments: Vec<DepartmentCount>,
    pub present_days_per_employee: Vec<EmployeePresentDays>,
}

/// Dashboard
///
/// Aggregate counts computed fresh on every call. The four sub-results are
/// independent; department counts are not scoped to today.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Aggregated summary", body = DashboardResponse)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let pool = pool.get_ref();
    let today = Local::now().date_naive();

    let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;

    let present_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(today)
            .bind(AttendanceStatus::Present)
            .fetch_one(pool)
            .await?;

    let absent_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(today)
            .bind(AttendanceStatus::Absent)
            .fetch_one(pool)
            .await?;

    let departments = sqlx::query_as::<_, (String, i64)>(
        "SELECT department, COUNT(id) FROM employees GROUP BY department",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(department, count)| DepartmentCount { department, count })
    .collect();

    let present_days_per_employee = sqlx::query_as::<_, (String, i64)>(
        "SELECT employee_id, COUNT(id) FROM attendance WHERE status = ? GROUP BY employee_id",
    )
    .bind(AttendanceStatus::Present)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(employee_id, present_days)| EmployeePresentDays {
        employee_id,
        present_days,
    })
    .collect();

    Ok(HttpResponse::Ok().json(DashboardResponse {
        total_employees,
        present_today,
        absent_today,
        departments,
        present_days_per_employee,
    }))
}
