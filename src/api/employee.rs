use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::validate;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, most recently created first", body = Vec<Employee>)
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 409, description = "Duplicate employee ID or email", body = Object, example = json!({
            "message": "Employee ID 'EMP-001' already exists"
        })),
        (status = 422, description = "Missing or malformed field", body = Object, example = json!({
            "message": "Invalid email format"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    validate::validate_new_employee(&payload)?;

    let mut tx = pool.begin().await?;

    let id_taken: Option<i64> =
        sqlx::query_scalar("SELECT id FROM employees WHERE employee_id = ?")
            .bind(&payload.employee_id)
            .fetch_optional(&mut *tx)
            .await?;
    if id_taken.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee ID '{}' already exists",
            payload.employee_id
        )));
    }

    let email_taken: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(&mut *tx)
        .await?;
    if email_taken.is_some() {
        return Err(ApiError::Conflict(format!(
            "Email '{}' already in use",
            payload.email
        )));
    }

    let created_at = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.employee_id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .bind(created_at)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        // Concurrent create that slipped past the pre-checks.
        if ApiError::is_unique_violation(&e) {
            ApiError::Conflict(format!(
                "Employee ID '{}' or email '{}' already in use",
                payload.employee_id, payload.email
            ))
        } else {
            ApiError::Database(e)
        }
    })?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(HttpResponse::Created().json(Employee {
        id,
        employee_id: payload.employee_id,
        full_name: payload.full_name,
        email: payload.email,
        department: payload.department,
        created_at,
    }))
}

/// Get Employee by its external identifier
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "External employee identifier")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee =
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE employee_id = ?")
            .bind(&employee_id)
            .fetch_optional(pool.get_ref())
            .await?;

    match employee {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::NotFound("Employee not found".into())),
    }
}

/// Delete Employee
///
/// Hard delete by external identifier. Attendance rows for the employee are
/// left in place and stay listable.
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "External employee identifier")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee not found".into()));
    }

    tx.commit().await?;
    Ok(HttpResponse::NoContent().finish())
}
