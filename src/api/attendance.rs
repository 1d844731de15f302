use crate::error::ApiError;
use crate::model::attendance::Attendance;
use crate::validate;
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    /// Must be exactly "Present" or "Absent".
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AttendanceQuery {
    /// Filter by external employee identifier
    #[schema(example = "EMP-001")]
    pub employee_id: Option<String>,
    /// Inclusive lower date bound
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    #[schema(example = "2024-01-31", value_type = String, format = "date")]
    pub date_to: Option<NaiveDate>,
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = Vec<Attendance>)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut conditions = Vec::new();
    if query.employee_id.is_some() {
        conditions.push("employee_id = ?");
    }
    if query.date_from.is_some() {
        conditions.push("date >= ?");
    }
    if query.date_to.is_some() {
        conditions.push("date <= ?");
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT * FROM attendance {} ORDER BY date DESC, id DESC",
        where_clause
    );

    let mut data_query = sqlx::query_as::<_, Attendance>(&sql);
    if let Some(employee_id) = &query.employee_id {
        data_query = data_query.bind(employee_id);
    }
    if let Some(date_from) = query.date_from {
        data_query = data_query.bind(date_from);
    }
    if let Some(date_to) = query.date_to {
        data_query = data_query.bind(date_to);
    }

    let records = data_query.fetch_all(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Mark Attendance
///
/// Upsert keyed by (employee_id, date): marking the same day twice overwrites
/// the status in place, keeping the original surrogate id and created_at.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded (created or updated)", body = Attendance),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee 'EMP-001' not found"
        })),
        (status = 422, description = "Invalid status", body = Object, example = json!({
            "message": "Status must be 'Present' or 'Absent'"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let mut tx = pool.begin().await?;

    let employee: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE employee_id = ?")
        .bind(&payload.employee_id)
        .fetch_optional(&mut *tx)
        .await?;
    if employee.is_none() {
        return Err(ApiError::NotFound(format!(
            "Employee '{}' not found",
            payload.employee_id
        )));
    }

    let status = validate::parse_status(&payload.status)?;

    let existing = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(&payload.employee_id)
    .bind(payload.date)
    .fetch_optional(&mut *tx)
    .await?;

    let record = match existing {
        Some(mut record) => {
            sqlx::query("UPDATE attendance SET status = ? WHERE id = ?")
                .bind(status)
                .bind(record.id)
                .execute(&mut *tx)
                .await?;
            record.status = status;
            record
        }
        None => {
            let created_at = Utc::now();
            let result = sqlx::query(
                r#"
                INSERT INTO attendance (employee_id, date, status, created_at)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&payload.employee_id)
            .bind(payload.date)
            .bind(status)
            .bind(created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                // Concurrent mark for the same (employee_id, date).
                if ApiError::is_unique_violation(&e) {
                    ApiError::Conflict(format!(
                        "Attendance for '{}' on {} already recorded",
                        payload.employee_id, payload.date
                    ))
                } else {
                    ApiError::Database(e)
                }
            })?;

            Attendance {
                id: result.last_insert_rowid(),
                employee_id: payload.employee_id,
                date: payload.date,
                status,
                created_at,
            }
        }
    };

    tx.commit().await?;
    Ok(HttpResponse::Created().json(record))
}

/// Delete Attendance record
#[utoipa::path(
    delete,
    path = "/attendance/{record_id}",
    params(
        ("record_id" = i64, Path, description = "Attendance record surrogate id")
    ),
    responses(
        (status = 204, description = "Attendance record deleted"),
        (status = 404, description = "Attendance record not found", body = Object, example = json!({
            "message": "Attendance record not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let record_id = path.into_inner();

    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(record_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Attendance record not found".into()));
    }

    tx.commit().await?;
    Ok(HttpResponse::NoContent().finish())
}
