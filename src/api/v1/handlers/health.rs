/*
 * Responsibility
 * - GET /health (疎通用、認証なし / DB なし)
 * - GET /health/db (リクエスト単位のセッションを開いて SELECT 1)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::services::db::{DbSession, PgSessionFactory};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

pub async fn health_db(mut session: DbSession<PgSessionFactory>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&mut **session)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "database health check failed");
            AppError::Internal
        })?;
    session.close();

    Ok(Json(json!({"status": "ok", "backend": "postgres"})))
}
