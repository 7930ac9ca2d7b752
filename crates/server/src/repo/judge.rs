use shared_types::{AppError, CreateJudgeRequest, Judge};
use sqlx::{Pool, Sqlite};

use crate::error_convert::SqlxErrorExt;

/// List every judge in identity order.
pub async fn list_all(pool: &Pool<Sqlite>) -> Result<Vec<Judge>, AppError> {
    sqlx::query_as::<_, Judge>(
        r#"
        SELECT judge_id, name, qualification
        FROM Judges
        ORDER BY judge_id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new judge.
pub async fn create(pool: &Pool<Sqlite>, req: CreateJudgeRequest) -> Result<Judge, AppError> {
    let row = sqlx::query_as::<_, Judge>(
        r#"
        INSERT INTO Judges (name, qualification)
        VALUES (?, ?)
        RETURNING judge_id, name, qualification
        "#,
    )
    .bind(req.name)
    .bind(req.qualification)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
