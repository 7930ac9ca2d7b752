use shared_types::{AppError, Case, CreateCaseRequest};
use sqlx::{Pool, Sqlite};

use crate::error_convert::SqlxErrorExt;

/// List every case in identity order.
pub async fn list_all(pool: &Pool<Sqlite>) -> Result<Vec<Case>, AppError> {
    sqlx::query_as::<_, Case>(
        r#"
        SELECT case_id, case_number, opening_date, description
        FROM Cases
        ORDER BY case_id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new case. The identity is assigned by storage.
pub async fn create(pool: &Pool<Sqlite>, req: CreateCaseRequest) -> Result<Case, AppError> {
    let row = sqlx::query_as::<_, Case>(
        r#"
        INSERT INTO Cases (case_number, opening_date, description)
        VALUES (?, ?, ?)
        RETURNING case_id, case_number, opening_date, description
        "#,
    )
    .bind(req.case_number)
    .bind(req.opening_date)
    .bind(req.description)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Replace the whole table with `cases`, keeping their identities.
///
/// Runs in one transaction: if any insert fails the delete is rolled back
/// and the previous rows stay in place. Returns the number of rows removed.
pub async fn replace_all(pool: &Pool<Sqlite>, cases: &[Case]) -> Result<u64, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let removed = sqlx::query("DELETE FROM Cases")
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?
        .rows_affected();

    for case in cases {
        sqlx::query(
            r#"
            INSERT INTO Cases (case_id, case_number, opening_date, description)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(case.case_id)
        .bind(&case.case_number)
        .bind(&case.opening_date)
        .bind(&case.description)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(removed)
}
