use shared_types::{AppError, CreatePartyRequest, Party};
use sqlx::{Pool, Sqlite};

use crate::error_convert::SqlxErrorExt;

/// List every party in identity order.
pub async fn list_all(pool: &Pool<Sqlite>) -> Result<Vec<Party>, AppError> {
    sqlx::query_as::<_, Party>(
        r#"
        SELECT party_id, case_id, name, role, contact_info
        FROM Parties
        ORDER BY party_id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new party. `case_id` is stored as given; the case need not exist.
pub async fn create(pool: &Pool<Sqlite>, req: CreatePartyRequest) -> Result<Party, AppError> {
    let row = sqlx::query_as::<_, Party>(
        r#"
        INSERT INTO Parties (case_id, name, role, contact_info)
        VALUES (?, ?, ?, ?)
        RETURNING party_id, case_id, name, role, contact_info
        "#,
    )
    .bind(req.case_id)
    .bind(req.name)
    .bind(req.role)
    .bind(req.contact_info)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
