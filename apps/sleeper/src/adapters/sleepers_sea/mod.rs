//! SeaORM adapter for the sleeper repository.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use crate::entities::sleepers;

pub mod dto;

pub use dto::SleeperCreate;

/// Rows per INSERT statement. Two bound parameters per row keeps each
/// statement well under SQLite's host-parameter limit.
pub const INSERT_CHUNK_ROWS: usize = 400;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Insert every row of `batch`, chunked into multi-row INSERTs.
///
/// Atomicity comes from the caller's connection: pass a transaction to get
/// all-or-nothing semantics.
pub async fn insert_many<C: ConnectionTrait>(
    conn: &C,
    batch: Vec<SleeperCreate>,
) -> Result<(), sea_orm::DbErr> {
    let mut rows = batch.into_iter().peekable();
    while rows.peek().is_some() {
        let chunk: Vec<sleepers::ActiveModel> = rows
            .by_ref()
            .take(INSERT_CHUNK_ROWS)
            .map(|dto| sleepers::ActiveModel {
                sleeper_uuid: Set(dto.sleeper_uuid),
                sleeper_time: Set(dto.sleeper_time),
            })
            .collect();

        sleepers::Entity::insert_many(chunk)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Delete every row, returning how many were removed.
pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    let res = sleepers::Entity::delete_many().exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn find_by_uuid<C: ConnectionTrait>(
    conn: &C,
    sleeper_uuid: &str,
) -> Result<Option<sleepers::Model>, sea_orm::DbErr> {
    sleepers::Entity::find_by_id(sleeper_uuid.to_string())
        .one(conn)
        .await
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    sleepers::Entity::find().count(conn).await
}
