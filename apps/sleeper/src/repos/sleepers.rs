//! Sleeper repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::sleepers_sea::{self as sleepers_adapter, SleeperCreate};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Sleeper domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Sleeper {
    pub id: String,
    pub value: f64,
}

/// Insert the whole batch. Run it on a transaction for all-or-nothing writes.
pub async fn create_batch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sleepers: &[Sleeper],
) -> Result<(), DomainError> {
    let dtos = sleepers
        .iter()
        .map(|s| SleeperCreate::new(s.id.clone(), s.value))
        .collect();
    sleepers_adapter::insert_many(conn, dtos).await?;
    Ok(())
}

/// Remove every sleeper; returns the number of rows deleted.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(sleepers_adapter::delete_all(conn).await?)
}

pub async fn get_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Sleeper, DomainError> {
    sleepers_adapter::find_by_uuid(conn, id)
        .await?
        .map(Sleeper::from)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Sleeper, format!("Sleeper {id} not found"))
        })
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(sleepers_adapter::count(conn).await?)
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::sleepers::Model> for Sleeper {
    fn from(model: crate::entities::sleepers::Model) -> Self {
        Self {
            id: model.sleeper_uuid,
            value: model.sleeper_time,
        }
    }
}
