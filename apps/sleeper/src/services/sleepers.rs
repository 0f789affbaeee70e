//! Sleeper domain service: batch generation and store orchestration.

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::db::with_timeout;
use crate::errors::domain::DomainError;
use crate::repos::sleepers::{self, Sleeper};
use crate::state::app_state::AppState;

/// Values are drawn uniformly from `[0, MAX_SLEEPER_TIME)`.
pub const MAX_SLEEPER_TIME: f64 = 10.0;

/// Build `number` fresh sleepers with v4 ids and random values.
///
/// The batch is reserved up front; a count the allocator cannot hold is a
/// validation error instead of an abort.
pub fn generate_batch<R: Rng>(number: usize, rng: &mut R) -> Result<Vec<Sleeper>, DomainError> {
    let mut batch = Vec::new();
    batch.try_reserve_exact(number).map_err(|e| {
        DomainError::validation(format!("number {number} is too large to generate: {e}"))
    })?;

    batch.extend((0..number).map(|_| Sleeper {
        id: Uuid::new_v4().to_string(),
        value: rng.random_range(0.0..MAX_SLEEPER_TIME),
    }));
    Ok(batch)
}

/// Validate the requested count, generate the batch and store it atomically.
pub async fn create_sleepers(state: &AppState, number: i64) -> Result<Vec<Sleeper>, DomainError> {
    let number = usize::try_from(number).map_err(|_| {
        DomainError::validation(format!("number must be a non-negative integer, got {number}"))
    })?;

    let batch = generate_batch(number, &mut rand::rng())?;
    if batch.is_empty() {
        return Ok(batch);
    }

    let to_store = batch.clone();
    with_timeout(
        state.query_timeout(),
        "sleepers.create",
        with_txn(state.db(), move |txn| {
            Box::pin(async move { sleepers::create_batch(txn, &to_store).await })
        }),
    )
    .await?;

    info!(count = batch.len(), "sleepers.created");
    Ok(batch)
}

pub async fn delete_sleepers(state: &AppState) -> Result<u64, DomainError> {
    let rows = with_timeout(
        state.query_timeout(),
        "sleepers.delete",
        sleepers::delete_all(state.db()),
    )
    .await?;

    info!(rows, "sleepers.deleted");
    Ok(rows)
}

pub async fn get_sleeper(state: &AppState, id: &str) -> Result<Sleeper, DomainError> {
    with_timeout(
        state.query_timeout(),
        "sleepers.get",
        sleepers::get_by_id(state.db(), id),
    )
    .await
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn empty_batch_for_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate_batch(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn ids_are_hyphenated_uuids() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for sleeper in generate_batch(5, &mut rng).unwrap() {
            assert_eq!(sleeper.id.len(), 36);
            assert!(Uuid::parse_str(&sleeper.id).is_ok());
        }
    }

    #[test]
    fn same_seed_same_values() {
        let a: Vec<f64> = generate_batch(4, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect();
        let b: Vec<f64> = generate_batch(4, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn unallocatable_count_is_validation_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = generate_batch(usize::MAX, &mut rng).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        #[test]
        fn batch_has_requested_size_distinct_ids_and_bounded_values(
            number in 0usize..200,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let batch = generate_batch(number, &mut rng).unwrap();

            prop_assert_eq!(batch.len(), number);
            let ids: HashSet<&str> = batch.iter().map(|s| s.id.as_str()).collect();
            prop_assert_eq!(ids.len(), number);
            for sleeper in &batch {
                prop_assert!((0.0..MAX_SLEEPER_TIME).contains(&sleeper.value));
            }
        }
    }
}
