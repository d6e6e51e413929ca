//! Shared test utilities for census-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use census_config::UpsertStrategy;
    use census_core::entities::{Individual, NewIndividual};

    use crate::{CensusDb, Session};

    /// Create an in-memory store with the default (native) upsert strategy.
    pub async fn test_db() -> CensusDb {
        CensusDb::open_local(":memory:").await.unwrap()
    }

    /// Create an in-memory store using `strategy` for 1:1 upserts.
    pub async fn test_db_with(strategy: UpsertStrategy) -> CensusDb {
        test_db().await.with_upsert_strategy(strategy)
    }

    /// Insert an individual of the given age and return it.
    pub async fn seed_individual(session: &Session, age: i64) -> Individual {
        let new = NewIndividual::new(age, 77_516, "Male", 40, Some("United-States")).unwrap();
        session.create::<Individual>(&new).await.unwrap()
    }
}
