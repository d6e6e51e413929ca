//! Employment: capital gain/loss rows, many per individual.

use census_core::entities::{Employment, NewEmployment};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::table::Record;
use crate::updates::EmploymentUpdate;

impl Record for Employment {
    const KIND: EntityKind = EntityKind::Employment;
    const KEY: &'static str = "employment_id";
    const COLUMNS: &'static [&'static str] =
        &["employment_id", "individual_id", "capital_gain", "capital_loss"];

    type New = NewEmployment;
    type Patch = EmploymentUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            employment_id: row.get::<i64>(0)?,
            individual_id: row.get::<i64>(1)?,
            capital_gain: row.get::<i64>(2)?,
            capital_loss: row.get::<i64>(3)?,
        })
    }

    fn key(&self) -> i64 {
        self.employment_id
    }

    fn insert_values(new: &NewEmployment) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("individual_id", new.individual_id.into()),
            ("capital_gain", new.capital_gain.into()),
            ("capital_loss", new.capital_loss.into()),
        ]
    }

    fn patch_values(patch: &EmploymentUpdate) -> Vec<(&'static str, libsql::Value)> {
        let mut values = Vec::new();
        if let Some(gain) = patch.capital_gain {
            values.push(("capital_gain", gain.into()));
        }
        if let Some(loss) = patch.capital_loss {
            values.push(("capital_loss", loss.into()));
        }
        values
    }

    fn parent_id(new: &NewEmployment) -> Option<i64> {
        Some(new.individual_id)
    }
}

#[cfg(test)]
mod tests {
    use census_core::entities::Individual;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{seed_individual, test_db};
    use crate::updates::EmploymentUpdateBuilder;

    #[tokio::test]
    async fn many_rows_per_individual() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let person = seed_individual(&session, 39).await;

        for gain in [2174, 0] {
            session
                .create::<Employment>(&NewEmployment {
                    individual_id: person.individual_id,
                    capital_gain: gain,
                    capital_loss: 0,
                })
                .await
                .unwrap();
        }

        let rows = session.get_many::<Employment>(0, 10).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employment_id, 1);
        assert_eq!(rows[0].capital_gain, 2174);
        assert_eq!(rows[1].employment_id, 2);
        assert!(rows.iter().all(|r| r.individual_id == person.individual_id));
    }

    #[tokio::test]
    async fn orphan_insert_is_integrity_conflict() {
        let db = test_db().await;
        let session = db.session().await.unwrap();

        let err = session
            .create::<Employment>(&NewEmployment {
                individual_id: 999,
                capital_gain: 0,
                capital_loss: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::IntegrityConflict(_)), "{err}");
        assert_eq!(session.count::<Employment>().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_by_employment_id() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let person = seed_individual(&session, 39).await;

        let created = session
            .create::<Employment>(&NewEmployment {
                individual_id: person.individual_id,
                capital_gain: 0,
                capital_loss: 0,
            })
            .await
            .unwrap();
        let update = EmploymentUpdateBuilder::new().capital_loss(1902).build();
        let updated = session
            .update::<Employment>(created.employment_id, &update)
            .await
            .unwrap();

        assert_eq!(updated.capital_loss, 1902);
        assert_eq!(updated.capital_gain, 0);
        assert_eq!(updated.key(), created.employment_id);
    }

    #[tokio::test]
    async fn delete_message_uses_label() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let person = seed_individual(&session, 39).await;

        let created = session
            .create::<Employment>(&NewEmployment {
                individual_id: person.individual_id,
                capital_gain: 5,
                capital_loss: 0,
            })
            .await
            .unwrap();
        let message = session
            .delete::<Employment>(created.employment_id)
            .await
            .unwrap();
        assert_eq!(message.message, "Employment deleted successfully");
        assert!(session.exists::<Individual>(person.individual_id).await.unwrap());
    }
}
