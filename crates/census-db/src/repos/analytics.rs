//! Read-only aggregate queries behind `census report`.
//!
//! These bypass the CRUD operation set and read straight from the store.

use census_core::enums::IncomeClass;
use census_core::responses::{
    CategoryCount, EducationIncomeCount, GroupMean, HistogramBin, OverviewReport, ProfileRow,
};
use tracing::debug;

use crate::error::DatabaseError;
use crate::helpers::{check_page, parse_enum};
use crate::session::Session;

const OVERVIEW_SQL: &str = "SELECT i.individual_id, i.age, i.sex, i.fnlwgt, i.hours_per_week, i.native_country,
        jd.workclass, jd.occupation, ed.education_level, ed.education_num,
        inc.income_class, rel.marital_status
     FROM individuals i
     LEFT JOIN jobdetails jd ON i.individual_id = jd.individual_id
     LEFT JOIN educationdetails ed ON i.individual_id = ed.individual_id
     LEFT JOIN incomedetails inc ON i.individual_id = inc.individual_id
     LEFT JOIN relationshipdetails rel ON i.individual_id = rel.individual_id
     WHERE inc.income_class = '>50K'
     ORDER BY i.individual_id
     LIMIT ?1 OFFSET ?2";

fn row_to_profile(row: &libsql::Row) -> Result<ProfileRow, DatabaseError> {
    let income_class = row
        .get::<Option<String>>(10)?
        .map(|s| parse_enum::<IncomeClass>(&s))
        .transpose()?;
    Ok(ProfileRow {
        individual_id: row.get::<i64>(0)?,
        age: row.get::<i64>(1)?,
        sex: parse_enum(&row.get::<String>(2)?)?,
        fnlwgt: row.get::<i64>(3)?,
        hours_per_week: row.get::<i64>(4)?,
        native_country: row.get::<Option<String>>(5)?,
        workclass: row.get::<Option<String>>(6)?,
        occupation: row.get::<Option<String>>(7)?,
        education_level: row.get::<Option<String>>(8)?,
        education_num: row.get::<Option<i64>>(9)?,
        income_class,
        marital_status: row.get::<Option<String>>(11)?,
    })
}

impl Session {
    /// Rows per income bracket.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn income_distribution(&self) -> Result<Vec<CategoryCount>, DatabaseError> {
        self.category_counts(
            "SELECT income_class, COUNT(*) FROM incomedetails
             GROUP BY income_class ORDER BY income_class",
        )
        .await
    }

    /// Rows per workclass, most common first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn workclass_distribution(&self) -> Result<Vec<CategoryCount>, DatabaseError> {
        self.category_counts(
            "SELECT workclass, COUNT(*) FROM jobdetails
             GROUP BY workclass ORDER BY COUNT(*) DESC, workclass",
        )
        .await
    }

    async fn category_counts(&self, sql: &str) -> Result<Vec<CategoryCount>, DatabaseError> {
        let mut rows = self.conn().query(sql, ()).await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(CategoryCount {
                category: row.get::<String>(0)?,
                count: row.get::<i64>(1)?,
            });
        }
        Ok(results)
    }

    /// Mean weekly hours per income bracket. Individuals without income
    /// details are excluded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn hours_by_income(&self) -> Result<Vec<GroupMean>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT inc.income_class, AVG(i.hours_per_week)
                 FROM individuals i
                 INNER JOIN incomedetails inc ON i.individual_id = inc.individual_id
                 GROUP BY inc.income_class ORDER BY inc.income_class",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(GroupMean {
                group: row.get::<String>(0)?,
                mean: row.get::<f64>(1)?,
            });
        }
        Ok(results)
    }

    /// Counts per (education level, income bracket) pair.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn education_by_income(&self) -> Result<Vec<EducationIncomeCount>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT ed.education_level, inc.income_class, COUNT(*)
                 FROM educationdetails ed
                 INNER JOIN incomedetails inc ON ed.individual_id = inc.individual_id
                 GROUP BY ed.education_level, inc.income_class
                 ORDER BY ed.education_level, inc.income_class",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(EducationIncomeCount {
                education_level: row.get::<String>(0)?,
                income_class: parse_enum(&row.get::<String>(1)?)?,
                count: row.get::<i64>(2)?,
            });
        }
        Ok(results)
    }

    /// Equal-width age histogram over `[min age, max age]`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when `bins` is zero.
    pub async fn age_histogram(&self, bins: u32) -> Result<Vec<HistogramBin>, DatabaseError> {
        if bins == 0 {
            return Err(DatabaseError::InvalidArgument(
                "histogram needs at least one bin".into(),
            ));
        }
        let mut rows = self.conn().query("SELECT age FROM individuals", ()).await?;
        let mut ages = Vec::new();
        while let Some(row) = rows.next().await? {
            ages.push(row.get::<i64>(0)?);
        }
        Ok(bin_ages(&ages, bins))
    }

    /// One page of `>50K` profiles joined with their detail rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when either bound is negative.
    pub async fn overview(&self, offset: i64, limit: i64) -> Result<OverviewReport, DatabaseError> {
        check_page(offset, limit)?;
        debug!(offset, limit, "overview report");

        let mut rows = self
            .conn()
            .query(OVERVIEW_SQL, libsql::params![limit, offset])
            .await?;
        let mut profiles = Vec::new();
        while let Some(row) = rows.next().await? {
            profiles.push(row_to_profile(&row)?);
        }

        let income_above_50k = profiles
            .iter()
            .filter(|p| p.income_class == Some(IncomeClass::Above50K))
            .count();
        Ok(OverviewReport {
            offset,
            limit,
            average_age: mean_age(&profiles),
            income_above_50k: i64::try_from(income_above_50k).unwrap_or(i64::MAX),
            rows: profiles,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_age(profiles: &[ProfileRow]) -> Option<f64> {
    if profiles.is_empty() {
        return None;
    }
    let total: i64 = profiles.iter().map(|p| p.age).sum();
    Some(total as f64 / profiles.len() as f64)
}

/// Split `ages` into `bins` equal-width buckets. Values equal to the maximum
/// land in the last bucket. A single distinct age yields one bucket.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn bin_ages(ages: &[i64], bins: u32) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (ages.iter().min(), ages.iter().max()) else {
        return Vec::new();
    };
    let (min, max) = (min as f64, max as f64);
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: ages.len() as i64,
        }];
    }

    let width = (max - min) / f64::from(bins);
    let mut counts = vec![0_i64; bins as usize];
    for &age in ages {
        let idx = ((age as f64 - min) / width).floor() as usize;
        counts[idx.min(bins as usize - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: (i as f64).mul_add(width, min),
            upper: ((i + 1) as f64).mul_add(width, min),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use census_core::entities::{
        EducationDetails, IncomeDetails, Individual, JobDetails, NewEducationDetails,
        NewIncomeDetails, NewIndividual, NewJobDetails,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_db;

    async fn seed(session: &Session, age: i64, hours: i64, income: &str, workclass: &str) -> i64 {
        let id = session
            .create::<Individual>(&NewIndividual::new(age, 1000, "Female", hours, None).unwrap())
            .await
            .unwrap()
            .individual_id;
        session
            .create::<IncomeDetails>(&NewIncomeDetails::new(id, income).unwrap())
            .await
            .unwrap();
        session
            .create::<JobDetails>(&NewJobDetails {
                individual_id: id,
                workclass: workclass.into(),
                occupation: "Sales".into(),
            })
            .await
            .unwrap();
        id
    }

    #[test]
    fn bin_ages_handles_edges() {
        assert!(bin_ages(&[], 20).is_empty());

        let single = bin_ages(&[40, 40, 40], 20);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 3);

        let bins = bin_ages(&[20, 30, 40], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].lower, 20.0);
        assert_eq!(bins[0].upper, 30.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
    }

    #[tokio::test]
    async fn distributions_count_rows() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        seed(&session, 39, 40, "<=50K", "Private").await;
        seed(&session, 50, 60, ">50K", "Private").await;
        seed(&session, 38, 50, ">50K", "State-gov").await;

        let income = session.income_distribution().await.unwrap();
        assert_eq!(
            income,
            vec![
                CategoryCount {
                    category: "<=50K".into(),
                    count: 1
                },
                CategoryCount {
                    category: ">50K".into(),
                    count: 2
                },
            ]
        );

        let workclass = session.workclass_distribution().await.unwrap();
        assert_eq!(workclass[0].category, "Private");
        assert_eq!(workclass[0].count, 2);

        let hours = session.hours_by_income().await.unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[1].group, ">50K");
        assert!((hours[1].mean - 55.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn education_by_income_inner_joins() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let id = seed(&session, 39, 40, ">50K", "Private").await;
        session
            .create::<EducationDetails>(&NewEducationDetails {
                individual_id: id,
                education_level: "Masters".into(),
                education_num: 14,
            })
            .await
            .unwrap();
        seed(&session, 22, 20, "<=50K", "Private").await;

        let rows = session.education_by_income().await.unwrap();
        assert_eq!(
            rows,
            vec![EducationIncomeCount {
                education_level: "Masters".into(),
                income_class: IncomeClass::Above50K,
                count: 1,
            }]
        );
    }

    #[tokio::test]
    async fn overview_pages_high_income_rows() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        seed(&session, 30, 40, ">50K", "Private").await;
        seed(&session, 25, 40, "<=50K", "Private").await;
        seed(&session, 50, 40, ">50K", "Federal-gov").await;

        let report = session.overview(0, 5000).await.unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.income_above_50k, 2);
        assert_eq!(report.average_age, Some(40.0));
        assert_eq!(report.rows[1].workclass.as_deref(), Some("Federal-gov"));
        assert_eq!(report.rows[0].education_level, None);

        let page = session.overview(1, 1).await.unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].age, 50);

        let empty = session.overview(10, 5).await.unwrap();
        assert!(empty.rows.is_empty());
        assert_eq!(empty.average_age, None);
    }

    #[tokio::test]
    async fn overview_rejects_negative_offset() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        assert!(matches!(
            session.overview(-1, 10).await,
            Err(DatabaseError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn age_histogram_uses_requested_bins() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        for age in [17, 90, 45] {
            seed(&session, age, 40, "<=50K", "Private").await;
        }

        let bins = session.age_histogram(20).await.unwrap();
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<i64>(), 3);
        assert_eq!(bins[19].count, 1);
        assert!(session.age_histogram(0).await.is_err());
    }
}
