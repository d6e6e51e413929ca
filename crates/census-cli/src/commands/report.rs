use anyhow::Context;
use census_config::CensusConfig;
use census_db::CensusDb;

use crate::cli::root_commands::{ReportArgs, ReportKind};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `census report`. Reads the store directly, bypassing the API.
pub async fn handle(
    args: &ReportArgs,
    config: &CensusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = CensusDb::open(&config.database)
        .await
        .with_context(|| format!("failed to open census store at {}", config.database.path))?;
    let session = db.session().await?;

    match args.kind {
        ReportKind::Income => output(&session.income_distribution().await?, flags.format),
        ReportKind::Hours => output(&session.hours_by_income().await?, flags.format),
        ReportKind::Workclass => output(&session.workclass_distribution().await?, flags.format),
        ReportKind::Education => output(&session.education_by_income().await?, flags.format),
        ReportKind::Age => output(
            &session.age_histogram(config.report.age_bins).await?,
            flags.format,
        ),
        ReportKind::Overview => {
            let limit = args.limit.unwrap_or(config.report.overview_limit);
            let report = session.overview(args.offset, limit).await?;
            if flags.format == OutputFormat::Table {
                if !flags.quiet {
                    let average = report
                        .average_age
                        .map_or_else(|| String::from("-"), |age| format!("{age:.1}"));
                    println!(
                        "average age: {average}  >50K: {}  rows {}..{}",
                        report.income_above_50k,
                        report.offset,
                        report.offset + i64::try_from(report.rows.len()).unwrap_or(i64::MAX)
                    );
                }
                output(&report.rows, flags.format)
            } else {
                output(&report, flags.format)
            }
        }
    }
}
