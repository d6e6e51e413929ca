use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Print a read-only aggregate report straight from the store.
    Report(ReportArgs),
    /// Print the JSON Schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address, e.g. 0.0.0.0:8000 (defaults to server.bind)
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    pub kind: ReportKind,

    /// Rows to skip (overview only)
    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// Maximum rows (overview only; defaults to report.overview_limit)
    #[arg(long)]
    pub limit: Option<i64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportKind {
    /// Rows per income bracket.
    Income,
    /// Mean weekly hours per income bracket.
    Hours,
    /// Rows per workclass.
    Workclass,
    /// Rows per education level and income bracket.
    Education,
    /// Age histogram.
    Age,
    /// Page of high-income profiles with headline metrics.
    Overview,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: SchemaEntity,
}

/// Entities named the way the API paths name them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    Individual,
    Employment,
    #[value(name = "jobdetails")]
    JobDetails,
    #[value(name = "educationdetails")]
    EducationDetails,
    #[value(name = "relationshipdetails")]
    RelationshipDetails,
    #[value(name = "incomedetails")]
    IncomeDetails,
}
