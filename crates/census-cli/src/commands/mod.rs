pub mod report;
pub mod schema;
pub mod serve;

use census_config::CensusConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &CensusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Report(args) => report::handle(&args, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
