use census_core::entities::{
    EducationDetails, Employment, IncomeDetails, Individual, JobDetails, RelationshipDetails,
};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaEntity};
use crate::output::output;

/// Handle `census schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.entity)?, flags.format)
}

fn schema_value(entity: SchemaEntity) -> anyhow::Result<serde_json::Value> {
    let schema = match entity {
        SchemaEntity::Individual => schema_for!(Individual),
        SchemaEntity::Employment => schema_for!(Employment),
        SchemaEntity::JobDetails => schema_for!(JobDetails),
        SchemaEntity::EducationDetails => schema_for!(EducationDetails),
        SchemaEntity::RelationshipDetails => schema_for!(RelationshipDetails),
        SchemaEntity::IncomeDetails => schema_for!(IncomeDetails),
    };
    Ok(serde_json::to_value(schema)?)
}
