use hunter_core::{AnalysisResult, HistoryEntry, User};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaType};

/// Handle `claimhunt schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.type_name)?);
    Ok(())
}

fn render(type_name: SchemaType) -> anyhow::Result<String> {
    let schema = match type_name {
        SchemaType::User => schema_for!(User),
        SchemaType::AnalysisResult => schema_for!(AnalysisResult),
        SchemaType::HistoryEntry => schema_for!(HistoryEntry),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
