use anyhow::Context;
use libgraphql_language_service::Schema;
use std::path::Path;

/// Builds a schema from the SDL file at `path`.
pub(crate) fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    let schema = Schema::builder()
        .load_file(path)?
        .build()
        .with_context(|| format!("Failed to build the schema at {path:#?}"))?;
    log::debug!(
        "Loaded {} types and {} directives from {path:#?}.",
        schema.all_types().len(),
        schema.all_directives().len(),
    );
    Ok(schema)
}

/// Loads the schema at `path`, if one was given.
pub(crate) fn load_optional_schema(path: Option<&Path>) -> anyhow::Result<Option<Schema>> {
    path.map(load_schema).transpose()
}

pub(crate) async fn read_document(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {path:#?}"))
}
