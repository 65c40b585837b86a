mod def_location;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;

pub use def_location::DefLocation;
pub use schema::Schema;
pub use schema_build_error::GraphQLOperationType;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
