//! Batch validation of executable documents against a [`Schema`](crate::Schema).

mod deprecation;
mod document_validator;
pub mod rules;
mod validation_context;
mod validation_error;

pub use deprecation::find_deprecated_usages;
pub use document_validator::DocumentValidator;
pub use document_validator::default_validators;
pub use document_validator::validate;
pub use validation_context::OperationInfo;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;
pub use validation_error::ValidationError;
