use crate::validation::rules;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// One validation rule run over a parsed executable document.
///
/// Validators are stateless and shared: the same boxed rule list may be used
/// for every document, from any thread.
pub trait DocumentValidator: Send + Sync {
    fn name(&self) -> &'static str;

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError>;
}

/// The bundled rules, in the order their errors are reported.
pub fn default_validators() -> Vec<Box<dyn DocumentValidator>> {
    vec![
        Box::new(rules::LoneAnonymousOperation),
        Box::new(rules::UniqueOperationNames),
        Box::new(rules::UniqueFragmentNames),
        Box::new(rules::KnownTypeNames),
        Box::new(rules::FragmentsOnCompositeTypes),
        Box::new(rules::UniqueVariableNames),
        Box::new(rules::KnownFragmentNames),
        Box::new(rules::NoUnusedFragments),
        Box::new(rules::PossibleFragmentSpreads),
        Box::new(rules::NoFragmentCycles),
        Box::new(rules::FieldsOnCorrectType),
        Box::new(rules::ScalarLeafs),
        Box::new(rules::KnownArgumentNames),
        Box::new(rules::UniqueArgumentNames),
        Box::new(rules::ValuesOfCorrectType),
        Box::new(rules::ProvidedRequiredArguments),
        Box::new(rules::KnownDirectives),
        Box::new(rules::NoUndefinedVariables),
        Box::new(rules::NoUnusedVariables),
        Box::new(rules::VariablesInAllowedPosition),
        Box::new(rules::OverlappingFieldsCanBeMerged),
    ]
}

/// Runs every validator in `validators` over the document in `ctx`.
pub fn validate(
    ctx: &ValidationContext<'_>,
    validators: &[Box<dyn DocumentValidator>],
) -> Vec<ValidationError> {
    validators.iter()
        .flat_map(|validator| {
            let errors = validator.validate(ctx);
            if !errors.is_empty() {
                log::trace!("{} reported {} error(s)", validator.name(), errors.len());
            }
            errors
        })
        .collect()
}
