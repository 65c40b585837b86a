use crate::graphql_files;
use crate::output_utils;
use crate::schema_loader;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language_service::diagnostics;
use libgraphql_language_service::Diagnostic;
use libgraphql_language_service::DocumentMode;
use libgraphql_language_service::Position;
use libgraphql_language_service::Schema;
use libgraphql_language_service::Severity;
use libgraphql_language_service::get_diagnostics;
use libgraphql_language_service::get_document_mode;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct LintCmd {
    #[arg(
        help="Path to the SDL to validate documents against. Without one, \
             only syntax is checked.",
        long,
    )]
    schema: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(help="Print diagnostics as JSON.", long)]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be linted.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The diagnostics of one linted file.
#[derive(Debug, serde::Serialize)]
pub(crate) struct FileDiagnostics {
    pub file: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lints one document.
///
/// Type system documents that pass syntax checks are additionally built as a
/// schema on their own, so duplicate and dangling definitions are reported
/// too.
pub(crate) fn lint_document(
    file_path: &Path,
    text: &str,
    schema: Option<&Schema>,
) -> Vec<Diagnostic> {
    let diagnostics = get_diagnostics(text, schema);
    if !diagnostics.is_empty() {
        return diagnostics;
    }

    let uri = file_path.to_string_lossy();
    if get_document_mode(text, Some(&uri)) != DocumentMode::TypeSystem {
        return diagnostics;
    }

    let built = Schema::builder()
        .load_str(Some(file_path.to_path_buf()), text)
        .and_then(|builder| builder.build());
    match built {
        Ok(_) => diagnostics,
        Err(err) => {
            let position = err.location()
                .map(|location| location.position)
                .unwrap_or(Position::new(0, 0));
            vec![Diagnostic::new(
                Severity::Error,
                err.to_string(),
                diagnostics::get_range(text, position),
                "Schema",
            )]
        },
    }
}

#[inherent::inherent]
impl RunnableCommand for LintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match schema_loader::load_optional_schema(self.schema.as_deref()) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::from_error(&err),
        };
        let found = match graphql_files::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        ) {
            Ok(found) => found,
            Err(err) => return CommandResult::from_error(&err),
        };

        let mut documents = Vec::with_capacity(found.graphql_files.len());
        for file_path in found.graphql_files {
            match schema_loader::read_document(&file_path).await {
                Ok(text) => documents.push((file_path, text)),
                Err(err) => return CommandResult::from_error(&err),
            }
        }

        let results: Vec<FileDiagnostics> = documents.par_iter()
            .map(|(file_path, text)| FileDiagnostics {
                file: file_path.to_owned(),
                diagnostics: lint_document(file_path, text, schema.as_ref()),
            })
            .collect();

        let num_errors = results.iter()
            .flat_map(|result| &result.diagnostics)
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
            .count();
        let num_diagnostics: usize = results.iter()
            .map(|result| result.diagnostics.len())
            .sum();
        log::debug!(
            "Linted {} files: {num_diagnostics} diagnostics, {num_errors} errors.",
            results.len(),
        );

        let output =
            if self.json {
                match output_utils::to_json(&results) {
                    Ok(json) => CommandResult::stdout(format_args!("{json}")),
                    Err(err) => return CommandResult::from_error(&err),
                }
            } else {
                let mut lines: Vec<String> = results.iter()
                    .flat_map(|result| result.diagnostics.iter().map(|diagnostic| {
                        output_utils::format_diagnostic(&result.file, diagnostic)
                    }))
                    .collect();
                let marker =
                    if num_errors == 0 {
                        output_utils::GREEN_CHECK
                    } else {
                        output_utils::RED_X
                    };
                lines.push(format!(
                    "{marker} Linted {} files ({} skipped): {num_diagnostics} \
                    problems, {num_errors} errors.",
                    results.len(),
                    found.num_skipped_files,
                ));
                CommandResult::stdout(format_args!("{}", lines.join("\n")))
            };

        if num_errors > 0 {
            output.failed()
        } else {
            output
        }
    }
}
