use crate::output_utils;
use crate::schema_loader;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language_service::CompletionItem;
use libgraphql_language_service::Position;
use libgraphql_language_service::get_autocomplete_suggestions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CompleteCmd {
    #[arg(help="Zero-based line of the cursor.", long)]
    line: usize,

    #[arg(help="Zero-based character column of the cursor.", long)]
    character: usize,

    #[arg(
        help="Path to the SDL to complete against. Without one, nothing is \
             suggested.",
        long,
    )]
    schema: Option<PathBuf>,

    #[arg(help="Print suggestions as JSON.", long)]
    json: bool,

    #[arg(
        help="Path to the document being edited.",
        name="FILE",
    )]
    file_path: PathBuf,
}

/// `label: detail` when there is a detail, else just the label.
pub(crate) fn format_completion_item(item: &CompletionItem) -> String {
    let mut out = item.label.to_owned();
    if let Some(detail) = &item.detail {
        out.push_str(": ");
        out.push_str(detail);
    }
    if item.is_deprecated {
        out.push_str(" (deprecated)");
    }
    out
}

#[inherent::inherent]
impl RunnableCommand for CompleteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match schema_loader::load_optional_schema(self.schema.as_deref()) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::from_error(&err),
        };
        let text = match schema_loader::read_document(&self.file_path).await {
            Ok(text) => text,
            Err(err) => return CommandResult::from_error(&err),
        };

        let position = Position::new(self.line, self.character);
        let items = match &schema {
            Some(schema) => get_autocomplete_suggestions(schema, &text, position),
            None => {
                log::warn!("No --schema given, so there is nothing to suggest.");
                vec![]
            },
        };
        log::debug!("{} suggestions at {position}.", items.len());

        if self.json {
            return match output_utils::to_json(&items) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::from_error(&err),
            };
        }
        if items.is_empty() {
            return CommandResult::empty();
        }
        let lines: Vec<String> = items.iter().map(format_completion_item).collect();
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
