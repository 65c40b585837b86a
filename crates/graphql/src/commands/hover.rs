use crate::schema_loader;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language_service::HoverConfig;
use libgraphql_language_service::Position;
use libgraphql_language_service::get_hover_information;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct HoverCmd {
    #[arg(help="Zero-based line of the cursor.", long)]
    line: usize,

    #[arg(help="Zero-based character column of the cursor.", long)]
    character: usize,

    #[arg(help="Path to the SDL describing the document's types.", long)]
    schema: PathBuf,

    #[arg(help="Render the description as markdown.", long)]
    markdown: bool,

    #[arg(
        help="Path to the document being edited.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for HoverCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match schema_loader::load_schema(&self.schema) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::from_error(&err),
        };
        let text = match schema_loader::read_document(&self.file_path).await {
            Ok(text) => text,
            Err(err) => return CommandResult::from_error(&err),
        };

        let hover = get_hover_information(
            &schema,
            &text,
            Position::new(self.line, self.character),
            &HoverConfig { use_markdown: self.markdown },
        );
        if hover.is_empty() {
            CommandResult::empty()
        } else {
            CommandResult::stdout(format_args!("{hover}"))
        }
    }
}
