use crate::output_utils;
use crate::schema_loader;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::Style;
use std::path::PathBuf;

/// Which grammar to lex a document with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum GrammarMode {
    Graphql,
    Variables,
    Results,
}
impl GrammarMode {
    pub fn parser(self) -> OnlineParser {
        match self {
            Self::Graphql => OnlineParser::graphql(),
            Self::Variables => OnlineParser::variables(),
            Self::Results => OnlineParser::results(),
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct HighlightCmd {
    #[arg(
        default_value="graphql",
        help="The grammar to lex the file with.",
        long,
        value_enum,
    )]
    mode: GrammarMode,

    #[arg(help="Print tokens as JSON.", long)]
    json: bool,

    #[arg(
        help="Path to the document to highlight.",
        name="FILE",
    )]
    file_path: PathBuf,
}

/// A non-whitespace token and where it is. Columns are zero-based character
/// offsets.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub(crate) struct StyledToken {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub style: Style,
}

/// Lexes `text` line by line, carrying state across lines the way an editor
/// would.
pub(crate) fn styled_tokens(parser: &OnlineParser, text: &str) -> Vec<StyledToken> {
    let mut state = parser.start_state();
    let mut out = vec![];
    for (line_idx, line) in text.split('\n').enumerate() {
        let (tokens, next_state) = parser.lex_line(line, &state);
        out.extend(
            tokens.into_iter()
                .filter(|token| token.style != Style::Ws)
                .map(|token| StyledToken {
                    line: line_idx,
                    start: line[..token.start].chars().count(),
                    end: line[..token.end].chars().count(),
                    text: token.value.to_string(),
                    style: token.style,
                }),
        );
        state = next_state;
    }
    out
}

#[inherent::inherent]
impl RunnableCommand for HighlightCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let text = match schema_loader::read_document(&self.file_path).await {
            Ok(text) => text,
            Err(err) => return CommandResult::from_error(&err),
        };
        let tokens = styled_tokens(&self.mode.parser(), &text);
        log::debug!("Lexed {} tokens from {:#?}.", tokens.len(), self.file_path);

        if self.json {
            return match output_utils::to_json(&tokens) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::from_error(&err),
            };
        }
        let lines: Vec<String> = tokens.iter()
            .map(|token| format!(
                "{}:{}-{}\t{}\t{}",
                token.line + 1,
                token.start + 1,
                token.end + 1,
                token.style,
                token.text,
            ))
            .collect();
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
