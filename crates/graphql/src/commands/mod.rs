pub(crate) mod complete;
pub(crate) mod highlight;
pub(crate) mod hover;
pub(crate) mod lint;

use crate::Cli;
use crate::CommandResult;
use complete::CompleteCmd;
use highlight::HighlightCmd;
use hover::HoverCmd;
use lint::LintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print the style of every token in a document.
    Highlight(Box<HighlightCmd>),

    /// Report syntax, validation and deprecation problems.
    Lint(Box<LintCmd>),

    /// Suggest what may be typed at a position.
    Complete(Box<CompleteCmd>),

    /// Describe what is at a position.
    Hover(Box<HoverCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Highlight(cmd) => cmd.run(cli).await,
            Self::Lint(cmd) => cmd.run(cli).await,
            Self::Complete(cmd) => cmd.run(cli).await,
            Self::Hover(cmd) => cmd.run(cli).await,
        }
    }
}
