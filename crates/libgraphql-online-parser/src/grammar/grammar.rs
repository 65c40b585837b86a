use crate::grammar::Production;
use crate::grammar::RuleKind;
use crate::grammar::graphql_grammar;
use crate::grammar::results_grammar;
use crate::grammar::variables_grammar;
use crate::LexDialect;
use indexmap::IndexMap;
use std::sync::LazyLock;

static GRAPHQL: LazyLock<Grammar> = LazyLock::new(graphql_grammar::build);
static VARIABLES: LazyLock<Grammar> = LazyLock::new(variables_grammar::build);
static RESULTS: LazyLock<Grammar> = LazyLock::new(results_grammar::build);

/// An immutable grammar table: a root rule, the lexical dialect its tokens
/// come from, and a production for every [`RuleKind`] it uses.
///
/// The bundled grammars are built once per process and shared by reference.
#[derive(Debug)]
pub struct Grammar {
    name: &'static str,
    root: RuleKind,
    dialect: LexDialect,
    productions: IndexMap<RuleKind, Production>,
}

impl Grammar {
    /// GraphQL executable documents and SDL.
    pub fn graphql() -> &'static Grammar {
        &GRAPHQL
    }

    /// The JSON-like variables panel.
    pub fn variables() -> &'static Grammar {
        &VARIABLES
    }

    /// The read-only JSON results panel.
    pub fn results() -> &'static Grammar {
        &RESULTS
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root(&self) -> RuleKind {
        self.root
    }

    pub fn dialect(&self) -> LexDialect {
        self.dialect
    }

    pub fn production(&self, kind: RuleKind) -> Option<&Production> {
        self.productions.get(&kind)
    }

    pub fn rule_kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.productions.keys().copied()
    }
}

/// Assembles a [`Grammar`]. The zero-length `Invalid` and `Comment`
/// productions are added to every grammar.
pub(crate) struct GrammarBuilder {
    name: &'static str,
    root: RuleKind,
    dialect: LexDialect,
    productions: IndexMap<RuleKind, Production>,
}

impl GrammarBuilder {
    pub(crate) fn new(
        name: &'static str,
        root: RuleKind,
        dialect: LexDialect,
    ) -> Self {
        Self {
            name,
            root,
            dialect,
            productions: IndexMap::new(),
        }
    }

    pub(crate) fn rule(mut self, kind: RuleKind, production: Production) -> Self {
        if self.productions.insert(kind, production).is_some() {
            log::warn!("grammar `{}` redefines rule `{kind}`", self.name);
        }
        self
    }

    pub(crate) fn build(mut self) -> Grammar {
        self.productions
            .insert(RuleKind::Invalid, Production::Sequence(vec![]));
        self.productions
            .insert(RuleKind::Comment, Production::Sequence(vec![]));
        log::debug!(
            "built grammar `{}` with {} productions",
            self.name,
            self.productions.len(),
        );
        Grammar {
            name: self.name,
            root: self.root,
            dialect: self.dialect,
            productions: self.productions,
        }
    }
}
