use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

/// A fragment may not spread itself, directly or through other fragments.
pub struct NoFragmentCycles;
impl DocumentValidator for NoFragmentCycles {
    fn name(&self) -> &'static str {
        "NoFragmentCycles"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut search = CycleSearch {
            ctx,
            visited: HashSet::new(),
            spread_path: vec![],
            path_index: HashMap::new(),
            errors: vec![],
        };
        for fragment in ctx.fragments() {
            search.visit(fragment);
        }
        search.errors
    }
}

/// Depth-first search over fragment spreads. Each fragment is entered at
/// most once, so every cycle is reported once.
struct CycleSearch<'c, 'a> {
    ctx: &'c ValidationContext<'a>,
    visited: HashSet<&'a str>,
    spread_path: Vec<(&'a str, graphql_parser::Pos)>,
    path_index: HashMap<&'a str, usize>,
    errors: Vec<ValidationError>,
}
impl<'a> CycleSearch<'_, 'a> {
    fn visit(&mut self, fragment: &'a ast::query::FragmentDefinition) {
        let name = fragment.name.as_str();
        if !self.visited.insert(name) {
            return;
        }
        let spreads = self.ctx.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.path_index.insert(name, self.spread_path.len());
        for spread in spreads {
            let (spread_name, _) = spread;
            let cycle_start = self.path_index.get(spread_name).copied();
            self.spread_path.push(spread);
            match cycle_start {
                None => {
                    if let Some(spread_fragment) = self.ctx.fragment(spread_name) {
                        self.visit(spread_fragment);
                    }
                },
                Some(start) => self.report(spread_name, start),
            }
            self.spread_path.pop();
        }
        self.path_index.remove(name);
    }

    fn report(&mut self, spread_name: &str, start: usize) {
        let cycle = &self.spread_path[start..];
        let via: Vec<String> = cycle[..cycle.len() - 1]
            .iter()
            .map(|(name, _)| format!("\"{name}\""))
            .collect();
        let message =
            if via.is_empty() {
                format!("Cannot spread fragment \"{spread_name}\" within itself.")
            } else {
                format!(
                    "Cannot spread fragment \"{spread_name}\" within itself via {}.",
                    via.join(", "),
                )
            };
        let ranges = cycle.iter()
            .map(|(name, pos)| self.ctx.name_range(*pos, name))
            .collect();
        self.errors.push(ValidationError::new(message, ranges));
    }
}
