use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const QUERY: &str = include_str!("query.graphql");
pub const VARIABLES: &str = include_str!("variables.json");

/// Generates a query whose selection sets nest `depth` levels deep, one
/// field per line.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}child{level} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}}}");
    }
    out.push_str("}\n");
    out
}

/// Generates `count` copies of [`QUERY`] with every fourth line broken by a
/// stray `%`, so recovery paths are exercised as often as the happy path.
pub fn damaged_queries(count: usize) -> String {
    let mut out = String::with_capacity(QUERY.len() * count);
    for _ in 0..count {
        for (idx, line) in QUERY.lines().enumerate() {
            if idx % 4 == 3 {
                let _ = writeln!(out, "{line} % }}");
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
    }
    out
}
