//! Tests that one [`crate::Schema`] serves many documents at once.

use crate::tests::utils::star_wars_schema;
use crate::Position;
use crate::get_autocomplete_suggestions;
use crate::get_diagnostics;
use rayon::prelude::*;

/// Verifies that diagnostics and completion may run concurrently against a
/// shared schema and agree with sequential runs.
#[test]
fn test_parallel_requests_share_schema() {
    let schema = star_wars_schema();
    let documents: Vec<String> = (0..64)
        .map(|idx| match idx % 3 {
            0 => "{ hero { name } }".to_string(),
            1 => format!("query Q{idx} {{ doesNotExist }}"),
            _ => "{ h".to_string(),
        })
        .collect();

    let sequential: Vec<usize> = documents.iter()
        .map(|text| get_diagnostics(text, Some(&schema)).len())
        .collect();
    let parallel: Vec<usize> = documents.par_iter()
        .map(|text| get_diagnostics(text, Some(&schema)).len())
        .collect();
    assert_eq!(sequential, parallel);

    let labels: Vec<Vec<String>> = documents.par_iter()
        .filter(|text| text.as_str() == "{ h")
        .map(|text| {
            get_autocomplete_suggestions(&schema, text, Position::new(0, 3))
                .into_iter()
                .map(|item| item.label)
                .collect()
        })
        .collect();
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|labels| labels == &["hero", "human", "__schema"]));
}
