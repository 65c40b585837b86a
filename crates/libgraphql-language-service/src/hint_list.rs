//! Filters and ranks completion candidates against the word being typed.

use crate::CompletionItem;

/// Candidates further than this from the typed text are dropped (unless
/// that would drop every candidate).
const MAX_PROXIMITY: f64 = 2.0;

/// Narrows `items` to those close to `typed`, best matches first.
///
/// With nothing typed (or only punctuation) every non-deprecated item is
/// kept in its original order. Otherwise items are ranked by
/// [`lexical_distance`], adjusted so long labels that start with the typed
/// text are not penalized for their length. Deprecated items only survive
/// when nothing else does.
pub fn hint_list(typed: &str, items: Vec<CompletionItem>) -> Vec<CompletionItem> {
    let text = normalize_text(typed);
    if text.is_empty() {
        return filter_non_empty(items, |item| !item.is_deprecated);
    }

    let by_proximity: Vec<(f64, CompletionItem)> = items.into_iter()
        .map(|item| (proximity(&normalize_text(&item.label), &text), item))
        .collect();
    let close = filter_non_empty(by_proximity, |(proximity, _)| *proximity <= MAX_PROXIMITY);
    let mut ranked = filter_non_empty(close, |(_, item)| !item.is_deprecated);
    ranked.sort_by(|(proximity_a, a), (proximity_b, b)| {
        a.is_deprecated.cmp(&b.is_deprecated)
            .then(proximity_a.total_cmp(proximity_b))
            .then(a.label.chars().count().cmp(&b.label.chars().count()))
    });
    ranked.into_iter().map(|(_, item)| item).collect()
}

/// Keeps the entries matching `predicate`, unless none do.
fn filter_non_empty<T>(entries: Vec<T>, predicate: impl Fn(&T) -> bool) -> Vec<T> {
    if entries.iter().any(&predicate) {
        entries.into_iter().filter(|entry| predicate(entry)).collect()
    } else {
        entries
    }
}

/// Lowercases `text` and drops everything but ASCII letters, digits and
/// underscores.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|ch| *ch == '_' || ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn proximity(suggestion: &str, text: &str) -> f64 {
    let mut proximity = lexical_distance(text, suggestion) as f64;
    let suggestion_len = suggestion.chars().count();
    let text_len = text.chars().count();
    if suggestion_len > text_len {
        proximity -= (suggestion_len - text_len - 1) as f64;
        if !suggestion.starts_with(text) {
            proximity += 0.5;
        }
    }
    proximity
}

/// The number of single-character insertions, deletions, substitutions and
/// adjacent transpositions needed to turn `a` into `b`.
pub fn lexical_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
            }
        }
    }
    d[a.len()][b.len()]
}
