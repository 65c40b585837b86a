//! Helpers for locating names in document text.
//!
//! `graphql-parser` records where a node starts but not where its name is, so
//! ranges for names are recovered by searching the text from the node's
//! start.

use crate::Position;
use crate::Range;

/// Converts a one-based `graphql-parser` position to a zero-based
/// [`Position`].
pub(crate) fn position_from_pos(pos: graphql_parser::Pos) -> Position {
    Position::new(pos.line.saturating_sub(1), pos.column.saturating_sub(1))
}

fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

fn byte_offset(line: &str, character: usize) -> usize {
    line.char_indices()
        .nth(character)
        .map_or(line.len(), |(idx, _)| idx)
}

/// Finds the first whole-word occurrence of `needle` in `line` at or after
/// byte offset `from`, returning its byte offset.
fn find_word_in_line(line: &str, from: usize, needle: &str) -> Option<usize> {
    let checks_start = needle.starts_with(is_name_char);
    let checks_end = needle.ends_with(is_name_char);
    let haystack = line.get(from..)?;
    haystack.match_indices(needle)
        .map(|(idx, _)| from + idx)
        .find(|&start| {
            let end = start + needle.len();
            let before_ok = !checks_start
                || !line[..start].chars().next_back().is_some_and(is_name_char);
            let after_ok = !checks_end
                || !line[end..].chars().next().is_some_and(is_name_char);
            before_ok && after_ok
        })
}

/// The range of the first whole-word occurrence of `needle` at or after
/// `from`, searching forward across lines.
pub(crate) fn find_word(
    lines: &[&str],
    from: Position,
    needle: &str,
) -> Option<Range> {
    if needle.is_empty() {
        return None;
    }
    lines.iter()
        .enumerate()
        .skip(from.line)
        .find_map(|(line_idx, line)| {
            let start_byte =
                if line_idx == from.line { byte_offset(line, from.character) } else { 0 };
            let found = find_word_in_line(line, start_byte, needle)?;
            let start = line[..found].chars().count();
            Some(Range::on_line(line_idx, start, start + needle.chars().count()))
        })
}

/// The range of `needle` at or after the node starting at `pos`, or a
/// `needle`-wide range at `pos` itself when the text does not contain it.
pub(crate) fn name_range(
    lines: &[&str],
    pos: graphql_parser::Pos,
    needle: &str,
) -> Range {
    let start = position_from_pos(pos);
    find_word(lines, start, needle).unwrap_or_else(|| Range::on_line(
        start.line,
        start.character,
        start.character + needle.chars().count(),
    ))
}
