/// A character stream over a single line of text.
///
/// The cursor tracks two byte offsets into the line: the start of the token
/// currently being scanned and the current read position. Reading never goes
/// past the end of the line; lookahead simply reports `None` once the line is
/// exhausted. Multi-line constructs are handled by the parser carrying state
/// from one cursor to the next, never by the cursor itself.
///
/// # Indexing Convention
///
/// All offsets accepted and returned by the cursor are 0-based byte offsets
/// within the line. [`CharacterCursor::column_of`] converts a byte offset into
/// a 0-based character column for editor-facing positions.
#[derive(Clone, Debug)]
pub struct CharacterCursor<'src> {
    line: &'src str,
    start: usize,
    pos: usize,
}

impl<'src> CharacterCursor<'src> {
    pub fn new(line: &'src str) -> Self {
        Self {
            line,
            start: 0,
            pos: 0,
        }
    }

    /// The full text of the line this cursor reads from.
    pub fn line(&self) -> &'src str {
        self.line
    }

    /// Marks the current position as the start of the next token.
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    pub fn start_of_token(&self) -> usize {
        self.start
    }

    pub fn current_position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor is at the start of the line.
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// Whether the cursor has consumed the entire line.
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character after the next one without consuming anything.
    pub fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Consumes and returns the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character if it satisfies `predicate`.
    pub fn eat(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if predicate(ch) => {
                self.pos += ch.len_utf8();
                Some(ch)
            },
            _ => None,
        }
    }

    /// Consumes characters while `predicate` holds and returns the consumed
    /// text (possibly empty).
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let begin = self.pos;
        while self.eat(&predicate).is_some() {}
        &self.line[begin..self.pos]
    }

    /// Consumes Unicode whitespace and returns the consumed text.
    pub fn eat_space(&mut self) -> &'src str {
        self.eat_while(char::is_whitespace)
    }

    /// Matches `literal` at the current position. When `consume` is true the
    /// cursor advances past the match.
    pub fn match_literal(
        &mut self,
        literal: &str,
        consume: bool,
    ) -> Option<&'src str> {
        if literal.is_empty() || !self.remaining().starts_with(literal) {
            return None;
        }
        let matched = &self.line[self.pos..self.pos + literal.len()];
        if consume {
            self.pos += literal.len();
        }
        Some(matched)
    }

    /// Matches using a scanner function that receives the remaining text and
    /// returns the byte length of its match. Zero-length matches count as no
    /// match.
    pub fn match_pattern(
        &mut self,
        scanner: impl Fn(&str) -> Option<usize>,
        consume: bool,
    ) -> Option<&'src str> {
        let remaining = self.remaining();
        let len = scanner(remaining).filter(|len| *len > 0)?;
        let matched = remaining.get(..len)?;
        if consume {
            self.pos += len;
        }
        Some(matched)
    }

    /// Moves the cursor back by `n` characters, never before the start of the
    /// line.
    pub fn back_up(&mut self, n: usize) {
        for _ in 0..n {
            match self.line[..self.pos].chars().next_back() {
                Some(ch) => self.pos -= ch.len_utf8(),
                None => break,
            }
        }
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Moves the cursor to the byte offset `pos`, clamped to the line and
    /// rounded down to a character boundary.
    pub fn skip_to(&mut self, pos: usize) {
        let mut pos = pos.min(self.line.len());
        while !self.line.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// The text of the token scanned so far.
    pub fn current(&self) -> &'src str {
        &self.line[self.start..self.pos]
    }

    /// The unread remainder of the line.
    pub fn remaining(&self) -> &'src str {
        &self.line[self.pos..]
    }

    /// Width of the line's leading whitespace, expanding tabs to `tab_size`.
    pub fn indentation(&self, tab_size: usize) -> usize {
        self.line
            .chars()
            .take_while(|ch| *ch == ' ' || *ch == '\t')
            .fold(0, |width, ch| {
                if ch == '\t' && tab_size > 0 {
                    width + tab_size - (width % tab_size)
                } else {
                    width + 1
                }
            })
    }

    /// Converts a byte offset within the line into a character column.
    pub fn column_of(&self, byte_offset: usize) -> usize {
        let byte_offset = byte_offset.min(self.line.len());
        self.line
            .char_indices()
            .take_while(|(idx, _)| *idx < byte_offset)
            .count()
    }

    /// The character column of the current position.
    pub fn current_column(&self) -> usize {
        self.column_of(self.pos)
    }
}
