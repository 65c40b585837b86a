//! A JSON parser that keeps the range of every value and key, for linting
//! the variables panel.
//!
//! The top-level value must be an object. Parsing stops at the first error.

use crate::Position;
use crate::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct JsonNode {
    pub kind: JsonNodeKind,
    pub range: Range,
}

#[derive(Clone, Debug, PartialEq)]
pub enum JsonNodeKind {
    Object(Vec<JsonMember>),
    Array(Vec<JsonNode>),
    String(String),

    /// The number as written, alongside its value.
    Number(String, f64),

    Boolean(bool),
    Null,
}

/// One `"key": value` entry of an object.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonMember {
    pub key: String,
    pub key_range: Range,
    pub value: JsonNode,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct JsonSyntaxError {
    pub message: String,
    pub range: Range,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Kind {
    Punctuation(char),
    String,
    Number,
    Boolean,
    Null,
    Eof,
}
impl Kind {
    fn describe(self) -> String {
        match self {
            Self::Punctuation(ch) => ch.to_string(),
            Self::String => "String".to_string(),
            Self::Number => "Number".to_string(),
            Self::Boolean => "Boolean".to_string(),
            Self::Null => "Null".to_string(),
            Self::Eof => "EOF".to_string(),
        }
    }
}

/// Parses `text`, which must hold exactly one JSON object.
pub fn parse_json_object(text: &str) -> Result<JsonNode, JsonSyntaxError> {
    let mut parser = JsonParser::new(text);
    parser.lex()?;
    let object = parser.parse_object()?;
    parser.expect(Kind::Eof, "EOF")?;
    Ok(object)
}

struct JsonParser {
    chars: Vec<char>,

    /// Line and column of every entry of `chars`, plus one past the end.
    positions: Vec<Position>,

    kind: Kind,
    start: usize,
    end: usize,
    last_end: usize,
}
impl JsonParser {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut positions = Vec::with_capacity(chars.len() + 1);
        let mut position = Position::new(0, 0);
        for ch in &chars {
            positions.push(position);
            position =
                if *ch == '\n' {
                    Position::new(position.line + 1, 0)
                } else {
                    Position::new(position.line, position.character + 1)
                };
        }
        positions.push(position);
        Self {
            chars,
            positions,
            kind: Kind::Eof,
            start: 0,
            end: 0,
            last_end: 0,
        }
    }

    fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.positions[start], self.positions[end])
    }

    fn error(&self, message: impl Into<String>) -> JsonSyntaxError {
        JsonSyntaxError {
            message: message.into(),
            range: self.range(self.start, self.end.max(self.start)),
        }
    }

    fn token_text(&self) -> String {
        self.chars[self.start..self.end].iter().collect()
    }

    fn parse_object(&mut self) -> Result<JsonNode, JsonSyntaxError> {
        let node_start = self.start;
        let mut members = vec![];
        self.expect(Kind::Punctuation('{'), "{")?;
        if !self.skip(Kind::Punctuation('}'))? {
            loop {
                members.push(self.parse_member()?);
                if !self.skip(Kind::Punctuation(','))? {
                    break;
                }
            }
            self.expect(Kind::Punctuation('}'), "}")?;
        }
        Ok(JsonNode {
            kind: JsonNodeKind::Object(members),
            range: self.range(node_start, self.last_end),
        })
    }

    fn parse_member(&mut self) -> Result<JsonMember, JsonSyntaxError> {
        let key = (self.kind == Kind::String)
            .then(|| (self.string_value(), self.range(self.start, self.end)));
        self.expect(Kind::String, "String")?;
        self.expect(Kind::Punctuation(':'), ":")?;
        let value = self.parse_value()?;
        let (key, key_range) = key.ok_or_else(|| self.error("Expected String."))?;
        Ok(JsonMember { key, key_range, value })
    }

    fn parse_array(&mut self) -> Result<JsonNode, JsonSyntaxError> {
        let node_start = self.start;
        let mut values = vec![];
        self.expect(Kind::Punctuation('['), "[")?;
        if !self.skip(Kind::Punctuation(']'))? {
            loop {
                values.push(self.parse_value()?);
                if !self.skip(Kind::Punctuation(','))? {
                    break;
                }
            }
            self.expect(Kind::Punctuation(']'), "]")?;
        }
        Ok(JsonNode {
            kind: JsonNodeKind::Array(values),
            range: self.range(node_start, self.last_end),
        })
    }

    fn parse_value(&mut self) -> Result<JsonNode, JsonSyntaxError> {
        let kind = match self.kind {
            Kind::Punctuation('[') => return self.parse_array(),
            Kind::Punctuation('{') => return self.parse_object(),
            Kind::String => JsonNodeKind::String(self.string_value()),
            Kind::Number => {
                let raw = self.token_text();
                let value = raw.parse::<f64>()
                    .map_err(|_| self.error("Expected decimal digit."))?;
                JsonNodeKind::Number(raw, value)
            },
            Kind::Boolean => JsonNodeKind::Boolean(self.chars[self.start] == 't'),
            Kind::Null => JsonNodeKind::Null,
            _ => return Err(self.expected("Value")),
        };
        let range = self.range(self.start, self.end);
        self.lex()?;
        Ok(JsonNode { kind, range })
    }

    /// Decodes the escapes of the current (already validated) string token.
    fn string_value(&self) -> String {
        let body = &self.chars[self.start + 1..self.end.saturating_sub(1).max(self.start + 1)];
        let mut value = String::with_capacity(body.len());
        let mut idx = 0;
        while idx < body.len() {
            let ch = body[idx];
            idx += 1;
            if ch != '\\' {
                value.push(ch);
                continue;
            }
            let Some(&escaped) = body.get(idx) else {
                break;
            };
            idx += 1;
            match escaped {
                'b' => value.push('\u{8}'),
                'f' => value.push('\u{c}'),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'u' => {
                    let hex: String = body[idx..(idx + 4).min(body.len())].iter().collect();
                    idx += 4;
                    let code = u32::from_str_radix(&hex, 16).unwrap_or(0xfffd);
                    value.push(char::from_u32(code).unwrap_or('\u{fffd}'));
                },
                other => value.push(other),
            }
        }
        value
    }

    fn expected(&self, what: &str) -> JsonSyntaxError {
        let found =
            if self.kind == Kind::Eof {
                "[end of file]".to_string()
            } else {
                format!("`{}`", self.token_text())
            };
        self.error(format!("Expected {what} but found {found}."))
    }

    fn expect(&mut self, kind: Kind, what: &str) -> Result<(), JsonSyntaxError> {
        if self.kind == kind {
            return self.lex();
        }
        log::trace!("expected {} but found {}", kind.describe(), self.kind.describe());
        Err(self.expected(what))
    }

    fn skip(&mut self, kind: Kind) -> Result<bool, JsonSyntaxError> {
        if self.kind == kind {
            self.lex()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.end).copied()
    }

    fn lex(&mut self) -> Result<(), JsonSyntaxError> {
        self.last_end = self.end;
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.end += 1;
        }
        self.start = self.end;

        let Some(ch) = self.peek() else {
            self.kind = Kind::Eof;
            return Ok(());
        };
        match ch {
            '"' => {
                self.kind = Kind::String;
                self.read_string()
            },
            '-' | '0'..='9' => {
                self.kind = Kind::Number;
                self.read_number()
            },
            _ => {
                for (word, kind) in [("false", Kind::Boolean), ("true", Kind::Boolean), ("null", Kind::Null)] {
                    if self.chars[self.start..].starts_with(&word.chars().collect::<Vec<_>>()) {
                        self.end += word.len();
                        self.kind = kind;
                        return Ok(());
                    }
                }
                self.end += 1;
                if !matches!(ch, '{' | '}' | '[' | ']' | ':' | ',') {
                    // An unknown character reads as the rest of its word.
                    while self.peek().is_some_and(|next| next.is_alphanumeric() || next == '_') {
                        self.end += 1;
                    }
                }
                self.kind = Kind::Punctuation(ch);
                Ok(())
            },
        }
    }

    fn read_string(&mut self) -> Result<(), JsonSyntaxError> {
        self.end += 1;
        loop {
            match self.peek() {
                Some('"') => {
                    self.end += 1;
                    return Ok(());
                },
                Some('\\') => {
                    self.end += 1;
                    match self.peek() {
                        Some('"' | '/' | '\\' | 'b' | 'f' | 'n' | 'r' | 't') => self.end += 1,
                        Some('u') => {
                            self.end += 1;
                            for _ in 0..4 {
                                if !self.peek().is_some_and(|ch| ch.is_ascii_hexdigit()) {
                                    return Err(self.error("Expected hexadecimal digit."));
                                }
                                self.end += 1;
                            }
                        },
                        _ => return Err(self.error("Bad character escape sequence.")),
                    }
                },
                Some(ch) if ch >= ' ' => self.end += 1,
                _ => return Err(self.error("Unterminated string.")),
            }
        }
    }

    fn read_number(&mut self) -> Result<(), JsonSyntaxError> {
        if self.peek() == Some('-') {
            self.end += 1;
        }
        if self.peek() == Some('0') {
            self.end += 1;
        } else {
            self.read_digits()?;
        }
        if self.peek() == Some('.') {
            self.end += 1;
            self.read_digits()?;
        }
        if let Some('e' | 'E') = self.peek() {
            self.end += 1;
            if let Some('+' | '-') = self.peek() {
                self.end += 1;
            }
            self.read_digits()?;
        }
        Ok(())
    }

    fn read_digits(&mut self) -> Result<(), JsonSyntaxError> {
        if !self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            return Err(self.error("Expected decimal digit."));
        }
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.end += 1;
        }
        Ok(())
    }
}
