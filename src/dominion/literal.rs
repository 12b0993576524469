//! Strict reader for the list literals the portal embeds in hidden inputs.
//!
//! The usage chart data arrives as text such as `[[0, 812], [1, 790]]`. It is
//! read as data only: numbers, quoted strings, `None`/`True`/`False` and nested
//! lists or tuples. Anything else is rejected with the offset where reading
//! stopped.

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
    List(Vec<Literal>),
}

impl Literal {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(v) => Some(*v as f64),
            Literal::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Literal::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Parses `input` as a single literal, rejecting trailing content.
///
/// `element` names where the text came from and ends up in any error.
pub fn parse_literal(input: &str, element: &str) -> Result<Literal, ParseError> {
    let mut reader = Reader {
        input,
        pos: 0,
        element,
    };
    reader.skip_whitespace();
    let value = reader.value(0)?;
    reader.skip_whitespace();
    if reader.pos != input.len() {
        return Err(reader.error("trailing characters after literal"));
    }
    Ok(value)
}

// Nesting deeper than this is never produced by the portal.
const MAX_DEPTH: usize = 32;

struct Reader<'a> {
    input: &'a str,
    pos: usize,
    element: &'a str,
}

impl Reader<'_> {
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::Literal {
            element: self.element.to_string(),
            position: self.pos,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.error("literal nested too deeply"));
        }
        match self.peek() {
            Some('[') => self.sequence('[', ']', depth),
            Some('(') => self.sequence('(', ')', depth),
            Some(q @ ('\'' | '"')) => self.string(q),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.keyword(),
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn sequence(&mut self, open: char, close: char, depth: usize) -> Result<Literal, ParseError> {
        debug_assert_eq!(self.peek(), Some(open));
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(Literal::List(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(Literal::List(items)),
                Some(c) => {
                    self.pos -= c.len_utf8();
                    return Err(self.error(format!("expected ',' or '{}', found '{}'", close, c)));
                }
                None => return Err(self.error(format!("unterminated sequence, expected '{}'", close))),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<Literal, ParseError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(Literal::Str(out)),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => return Err(self.error(format!("unsupported escape '\\{}'", c))),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn number(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_')
        ) {
            self.bump();
        }
        let text: String = self.input[start..self.pos].chars().filter(|c| *c != '_').collect();
        if let Ok(v) = text.parse::<i64>() {
            return Ok(Literal::Int(v));
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Literal::Float(v)),
            _ => {
                self.pos = start;
                Err(self.error(format!("invalid number '{}'", text)))
            }
        }
    }

    fn keyword(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.input[start..self.pos] {
            "None" | "null" => Ok(Literal::None),
            "True" | "true" => Ok(Literal::Bool(true)),
            "False" | "false" => Ok(Literal::Bool(false)),
            word => {
                let word = word.to_string();
                self.pos = start;
                Err(self.error(format!("unexpected identifier '{}'", word)))
            }
        }
    }
}
