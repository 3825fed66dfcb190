//! Character reader for the text format.

use alloc::string::String;

use crate::error::ParseError;

/// Characters which end a text, and must be escaped inside one.
///
/// `(` only opens a keyed payload, so it is ordinary text afterwards.
pub(crate) const DELIMITERS: [char; 4] = ['[', ']', ')', ','];

/// Escape character.
pub(crate) const ESCAPE: char = '\\';

/// Keyword for an absent node.
pub(crate) const NULL: &str = "null";

/// Cursor over the source text of a tree.
///
/// Payload formats use this to read their part of the input.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// Source text.
    source: &'a str,
    /// Byte position of the next character.
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader at the beginning of `source`.
    #[inline]
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte position of the next character.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread part of the input.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns the next character without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Skips whitespace and consumes `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Expected`] if another character follows, and
    /// [`ParseError::UnexpectedEnd`] if the input is exhausted.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(_) => Err(ParseError::Expected(expected)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Skips whitespace and consumes `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` if the next word (a run of ASCII letters after
    /// whitespace) is exactly `keyword`. Otherwise nothing is consumed.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let start = self.pos;
        self.skip_whitespace();
        let rest = self.rest();
        let word_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if &rest[..word_len] == keyword {
            self.pos += word_len;
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// Reads an escaped text up to (not including) one of `terminators`.
    ///
    /// Leading and trailing unescaped whitespace is dropped, and `\x` yields
    /// a literal `x`.
    ///
    /// # Errors
    ///
    /// * Returns [`ParseError::MalformedPayload`] on an unescaped delimiter
    ///   which is not a terminator.
    /// * Returns [`ParseError::UnexpectedEnd`] if the input ends before a
    ///   terminator.
    pub fn read_text(&mut self, terminators: &[char]) -> Result<String, ParseError> {
        self.skip_whitespace();
        let mut text = String::new();
        // Length of `text` up to the last character that must be kept.
        let mut keep = 0;
        loop {
            let c = self.peek().ok_or(ParseError::UnexpectedEnd)?;
            if terminators.contains(&c) {
                break;
            }
            self.pos += c.len_utf8();
            if c == ESCAPE {
                let escaped = self.bump().ok_or(ParseError::UnexpectedEnd)?;
                text.push(escaped);
                keep = text.len();
            } else if DELIMITERS.contains(&c) {
                return Err(ParseError::MalformedPayload);
            } else {
                text.push(c);
                if !c.is_whitespace() {
                    keep = text.len();
                }
            }
        }
        text.truncate(keep);

        Ok(text)
    }
}

/// Appends `text` to `out`, escaping `,`, `[`, `]`, `)`, and `\`.
///
/// Whitespace at either edge is escaped as well, so that it survives the
/// trimming done by [`Reader::read_text`].
pub fn escape_into(text: &str, out: &mut String) {
    let last = text.char_indices().last().map(|(i, _)| i);
    for (i, c) in text.char_indices() {
        let at_edge = i == 0 || Some(i) == last;
        if c == ESCAPE || DELIMITERS.contains(&c) || (at_edge && c.is_whitespace()) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

/// Returns true if a bare text would be read back as the null keyword.
#[must_use]
pub(crate) fn starts_with_null(text: &str) -> bool {
    text.strip_prefix(NULL)
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_ascii_alphabetic()))
}
