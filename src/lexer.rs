use std::iter::FusedIterator;

use crate::syntax::PathSyntax;

/// What a path token addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A map key (`service`)
    Key,
    /// A bracketed list index, brackets included (`[0]`)
    Index,
}

/// One unit of a path, borrowed from the path string.
///
/// `offset` is the byte position of `text` within the path, which lets the
/// resolver tell whether an index is glued to the key before it
/// (`component[0]`) or stands alone (`component.[0]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn key(text: &'a str, offset: usize) -> Self {
        Token {
            kind: TokenKind::Key,
            text,
            offset,
        }
    }

    pub fn index(text: &'a str, offset: usize) -> Self {
        Token {
            kind: TokenKind::Index,
            text,
            offset,
        }
    }

    /// Byte position just past the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Parses the number between the brackets of an index token.
    ///
    /// Only plain decimal digits are accepted: `[007]` is 7, while `[-1]`,
    /// `[+1]`, `[]` and `[n]` yield `None`, as does a key token.
    ///
    /// ```
    /// use treepath::{Lexer, PathSyntax};
    ///
    /// let syntax = PathSyntax::default();
    /// let tokens: Vec<_> = Lexer::new("list[007]").collect();
    /// assert_eq!(tokens[1].index_value(&syntax), Some(7));
    /// assert_eq!(tokens[0].index_value(&syntax), None);
    /// ```
    pub fn index_value(&self, syntax: &PathSyntax) -> Option<usize> {
        if self.kind != TokenKind::Index {
            return None;
        }
        let digits = self
            .text
            .strip_prefix(syntax.open)?
            .strip_suffix(syntax.close)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// Splits a path into key and index tokens, lazily.
///
/// Delimiters separate segments and runs of them collapse (`a..b` reads as
/// `a.b`). Inside a segment an open bracket starts an index that ends at the
/// next close bracket; the key before it, if any, becomes its own token. A
/// second open bracket before the close restarts the index and leaves the
/// first one in the key, so `key[[2]` reads as `key[` followed by `[2]`. A
/// segment whose bracket never closes is kept whole as a key.
///
/// ```
/// use treepath::Lexer;
///
/// let texts: Vec<_> = Lexer::new("service.component[1].name").map(|t| t.text).collect();
/// assert_eq!(texts, ["service", "component", "[1]", "name"]);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    syntax: PathSyntax,
    /// Index token split off the key that was just returned
    pending: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_syntax(input, PathSyntax::default())
    }

    pub fn with_syntax(input: &'a str, syntax: PathSyntax) -> Self {
        Lexer {
            input,
            position: 0,
            syntax,
            pending: None,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_delimiters(&mut self) {
        while self.current_char() == Some(self.syntax.delimiter) {
            self.advance();
        }
    }

    fn read_segment(&mut self) -> Token<'a> {
        let input = self.input;
        let start = self.position;
        let mut open_at = None;

        while let Some(ch) = self.current_char() {
            if ch == self.syntax.delimiter {
                break;
            }
            if ch == self.syntax.open {
                open_at = Some(self.position);
            } else if ch == self.syntax.close {
                if let Some(open) = open_at {
                    self.advance();
                    let index = Token::index(&input[open..self.position], open);
                    if open == start {
                        return index;
                    }
                    self.pending = Some(index);
                    return Token::key(&input[start..open], start);
                }
            }
            self.advance();
        }

        Token::key(&input[start..self.position], start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        self.skip_delimiters();
        self.current_char()?;
        Some(self.read_segment())
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(path: &str) -> Vec<&str> {
        Lexer::new(path).map(|t| t.text).collect()
    }

    #[test]
    fn test_offsets_track_source() {
        let tokens: Vec<_> = Lexer::new("a.bc[2]").collect();
        assert_eq!(tokens[0], Token::key("a", 0));
        assert_eq!(tokens[1], Token::key("bc", 2));
        assert_eq!(tokens[2], Token::index("[2]", 4));
        assert_eq!(tokens[1].end(), tokens[2].offset);
    }

    #[test]
    fn test_nested_open_bracket() {
        assert_eq!(texts("key[[2]"), ["key[", "[2]"]);
        assert_eq!(texts("[[2]"), ["[", "[2]"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(texts("größe.wert[1]"), ["größe", "wert", "[1]"]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
