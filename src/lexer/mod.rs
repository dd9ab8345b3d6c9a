//! Indentation-sensitive lexer: bytes in, a bound-annotated token list out.
//!
//! Tokenization and bound computation happen in the same pass: `Lexer::scan`
//! walks the source once, and each emitted token is immediately threaded
//! into the pending-bound stack described in the module-level docs below.

mod cursor;
mod punctuation;

pub use cursor::Cursor;

use crate::error::LexError;
use crate::field_tree::FieldTree;
use crate::log::Log;
use crate::token::{Token, TokenKind, TokenPos};

const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    (".module", TokenKind::Module),
    (".import", TokenKind::Import),
    (".alias", TokenKind::Alias),
    (".domain", TokenKind::Domain),
    (".enum", TokenKind::Enum),
    (".record", TokenKind::Record),
    (".object", TokenKind::Object),
    (".instance", TokenKind::Instance),
    (".class", TokenKind::Class),
    (".cmd", TokenKind::Cmd),
    (".intrinsic", TokenKind::Intrinsic),
    (".program", TokenKind::Program),
    (".test", TokenKind::Test),
];

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    punctuation: FieldTree<TokenKind>,
    log: Log,
    /// Stack of token indices awaiting a bound, ordered by strictly
    /// decreasing column (the top of the stack has the largest column).
    pending: Vec<TokenPos>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, tab_width: usize) -> Self {
        Self {
            cursor: Cursor::new(source.as_bytes(), tab_width),
            punctuation: punctuation::build_table(),
            log: Log::None,
            pending: Vec::new(),
            tokens: Vec::new(),
        }
    }

    pub fn set_log(&mut self, log: Log) {
        self.log = log;
    }

    /// Scan the whole input, returning the bound-annotated token list.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_at_end() {
                break;
            }
            let (line, column) = (self.cursor.line(), self.cursor.column());
            let kind_and_text = self.scan_token()?;
            if let Some((kind, text)) = kind_and_text {
                self.push_token(Token::new(kind, text, line, column));
            }
        }
        Ok(self.tokens)
    }

    fn push_token(&mut self, token: Token) {
        let pos = self.tokens.len();
        let column = token.column;
        self.tokens.push(token);
        while let Some(&top) = self.pending.last() {
            if self.tokens[top].column >= column {
                self.tokens[top].bound = Some(pos);
                self.pending.pop();
            } else {
                break;
            }
        }
        self.pending.push(pos);
        self.log.log_success("Lexer", &self.tokens[pos]);
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => {
                    self.cursor.advance();
                }
                Some(b';') => {
                    while !self.cursor.is_at_end() && self.cursor.current() != Some(b'\n') {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(self.cursor.line(), self.cursor.column(), message)
    }

    fn error_at(&self, line: usize, column: usize, message: impl Into<String>) -> LexError {
        LexError::new(line, column, message)
    }

    fn scan_token(&mut self) -> Result<Option<(TokenKind, String)>, LexError> {
        let c = self.cursor.current().expect("caller checked not at end");
        match c {
            b'0'..=b'9' => self.scan_number().map(Some),
            b'"' => self.scan_string().map(Some),
            b'.' => self.scan_reserved_word().map(Some),
            b'\'' => self.scan_identifier().map(Some),
            c if c.is_ascii_alphabetic() => self.scan_identifier().map(Some),
            _ => self.scan_punctuation().map(Some),
        }
    }

    fn scan_number(&mut self) -> Result<(TokenKind, String), LexError> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        if self.cursor.current() == Some(b'0') && self.cursor.peek(1) == Some(b'x') {
            self.cursor.advance();
            self.cursor.advance();
            let start = self.cursor.index();
            let mut digits = 0usize;
            while matches!(self.cursor.current(), Some(c) if c.is_ascii_hexdigit()) {
                self.cursor.advance();
                digits += 1;
            }
            if digits == 0 || digits % 2 != 0 {
                return Err(self.error_at(line, column, "invalid hex value"));
            }
            let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
            return Ok((TokenKind::Hex, text));
        }

        let start = self.cursor.index();
        while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
            self.cursor.advance();
        }
        if self.cursor.current() == Some(b'.')
            && matches!(self.cursor.peek(1), Some(c) if c.is_ascii_digit())
        {
            self.cursor.advance();
            while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
                self.cursor.advance();
            }
            if matches!(self.cursor.current(), Some(c) if c.is_ascii_alphabetic() || c == b'.') {
                return Err(self.error_at(line, column, "invalid number"));
            }
            let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
            return Ok((TokenKind::Decimal, text));
        }
        if matches!(self.cursor.current(), Some(c) if c.is_ascii_alphabetic() || c == b'.') {
            return Err(self.error_at(line, column, "invalid number"));
        }
        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        Ok((TokenKind::Number, text))
    }

    fn scan_identifier(&mut self) -> Result<(TokenKind, String), LexError> {
        let start = self.cursor.index();
        let mut case_byte = self.cursor.current().unwrap();
        if case_byte == b'\'' {
            self.cursor.advance();
            case_byte = self
                .cursor
                .current()
                .ok_or_else(|| self.error("invalid identifier"))?;
        }
        self.cursor.advance();
        while matches!(self.cursor.current(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.cursor.advance();
        }
        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        let kind = if case_byte.is_ascii_uppercase() {
            TokenKind::Typename
        } else {
            TokenKind::Identifier
        };
        Ok((kind, text))
    }

    fn scan_reserved_word(&mut self) -> Result<(TokenKind, String), LexError> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        let start = self.cursor.index();
        self.cursor.advance(); // '.'
        if !matches!(self.cursor.current(), Some(c) if c.is_ascii_alphabetic()) {
            return Err(self.error_at(line, column, "invalid reserved word"));
        }
        while matches!(self.cursor.current(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.cursor.advance();
        }
        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        match RESERVED_WORDS.iter().find(|(s, _)| *s == text) {
            Some((_, kind)) => Ok((*kind, text)),
            None => Err(self.error_at(line, column, "invalid reserved word")),
        }
    }

    fn scan_string(&mut self) -> Result<(TokenKind, String), LexError> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance(); // opening quote
        let start = self.cursor.index();
        loop {
            match self.cursor.current() {
                None => return Err(self.error_at(line, column, "invalid string")),
                Some(b'\n') => return Err(self.error_at(line, column, "invalid string")),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        Some(c) if c.is_ascii_alphabetic() || c == b'\\' => {
                            self.cursor.advance();
                        }
                        _ => return Err(self.error_at(line, column, "invalid string")),
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        self.cursor.advance(); // closing quote
        Ok((TokenKind::StringLit, text))
    }

    fn scan_punctuation(&mut self) -> Result<(TokenKind, String), LexError> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        let start = self.cursor.index();
        let remaining = self.cursor.slice_from_current();
        match self.punctuation.find(remaining) {
            Some((kind, len)) if len > 0 => {
                for _ in 0..len {
                    self.cursor.advance();
                }
                let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
                Ok((kind, text))
            }
            _ => Err(self.error_at(line, column, "invalid character")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(src, 4).scan()
    }

    #[test]
    fn basic_mix() {
        let tokens = scan(r#"abc 0xFF 12.5 "x""#).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Hex,
                TokenKind::Decimal,
                TokenKind::StringLit,
            ]
        );
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].text, "FF");
        assert_eq!(tokens[2].text, "12.5");
        assert_eq!(tokens[3].text, "x");
    }

    #[test]
    fn bounds_follow_indentation() {
        let tokens = scan("a b\n c\nd\n").unwrap();
        let text_of = |b: Option<TokenPos>| b.map(|p| tokens[p].text.clone());
        assert_eq!(tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(text_of(tokens[0].bound), Some("d".to_string()));
        assert_eq!(text_of(tokens[1].bound), Some("c".to_string()));
        assert_eq!(text_of(tokens[2].bound), Some("d".to_string()));
        assert_eq!(tokens[3].bound, None);
    }

    #[test]
    fn odd_hex_digit_count_is_an_error() {
        let err = scan("0xFFF").unwrap_err();
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn maximal_munch_prefers_longer_operator() {
        let tokens = scan("?< ?- ? ?:").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::QLangle,
                TokenKind::QMinus,
                TokenKind::QMark,
                TokenKind::QColon,
            ]
        );
    }

    #[test]
    fn reserved_words_round_trip() {
        let tokens = scan(".cmd .class").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Cmd);
        assert_eq!(tokens[1].kind, TokenKind::Class);
    }

    #[test]
    fn unknown_dotted_word_is_an_error() {
        assert!(scan(".nope").is_err());
    }

    #[test]
    fn typename_vs_identifier_by_case() {
        let tokens = scan("Foo bar").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Typename);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn number_adjacent_to_letter_is_an_error() {
        assert!(scan("1a").is_err());
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(scan("\"abc").is_err());
        assert!(scan("\"abc\ndef\"").is_err());
    }
}
