//! Token kinds and the `Token` record produced by the lexer.

use crate::position::Position;
use std::fmt::{Display, Formatter};

/// The closed set of lexical kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Decimal,
    Hex,
    Number,
    StringLit,
    // Identifiers
    Identifier,
    Typename,
    // Reserved words (dotted in source: `.module`, `.cmd`, ...)
    Module,
    Import,
    Alias,
    Domain,
    Enum,
    Record,
    Object,
    Instance,
    Class,
    Cmd,
    Intrinsic,
    Program,
    Test,
    // Punctuation
    AmBang,     // @!
    Ampersand,  // &
    Amphora,    // @
    Apostrophe, // '
    Asterisk,   // *
    Bang,       // !
    BangLangle, // !<
    Carat,      // ^
    CaratQ,     // ^?
    Comma,      // ,
    Colon,      // :
    ColAngle,   // :<
    DColon,     // ::
    Equals,     // =
    Langle,     // <
    Larrow,     // <-
    Lbrace,     // {
    Lbracket,   // [
    Lparen,     // (
    Minus,      // -
    Percent,    // %
    Pipe,       // |
    PipeCol,    // |:
    Plus,       // +
    Pound,      // #
    QColon,     // ?:
    QLangle,    // ?<
    QMark,      // ?
    QMinus,     // ?-
    Rangle,     // >
    Rarrow,     // ->
    Rbrace,     // }
    Rbracket,   // ]
    Rparen,     // )
    Slash,      // /
    Underscore, // _ (empty-body / empty-parameter sentinel)
}

impl TokenKind {
    /// Dotted reserved word spelling, if this kind is a reserved word.
    pub fn reserved_spelling(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Module => ".module",
            Import => ".import",
            Alias => ".alias",
            Domain => ".domain",
            Enum => ".enum",
            Record => ".record",
            Object => ".object",
            Instance => ".instance",
            Class => ".class",
            Cmd => ".cmd",
            Intrinsic => ".intrinsic",
            Program => ".program",
            Test => ".test",
            _ => return None,
        })
    }
}

/// An index of a token within the owning `TokenStream`.
pub type TokenPos = usize;

/// An immutable lexical token. `bound` is a non-owning back-pointer (by
/// index) into the same stream: the first later token whose column is less
/// than or equal to this token's column, or `None` if no such token exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub bound: Option<TokenPos>,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            bound: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})@{}:{}", self.kind, self.text, self.line, self.column)
    }
}

/// An ordered, owned sequence of tokens with stable identity; combinators
/// hold indices into it rather than references.
#[derive(Debug, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, pos: TokenPos) -> Option<&Token> {
        self.tokens.get(pos)
    }
}
