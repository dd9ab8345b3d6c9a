//! Maximal-munch punctuation table, built once per lexer from the closed
//! set of punctuation kinds (see [`crate::token::TokenKind`]).

use crate::field_tree::FieldTree;
use crate::token::TokenKind;

const ENTRIES: &[(&str, TokenKind)] = &[
    ("@!", TokenKind::AmBang),
    ("&", TokenKind::Ampersand),
    ("@", TokenKind::Amphora),
    ("'", TokenKind::Apostrophe),
    ("*", TokenKind::Asterisk),
    ("!", TokenKind::Bang),
    ("!<", TokenKind::BangLangle),
    ("^", TokenKind::Carat),
    ("^?", TokenKind::CaratQ),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (":<", TokenKind::ColAngle),
    ("::", TokenKind::DColon),
    ("=", TokenKind::Equals),
    ("<", TokenKind::Langle),
    ("<-", TokenKind::Larrow),
    ("{", TokenKind::Lbrace),
    ("[", TokenKind::Lbracket),
    ("(", TokenKind::Lparen),
    ("-", TokenKind::Minus),
    ("%", TokenKind::Percent),
    ("|", TokenKind::Pipe),
    ("|:", TokenKind::PipeCol),
    ("+", TokenKind::Plus),
    ("#", TokenKind::Pound),
    ("?:", TokenKind::QColon),
    ("?<", TokenKind::QLangle),
    ("?", TokenKind::QMark),
    ("?-", TokenKind::QMinus),
    (">", TokenKind::Rangle),
    ("->", TokenKind::Rarrow),
    ("}", TokenKind::Rbrace),
    ("]", TokenKind::Rbracket),
    (")", TokenKind::Rparen),
    ("/", TokenKind::Slash),
    ("_", TokenKind::Underscore),
];

pub fn build_table() -> FieldTree<TokenKind> {
    let mut tree = FieldTree::new();
    for (spelling, kind) in ENTRIES {
        tree.insert(spelling.as_bytes(), *kind)
            .expect("duplicate punctuation spelling in table");
    }
    tree
}
