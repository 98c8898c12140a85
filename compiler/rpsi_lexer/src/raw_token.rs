//! Raw tokens recognized by logos, before bracket cooking and merging.

use logos::{Lexer, Logos};

/// Whether a raw string found its closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Termination {
    Closed,
    Unterminated,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\f\r]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,

    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("repeat")]
    Repeat,
    #[token("while")]
    While,
    #[token("function")]
    Function,
    #[token("\\")]
    Lambda,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("next")]
    Next,
    #[token("break")]
    Break,
    #[token("TRUE")]
    True,
    #[token("FALSE")]
    False,
    #[token("NULL")]
    Null,
    #[token("Inf")]
    Inf,
    #[token("NaN")]
    NaN,
    #[token("NA")]
    Na,
    #[token("NA_integer_")]
    NaInteger,
    #[token("NA_real_")]
    NaReal,
    #[token("NA_complex_")]
    NaComplex,
    #[token("NA_character_")]
    NaCharacter,
    #[token("...")]
    TripleDots,

    // Assignment
    #[token("<-")]
    LeftAssign,
    #[token("<<-")]
    LeftComplexAssign,
    #[token(":=")]
    LeftAssignOld,
    #[token("->")]
    RightAssign,
    #[token("->>")]
    RightComplexAssign,
    #[token("=")]
    Eq,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("!")]
    Not,
    #[token("&")]
    And,
    #[token("&&")]
    AndAnd,
    #[token("|")]
    Or,
    #[token("||")]
    OrOr,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mult,
    #[token("/")]
    Div,
    #[token("^")]
    #[token("**")]
    Exp,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token(":::")]
    TripleColon,
    #[token("$")]
    ListSubset,
    #[token("@")]
    At,
    #[token("?")]
    Help,
    #[regex(r"%[^%\n]*%")]
    #[token("|>")]
    InfixOp,
    #[token("_")]
    Underscore,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("[[")]
    LDoubleBracket,
    /// Always a single `]`; `]]` is formed by the cooker.
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,

    // Numbers: the suffix decides the kind.
    #[regex(r"0[xX][0-9a-fA-F]+[Li]?", number)]
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?[Li]?", number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[Li]?", number)]
    Number(NumberKind),

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    String,

    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    #[regex(r"'([^'\\]|\\(.|\n))*")]
    UnterminatedString,

    /// `r"(`, `R'---[`, ...; the callback scans to the matching close.
    #[regex(r#"[rR]["']-*[\(\[\{]"#, raw_string)]
    RawString(Termination),

    #[regex(r"[\p{L}][\p{L}\p{N}._]*")]
    #[regex(r"\.[\p{L}._][\p{L}\p{N}._]*")]
    #[token(".")]
    #[regex(r"`[^`]*`")]
    Identifier,
}

/// Classified numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Integer,
    Numeric,
    Complex,
}

fn number(lex: &mut Lexer<RawToken>) -> NumberKind {
    match lex.slice().as_bytes().last() {
        Some(b'L') => NumberKind::Integer,
        Some(b'i') => NumberKind::Complex,
        _ => NumberKind::Numeric,
    }
}

/// Scan a raw string body: the opener `r"--(` is closed by `)--"`.
fn raw_string(lex: &mut Lexer<RawToken>) -> Termination {
    let opener = lex.slice();
    let quote = opener.as_bytes()[1] as char;
    let dashes = opener.len() - 3;
    let close_bracket = match opener.as_bytes()[opener.len() - 1] {
        b'(' => ')',
        b'[' => ']',
        _ => '}',
    };
    let mut closer = String::with_capacity(dashes + 2);
    closer.push(close_bracket);
    closer.extend(std::iter::repeat('-').take(dashes));
    closer.push(quote);

    let rest = lex.remainder();
    if let Some(at) = rest.find(&closer) {
        lex.bump(at + closer.len());
        Termination::Closed
    } else {
        lex.bump(rest.len());
        Termination::Unterminated
    }
}
