//! Logos-based lexer for the query language
//!
//! Fast tokenization using the logos crate. The lexer is total: input that
//! matches no rule becomes an `ERROR` token so the parser can recover.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// Lexed token: kind, source slice and start offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Offset one past the last byte of the token.
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Iterator over tokens that tracks byte offsets
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(LogosToken::Word) => keyword_or_word(text),
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Collect every token of `input`
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

fn keyword_or_word(text: &str) -> SyntaxKind {
    if text.eq_ignore_ascii_case("and") {
        SyntaxKind::AND_KW
    } else if text.eq_ignore_ascii_case("or") {
        SyntaxKind::OR_KW
    } else {
        SyntaxKind::WORD
    }
}

/// Raw logos token, converted into a [`SyntaxKind`]
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    // Words may contain '-' and '/' after the first character (dates, hybrid
    // mana, collector numbers); a leading '-' is the negation prefix.
    #[regex(r#"[^\s()"/:=<>!\-][^\s()":=<>!]*"#)]
    Word,

    // Unterminated literals run to the end of input.
    #[regex(r#""([^"\\]|\\.)*"?"#)]
    String,

    #[regex(r"/([^/\\\n]|\\.)*/?")]
    Regex,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("-")]
    Minus,

    #[token(":")]
    Colon,

    #[token("=")]
    Eq,

    #[token("!=")]
    BangEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Word => SyntaxKind::WORD,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Regex => SyntaxKind::REGEX,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
        }
    }
}
