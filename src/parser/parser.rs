//! Recursive descent over the token stream.
//!
//! Every token, trivia included, lands in the green tree, so the text of the
//! root always equals the input. Bad input is wrapped in `ERROR` nodes.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::registry;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Green tree plus the errors collected while building it
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Red root over the green tree
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// No syntax errors were reported
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Message anchored to the offending range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse query source text into a CST
///
/// Never fails: malformed input yields ERROR nodes and entries in
/// [`Parse::errors`].
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let headers = find_query_headers(&tokens);
    let mut parser = Parser::new(&tokens, headers, TextSize::of(input));
    parser.parse_program();
    let parse = parser.finish();
    tracing::debug!(
        tokens = tokens.len(),
        errors = parse.errors.len(),
        "parsed query document"
    );
    parse
}

/// Marks the tokens that start a named query.
///
/// A header is a word at the start of a line, immediately followed by `:` and
/// then whitespace or end of input. Recognized argument aliases never start a
/// header, so `t:` typed at the start of a line stays a tag.
fn find_query_headers(tokens: &[Token<'_>]) -> Vec<bool> {
    let mut headers = vec![false; tokens.len()];
    for (idx, token) in tokens.iter().enumerate() {
        if token.kind != SyntaxKind::WORD {
            continue;
        }
        let line_start = idx == 0
            || (tokens[idx - 1].kind == SyntaxKind::WHITESPACE
                && (idx == 1 || tokens[idx - 1].text.contains('\n')));
        if !line_start {
            continue;
        }
        let colon = tokens.get(idx + 1).map(|t| t.kind) == Some(SyntaxKind::COLON);
        let separated = tokens
            .get(idx + 2)
            .map(|t| t.kind == SyntaxKind::WHITESPACE)
            .unwrap_or(true);
        if colon && separated && !registry::is_argument(token.text) {
            headers[idx] = true;
        }
    }
    headers
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    headers: Vec<bool>,
    pos: usize,
    depth: usize,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], headers: Vec<bool>, end: TextSize) -> Self {
        Self {
            tokens,
            headers,
            pos: 0,
            depth: 0,
            end,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // --- token inspection ---

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().map(|t| t.kind) == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Kind of the token directly after the current one (no trivia skipping).
    fn peek_adjacent(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + 1).map(|t| t.kind)
    }

    fn at_header(&self) -> bool {
        self.headers.get(self.pos).copied().unwrap_or(false)
    }

    /// Tokens that end an expression region.
    fn at_region_end(&self) -> bool {
        self.at_eof() || self.at_header() || (self.depth > 0 && self.at(SyntaxKind::R_PAREN))
    }

    fn can_start_term(&self) -> bool {
        if self.at_region_end() {
            return false;
        }
        match self.current_kind() {
            SyntaxKind::WORD
            | SyntaxKind::STRING
            | SyntaxKind::REGEX
            | SyntaxKind::MINUS
            | SyntaxKind::L_PAREN
            | SyntaxKind::ERROR => true,
            SyntaxKind::R_PAREN => self.depth == 0,
            kind => kind.is_operator(),
        }
    }

    // --- token consumption ---

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the current token under a different kind.
    fn bump_as(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.current() {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // --- error handling ---

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end));
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Wrap the current token in an ERROR node.
    fn error_bump(&mut self, message: impl Into<String>) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.bump();
        self.builder.finish_node();
    }

    // --- node building helpers ---

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Wrap the current token in a single-token node.
    fn token_node(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    // --- grammar rules ---

    /// Program = Region | Domain? Query*
    fn parse_program(&mut self) {
        self.start_node(SyntaxKind::PROGRAM);

        if !self.headers.contains(&true) {
            self.parse_region();
        } else {
            self.skip_trivia();
            if !self.at_header() {
                self.start_node(SyntaxKind::DOMAIN);
                self.parse_region();
                self.finish_node();
            }
            while !self.at_eof() {
                self.skip_trivia();
                if self.at_header() {
                    self.parse_query();
                } else if !self.at_eof() {
                    // Unreachable in practice: regions run up to the next header.
                    self.error_bump("expected a query");
                }
            }
        }

        self.finish_node();
    }

    /// Query = QueryName ':' QueryBody
    fn parse_query(&mut self) {
        self.start_node(SyntaxKind::QUERY);

        self.start_node(SyntaxKind::QUERY_NAME);
        self.bump();
        self.finish_node();
        self.eat(SyntaxKind::COLON);
        self.skip_trivia();

        self.start_node(SyntaxKind::QUERY_BODY);
        self.parse_region();
        self.finish_node();

        self.finish_node();
    }

    /// Region = (Or | stray keyword)*
    ///
    /// Runs until end of input, the next query header, or the closing paren
    /// of the enclosing clause.
    fn parse_region(&mut self) {
        loop {
            self.skip_trivia();
            if self.at_region_end() {
                break;
            }
            let pos_before = self.pos;
            match self.current_kind() {
                SyntaxKind::AND_KW | SyntaxKind::OR_KW => {
                    self.error_bump("expected a term before boolean operator");
                }
                _ => self.parse_or(),
            }
            // Stalled on a token no rule accepts.
            if self.pos == pos_before && !self.at_region_end() {
                self.error_bump(format!("unexpected token: {:?}", self.current_kind()));
            }
        }
    }

    /// Or = And ('or' And)*
    fn parse_or(&mut self) {
        let checkpoint = self.builder.checkpoint();
        self.parse_and();

        loop {
            self.skip_trivia();
            if !self.at(SyntaxKind::OR_KW) {
                break;
            }
            self.start_node_at(checkpoint, SyntaxKind::OR);
            self.bump();
            self.skip_trivia();
            if self.can_start_term() {
                self.parse_and();
            } else {
                self.error("expected a term after 'or'");
            }
            self.finish_node();
        }
    }

    /// And = Term ('and'? Term)*
    fn parse_and(&mut self) {
        let checkpoint = self.builder.checkpoint();
        self.parse_term();

        loop {
            self.skip_trivia();
            if self.at(SyntaxKind::AND_KW) {
                self.start_node_at(checkpoint, SyntaxKind::AND);
                self.bump();
                self.skip_trivia();
                if self.can_start_term() {
                    self.parse_term();
                } else {
                    self.error("expected a term after 'and'");
                }
                self.finish_node();
            } else if self.can_start_term() {
                self.start_node_at(checkpoint, SyntaxKind::AND);
                self.parse_term();
                self.finish_node();
            } else {
                break;
            }
        }
    }

    /// Term = Clause | Tag | Argument | StringLiteral | RegExp
    fn parse_term(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_PAREN => self.parse_clause(),
            SyntaxKind::MINUS => self.parse_prefixed_term(),
            SyntaxKind::WORD => {
                if self.peek_adjacent().is_some_and(SyntaxKind::is_operator) {
                    self.start_node(SyntaxKind::TAG);
                    self.parse_tag_body();
                    self.finish_node();
                } else {
                    self.token_node(SyntaxKind::ARGUMENT);
                }
            }
            SyntaxKind::STRING => self.parse_string_literal(),
            SyntaxKind::REGEX => self.parse_reg_exp(),
            SyntaxKind::R_PAREN => self.error_bump("unmatched ')'"),
            kind if kind.is_operator() => self.parse_stray_operator(),
            _ if self.at_eof() => self.error("expected a term"),
            _ => self.error_bump("unexpected character"),
        }
    }

    /// Tag = Prefix (Argument Operator Value? | Argument | StringLiteral | RegExp)
    fn parse_prefixed_term(&mut self) {
        if self.peek_adjacent() == Some(SyntaxKind::L_PAREN) {
            self.error_bump("a clause cannot be negated");
            return;
        }

        self.start_node(SyntaxKind::TAG);
        self.token_node(SyntaxKind::PREFIX);

        match self.current_kind() {
            SyntaxKind::WORD if !self.at_eof() => {
                if self.peek_adjacent().is_some_and(SyntaxKind::is_operator) {
                    self.parse_tag_body();
                } else {
                    self.token_node(SyntaxKind::ARGUMENT);
                }
            }
            SyntaxKind::STRING if !self.at_eof() => self.parse_string_literal(),
            SyntaxKind::REGEX if !self.at_eof() => self.parse_reg_exp(),
            _ => self.error("expected a term after '-'"),
        }

        self.finish_node();
    }

    /// Argument Operator (Value | StringLiteral | RegExp)?
    fn parse_tag_body(&mut self) {
        self.token_node(SyntaxKind::ARGUMENT);
        self.token_node(SyntaxKind::OPERATOR);

        match self.current_kind() {
            SyntaxKind::STRING if !self.at_eof() => self.parse_string_literal(),
            SyntaxKind::REGEX if !self.at_eof() => self.parse_reg_exp(),
            SyntaxKind::WORD | SyntaxKind::MINUS if !self.at_eof() && !self.at_header() => {
                self.start_node(SyntaxKind::VALUE);
                while self.at(SyntaxKind::WORD) || self.at(SyntaxKind::MINUS) {
                    self.bump();
                }
                self.finish_node();
            }
            // `o:and` searches for the word; keywords only join terms.
            SyntaxKind::AND_KW | SyntaxKind::OR_KW if !self.at_eof() => {
                self.start_node(SyntaxKind::VALUE);
                self.bump_as(SyntaxKind::WORD);
                self.finish_node();
            }
            _ => self.error("expected a value"),
        }
    }

    fn parse_string_literal(&mut self) {
        let closed = self
            .current()
            .map(|t| is_closed_literal(t.text, '"'))
            .unwrap_or(false);
        if !closed {
            self.error("unterminated string literal");
        }
        self.token_node(SyntaxKind::STRING_LITERAL);
    }

    fn parse_reg_exp(&mut self) {
        let closed = self
            .current()
            .map(|t| is_closed_literal(t.text, '/'))
            .unwrap_or(false);
        if !closed {
            self.error("unterminated regular expression");
        }
        self.token_node(SyntaxKind::REG_EXP);
    }

    /// An operator with no argument, e.g. `:foo`. Consumed with any adjacent value.
    fn parse_stray_operator(&mut self) {
        self.error("expected an argument before operator");
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        while matches!(
            self.current_kind(),
            SyntaxKind::WORD | SyntaxKind::MINUS | SyntaxKind::STRING | SyntaxKind::REGEX
        ) && !self.at_eof()
            && !self.at_header()
        {
            self.bump();
        }
        self.finish_node();
    }

    /// Clause = '(' Region ')'
    fn parse_clause(&mut self) {
        self.start_node(SyntaxKind::CLAUSE);

        self.bump(); // (
        self.depth += 1;
        self.parse_region();
        self.depth -= 1;

        if !self.eat(SyntaxKind::R_PAREN) {
            self.error("expected ')'");
        }

        self.finish_node();
    }
}

/// A literal is closed when it ends with an unescaped delimiter.
fn is_closed_literal(text: &str, delimiter: char) -> bool {
    let Some(inner) = text
        .strip_prefix(delimiter)
        .and_then(|rest| rest.strip_suffix(delimiter))
    else {
        return false;
    };
    let trailing_backslashes = inner.chars().rev().take_while(|&c| c == '\\').count();
    trailing_backslashes % 2 == 0
}
