//! Token and node kinds of the query grammar
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of the card-search query language.

/// All syntax kinds (tokens and nodes) of the query language
///
/// Tokens are leaf nodes (words, operators, literals, punctuation).
/// Nodes are composite (tags, clauses, boolean operators, queries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // LITERALS
    // =========================================================================
    WORD,   // creature, t, 2020-01-01
    STRING, // "lightning bolt"
    REGEX,  // /^goblin/

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN, // (
    R_PAREN, // )
    MINUS,   // -
    COLON,   // :
    EQ,      // =
    BANG_EQ, // !=
    LT,      // <
    GT,      // >
    LT_EQ,   // <=
    GT_EQ,   // >=

    // =========================================================================
    // KEYWORDS (case-insensitive)
    // =========================================================================
    AND_KW,
    OR_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    PROGRAM,
    DOMAIN,
    QUERY,
    QUERY_NAME,
    QUERY_BODY,
    TAG,
    PREFIX,
    ARGUMENT,
    OPERATOR,
    VALUE,
    STRING_LITERAL,
    REG_EXP,
    CLAUSE,
    AND,
    OR,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    /// Check if this is a comparison or assignment operator token
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::COLON | Self::EQ | Self::BANG_EQ | Self::LT | Self::GT | Self::LT_EQ | Self::GT_EQ
        )
    }

    /// `and` / `or`
    pub fn is_keyword(self) -> bool {
        matches!(self, Self::AND_KW | Self::OR_KW)
    }

    /// Quoted strings, regexes and numbers
    pub fn is_literal(self) -> bool {
        matches!(self, Self::WORD | Self::STRING | Self::REGEX)
    }

    /// Human-readable node name, as shown by debug tooltips.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "Whitespace",
            Self::WORD => "Word",
            Self::STRING => "String",
            Self::REGEX => "Regex",
            Self::L_PAREN | Self::R_PAREN => "Paren",
            Self::MINUS => "Minus",
            Self::COLON
            | Self::EQ
            | Self::BANG_EQ
            | Self::LT
            | Self::GT
            | Self::LT_EQ
            | Self::GT_EQ => "Operator",
            Self::AND_KW => "and",
            Self::OR_KW => "or",
            Self::PROGRAM => "Program",
            Self::DOMAIN => "Domain",
            Self::QUERY => "Query",
            Self::QUERY_NAME => "QueryName",
            Self::QUERY_BODY => "QueryBody",
            Self::TAG => "Tag",
            Self::PREFIX => "Prefix",
            Self::ARGUMENT => "Argument",
            Self::OPERATOR => "Operator",
            Self::VALUE => "Value",
            Self::STRING_LITERAL => "StringLiteral",
            Self::REG_EXP => "RegExp",
            Self::CLAUSE => "Clause",
            Self::AND => "And",
            Self::OR => "Or",
            Self::ERROR => "⚠",
            Self::__LAST => "",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Bounds checked against __LAST above.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Rowan language tag for query trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScryLanguage {}

impl rowan::Language for ScryLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Query-language instantiations of the rowan types
pub type SyntaxNode = rowan::SyntaxNode<ScryLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScryLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScryLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ScryLanguage>;
