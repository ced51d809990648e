//! Operator vocabulary.
//!
//! This module defines the fixed operator set. Every structural symbol of the language (braces, parentheses,
//! `->`, `=>`, `:`) is an operator here, so the lexer has a single greedy rule for all of them.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; there are no synonyms.
//! - The lexer extends an operator one character at a time while the longer spelling is still registered. Every
//!   multi-character spelling therefore has all of its prefixes registered too.
//!
//! ## Examples
//! ```rust
//! use bramble_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("**="), Some(OperatorId::StarStarEq));
//! assert_eq!(operators::info_for(OperatorId::Shl).category, OperatorCategory::Shift);
//! ```

/// Stable identifier for every operator.
///
/// The discriminant doubles as the index into [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Single-character
    Plus,
    Comma,
    Dot,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Minus,
    Star,
    Slash,
    Percent,
    Gt,
    Lt,
    Eq,
    Amp,
    Pipe,
    Caret,
    Bang,
    Tilde,
    Question,
    Colon,
    LParen,
    RParen,

    // Two-character
    PipePipe,
    AmpAmp,
    Shr,
    Arrow,
    FatArrow,
    Shl,
    PlusEq,
    PlusPlus,
    StarStar,
    MinusMinus,
    MinusEq,
    StarEq,
    SlashEq,
    CaretEq,
    AmpEq,
    PipeEq,
    PercentEq,
    GtEq,
    LtEq,
    EqEq,
    NotEq,

    // Three-character and longer
    StarStarEq,
    UShr,
    ShrEq,
    ShlEq,
    AmpAmpEq,
    PipePipeEq,
    UShrEq,
}

/// Coarse grouping of operators, used by tooling and by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Bitwise,
    Shift,
    Logical,
    Comparison,
    Assignment,
    Update,
    Delimiter,
    Separator,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators, in [`OperatorId`] order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Single-character
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    op(OperatorId::Comma, ",", OperatorCategory::Separator),
    op(OperatorId::Dot, ".", OperatorCategory::Separator),
    op(OperatorId::LBrace, "{", OperatorCategory::Delimiter),
    op(OperatorId::RBrace, "}", OperatorCategory::Delimiter),
    op(OperatorId::LBracket, "[", OperatorCategory::Delimiter),
    op(OperatorId::RBracket, "]", OperatorCategory::Delimiter),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison),
    op(OperatorId::Eq, "=", OperatorCategory::Assignment),
    op(OperatorId::Amp, "&", OperatorCategory::Bitwise),
    op(OperatorId::Pipe, "|", OperatorCategory::Bitwise),
    op(OperatorId::Caret, "^", OperatorCategory::Bitwise),
    op(OperatorId::Bang, "!", OperatorCategory::Logical),
    op(OperatorId::Tilde, "~", OperatorCategory::Bitwise),
    op(OperatorId::Question, "?", OperatorCategory::Separator),
    op(OperatorId::Colon, ":", OperatorCategory::Separator),
    op(OperatorId::LParen, "(", OperatorCategory::Delimiter),
    op(OperatorId::RParen, ")", OperatorCategory::Delimiter),
    // Two-character
    op(OperatorId::PipePipe, "||", OperatorCategory::Logical),
    op(OperatorId::AmpAmp, "&&", OperatorCategory::Logical),
    op(OperatorId::Shr, ">>", OperatorCategory::Shift),
    op(OperatorId::Arrow, "->", OperatorCategory::Separator),
    op(OperatorId::FatArrow, "=>", OperatorCategory::Separator),
    op(OperatorId::Shl, "<<", OperatorCategory::Shift),
    op(OperatorId::PlusEq, "+=", OperatorCategory::Assignment),
    op(OperatorId::PlusPlus, "++", OperatorCategory::Update),
    op(OperatorId::StarStar, "**", OperatorCategory::Arithmetic),
    op(OperatorId::MinusMinus, "--", OperatorCategory::Update),
    op(OperatorId::MinusEq, "-=", OperatorCategory::Assignment),
    op(OperatorId::StarEq, "*=", OperatorCategory::Assignment),
    op(OperatorId::SlashEq, "/=", OperatorCategory::Assignment),
    op(OperatorId::CaretEq, "^=", OperatorCategory::Assignment),
    op(OperatorId::AmpEq, "&=", OperatorCategory::Assignment),
    op(OperatorId::PipeEq, "|=", OperatorCategory::Assignment),
    op(OperatorId::PercentEq, "%=", OperatorCategory::Assignment),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    // Three-character and longer
    op(OperatorId::StarStarEq, "**=", OperatorCategory::Assignment),
    op(OperatorId::UShr, ">>>", OperatorCategory::Shift),
    op(OperatorId::ShrEq, ">>=", OperatorCategory::Assignment),
    op(OperatorId::ShlEq, "<<=", OperatorCategory::Assignment),
    op(OperatorId::AmpAmpEq, "&&=", OperatorCategory::Assignment),
    op(OperatorId::PipePipeEq, "||=", OperatorCategory::Assignment),
    op(OperatorId::UShrEq, ">>>=", OperatorCategory::Assignment),
];

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Notes
/// - [`OPERATORS`] is ordered like [`OperatorId`]; the registry guardrail tests enforce that ordering.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return `true` if `c` starts at least one registered operator.
pub fn is_operator_start(c: char) -> bool {
    OPERATORS.iter().any(|o| o.spelling.starts_with(c))
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}
