//! Define the reserved keyword vocabulary for the Bramble language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `from` is not reserved. Imports match it by text so it stays usable as an identifier.
//!
//! ## Examples
//! ```rust
//! use bramble_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("match"), Some(KeywordId::Match));
//! assert_eq!(keywords::as_str(KeywordId::Intrinsic), "intrinsic");
//! assert_eq!(keywords::from_str("from"), None);
//! ```

/// Stable identifier for every reserved keyword.
///
/// The discriminant doubles as the index into [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Class,
    Let,
    Const,
    Fn,
    Extends,
    Macro,
    Intrinsic,

    // Modules
    Import,
    Export,

    // Control flow
    Return,
    Do,
    While,
    For,
    Loop,
    If,
    Else,
    Match,
    Break,
    Continue,
    With,

    // Qualifiers
    Pub,
    Inline,
    Static,
    Unsafe,
    Async,

    // Expression keywords
    As,
    Await,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; the parser owns context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Module,
    ControlFlow,
    Qualifier,
    Expression,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, in [`KeywordId`] order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Let, "let", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Fn, "fn", KeywordCategory::Declaration),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    info(KeywordId::Macro, "macro", KeywordCategory::Declaration),
    info(KeywordId::Intrinsic, "intrinsic", KeywordCategory::Declaration),
    // Modules
    info(KeywordId::Import, "import", KeywordCategory::Module),
    info(KeywordId::Export, "export", KeywordCategory::Module),
    // Control flow
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Loop, "loop", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::Match, "match", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::With, "with", KeywordCategory::ControlFlow),
    // Qualifiers
    info(KeywordId::Pub, "pub", KeywordCategory::Qualifier),
    info(KeywordId::Inline, "inline", KeywordCategory::Qualifier),
    info(KeywordId::Static, "static", KeywordCategory::Qualifier),
    info(KeywordId::Unsafe, "unsafe", KeywordCategory::Qualifier),
    info(KeywordId::Async, "async", KeywordCategory::Qualifier),
    // Expression keywords
    info(KeywordId::As, "as", KeywordCategory::Expression),
    info(KeywordId::Await, "await", KeywordCategory::Expression),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Notes
/// - [`KEYWORDS`] is ordered like [`KeywordId`]; the registry guardrail tests enforce that ordering.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
