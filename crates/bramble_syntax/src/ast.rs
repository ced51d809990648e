//! Abstract Syntax Tree definitions for Bramble
//!
//! This module defines all AST node types. The tree is strictly owned: every node owns its children, nothing is
//! shared. Leaves keep the text and span of the token they came from, so any node's source range can be rebuilt.
//!
//! The `Display` impls print source-faithful, re-parsable text. Binary operands are parenthesized and every
//! statement in a body is followed by `;`, so printing a program and parsing the output gives back an equal tree.

use std::fmt;

use bramble_core::lang::keywords::{self, KeywordId};
use bramble_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location.
///
/// Equality compares the nodes only: two trees parsed from differently formatted text are equal when they have
/// the same shape and the same token text.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// Identifier or literal text exactly as written.
pub type Name = Spanned<String>;

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node)
    }
}

/// A braced (or single-statement) body.
pub type Block = Vec<Statement>;

/// A program is a sequence of statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Placeholder left behind by error recovery
    Noop,
    Export(Declaration),
    /// `intrinsic "code"`
    Intrinsic(Name),
    Decorator(Decorator),
    Return(Option<Expr>),
    Break,
    Continue,
    While { condition: Expr, body: Block },
    DoWhile { body: Block, condition: Expr },
    If { condition: Expr, body: Block, alternate: Option<Block> },
    For(ForStmt),
    Loop(Block),
    Match(MatchStmt),
    Scope(Block),
    Macro(MacroDecl),
    Import(ImportDecl),
    ImportDefault(ImportDefault),
    Class(ClassDecl),
    Function(FunctionDecl),
    Variable(VariableDecl),
    Expression(Expr),
}

/// `for (init; condition; step) body`
///
/// `init` and `step` are [`Statement::Noop`] when left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Box<Statement>,
    pub condition: Expr,
    pub step: Box<Statement>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub value: Expr,
    pub branches: Vec<MatchBranch>,
    /// Body of the `_ => ...` branch
    pub default: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchBranch {
    pub pattern: Expr,
    pub body: Block,
}

// ============================================================================
// Declarations
// ============================================================================

/// Anything that can be exported or decorated.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Variable(VariableDecl),
    Function(FunctionDecl),
    Class(ClassDecl),
    Macro(MacroDecl),
    Decorator(Decorator),
}

/// `@callee(args) target`
///
/// Export never appears inside a decorator: an exported, decorated declaration is always
/// `Statement::Export(Declaration::Decorator(..))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    /// Dotted callee path, e.g. `a.b.c`
    pub callee: Vec<Name>,
    pub args: Vec<Expr>,
    pub target: Box<Declaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Let,
    Const,
}

impl BindingKind {
    pub fn keyword(self) -> KeywordId {
        match self {
            BindingKind::Let => KeywordId::Let,
            BindingKind::Const => KeywordId::Const,
        }
    }
}

/// `let a: T = 1, b = 2`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub kind: BindingKind,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Name,
    pub ty: Option<TypeNode>,
    pub value: Expr,
}

/// Qualifiers accepted in front of functions and methods.
///
/// Free functions only ever set `is_unsafe`, `is_inline` and `is_async`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub is_unsafe: bool,
    pub is_static: bool,
    pub is_pub: bool,
    pub is_inline: bool,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub qualifiers: Qualifiers,
    pub name: Name,
    pub generics: Vec<Name>,
    pub params: Vec<Parameter>,
    pub return_type: TypeNode,
    pub body: Block,
}

/// `name: Type = default`, where both the type and the default are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Name,
    pub ty: Option<TypeNode>,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Name,
    pub generics: Vec<Name>,
    pub extends: Option<TypeNode>,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub qualifiers: Qualifiers,
    pub name: Name,
    pub generics: Vec<Name>,
    pub params: Vec<Parameter>,
    pub return_type: TypeNode,
    pub body: Block,
}

/// `macro name = "code"`
#[derive(Debug, Clone, PartialEq)]
pub struct MacroDecl {
    pub name: Name,
    pub code: Name,
}

// ============================================================================
// Imports
// ============================================================================

/// `import { a, b: c } from "source"`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub members: Vec<ImportMember>,
    pub source: Name,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportMember {
    pub name: Name,
    pub alias: Option<Name>,
}

impl ImportMember {
    /// The name this member is bound to locally.
    pub fn local_name(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

/// `import name from "source"`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefault {
    pub name: Name,
    pub source: Name,
}

// ============================================================================
// Types
// ============================================================================

/// A type reference such as `Map<K, V>` or `io.Reader`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub path: TypePath,
    pub generics: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypePath {
    Name(Name),
    /// `object.member`
    Access { object: Box<TypePath>, member: Name },
}

impl TypePath {
    pub fn span(&self) -> Span {
        match self {
            TypePath::Name(name) => name.span,
            TypePath::Access { object, member } => object.span().merge(member.span),
        }
    }
}

impl TypeNode {
    pub fn span(&self) -> Span {
        self.generics
            .iter()
            .fold(self.path.span(), |span, generic| span.merge(generic.span()))
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Any infix operator, including `,` and the assignment family
    Binary {
        left: Box<Expr>,
        op: Spanned<OperatorId>,
        right: Box<Expr>,
    },
    /// `condition ? value : alternate`
    Conditional {
        condition: Box<Expr>,
        value: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// `expr as Type`
    Cast { expr: Box<Expr>, ty: TypeNode },
    Prefix { op: Spanned<PrefixOp>, operand: Box<Expr> },
    Postfix { operand: Box<Expr>, op: Spanned<PostfixOp> },
    /// `object.property`
    Member { object: Box<Expr>, property: Name },
    Call(CallExpr),
    Variable(Name),
    Literal(Name),
    /// Placeholder left behind by error recovery
    Noop(Spanned<()>),
}

/// `callee<T>(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub generics: Vec<TypeNode>,
    /// Arguments; the span runs from `(` to `)`
    pub args: Spanned<Vec<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Await,
    Increment,
    Decrement,
    Plus,
    Minus,
    BitNot,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PrefixOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::PlusPlus => Some(PrefixOp::Increment),
            OperatorId::MinusMinus => Some(PrefixOp::Decrement),
            OperatorId::Plus => Some(PrefixOp::Plus),
            OperatorId::Minus => Some(PrefixOp::Minus),
            OperatorId::Tilde => Some(PrefixOp::BitNot),
            OperatorId::Bang => Some(PrefixOp::Not),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Await => keywords::as_str(KeywordId::Await),
            PrefixOp::Increment => operators::as_str(OperatorId::PlusPlus),
            PrefixOp::Decrement => operators::as_str(OperatorId::MinusMinus),
            PrefixOp::Plus => operators::as_str(OperatorId::Plus),
            PrefixOp::Minus => operators::as_str(OperatorId::Minus),
            PrefixOp::BitNot => operators::as_str(OperatorId::Tilde),
            PrefixOp::Not => operators::as_str(OperatorId::Bang),
        }
    }
}

impl PostfixOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::PlusPlus => Some(PostfixOp::Increment),
            OperatorId::MinusMinus => Some(PostfixOp::Decrement),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Increment => operators::as_str(OperatorId::PlusPlus),
            PostfixOp::Decrement => operators::as_str(OperatorId::MinusMinus),
        }
    }
}

impl Expr {
    /// Rebuild the source range covered by this expression from its leaves.
    ///
    /// Parentheses are not part of the tree, so `(1 + 2)` spans `1 + 2`.
    pub fn span(&self) -> Span {
        match self {
            Expr::Binary { left, right, .. } => left.span().merge(right.span()),
            Expr::Conditional {
                condition, alternate, ..
            } => condition.span().merge(alternate.span()),
            Expr::Cast { expr, ty } => expr.span().merge(ty.span()),
            Expr::Prefix { op, operand } => op.span.merge(operand.span()),
            Expr::Postfix { operand, op } => operand.span().merge(op.span),
            Expr::Member { object, property } => object.span().merge(property.span),
            Expr::Call(call) => call.callee.span().merge(call.args.span),
            Expr::Variable(name) | Expr::Literal(name) => name.span,
            Expr::Noop(placeholder) => placeholder.span,
        }
    }

    fn is_comma(&self) -> bool {
        matches!(self, Expr::Binary { op, .. } if op.node == OperatorId::Comma)
    }
}

// ============================================================================
// Printing
// ============================================================================

/// Prints an expression that sits in a comma-separated list, wrapping a comma expression in parentheses.
struct ListItem<'a>(&'a Expr);

impl fmt::Display for ListItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_comma() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Prints the receiver of a member access or call; anything but a leaf or another chain link gets parentheses.
struct Receiver<'a>(&'a Expr);

impl fmt::Display for Receiver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Variable(_) | Expr::Literal(_) | Expr::Member { .. } | Expr::Call(_) => write!(f, "{}", self.0),
            other => write!(f, "({})", other),
        }
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    let items: Vec<ListItem<'_>> = args.iter().map(ListItem).collect();
    write_separated(f, &items, ",")
}

fn write_generic_names(f: &mut fmt::Formatter<'_>, generics: &[Name]) -> fmt::Result {
    if generics.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_separated(f, generics, ",")?;
    f.write_str(">")
}

fn write_generic_types(f: &mut fmt::Formatter<'_>, generics: &[TypeNode]) -> fmt::Result {
    if generics.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_separated(f, generics, ",")?;
    f.write_str(">")
}

/// Write `{s1;s2;}`, leaving out recovery placeholders.
fn write_block(f: &mut fmt::Formatter<'_>, block: &[Statement]) -> fmt::Result {
    f.write_str("{")?;
    write_statements(f, block)?;
    f.write_str("}")
}

fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for statement in statements {
        if !matches!(statement, Statement::Noop) {
            write!(f, "{};", statement)?;
        }
    }
    Ok(())
}

fn write_signature(
    f: &mut fmt::Formatter<'_>,
    generics: &[Name],
    params: &[Parameter],
    return_type: &TypeNode,
    body: &[Statement],
) -> fmt::Result {
    write_generic_names(f, generics)?;
    f.write_str("(")?;
    write_separated(f, params, ",")?;
    write!(f, ")->{}", return_type)?;
    write_block(f, body)
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Noop => Ok(()),
            Statement::Export(decl) => write!(f, "export {}", decl),
            Statement::Intrinsic(code) => write!(f, "intrinsic {}", code),
            Statement::Decorator(decorator) => write!(f, "{}", decorator),
            Statement::Return(Some(value)) => write!(f, "return {}", value),
            Statement::Return(None) => f.write_str("return"),
            Statement::Break => f.write_str("break"),
            Statement::Continue => f.write_str("continue"),
            Statement::While { condition, body } => {
                write!(f, "while({})", condition)?;
                write_block(f, body)
            }
            Statement::DoWhile { body, condition } => {
                f.write_str("do")?;
                write_block(f, body)?;
                write!(f, "while({})", condition)
            }
            Statement::If {
                condition,
                body,
                alternate,
            } => {
                write!(f, "if({})", condition)?;
                write_block(f, body)?;
                if let Some(alternate) = alternate {
                    f.write_str("else")?;
                    write_block(f, alternate)?;
                }
                Ok(())
            }
            Statement::For(stmt) => {
                write!(f, "for({};{};{})", stmt.init, stmt.condition, stmt.step)?;
                write_block(f, &stmt.body)
            }
            Statement::Loop(body) => {
                f.write_str("loop")?;
                write_block(f, body)
            }
            Statement::Match(stmt) => write!(f, "{}", stmt),
            Statement::Scope(body) => write_block(f, body),
            Statement::Macro(decl) => write!(f, "{}", decl),
            Statement::Import(decl) => write!(f, "{}", decl),
            Statement::ImportDefault(decl) => write!(f, "import {} from {}", decl.name, decl.source),
            Statement::Class(decl) => write!(f, "{}", decl),
            Statement::Function(decl) => write!(f, "{}", decl),
            Statement::Variable(decl) => write!(f, "{}", decl),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for MatchStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match({}){{", self.value)?;
        for branch in &self.branches {
            write!(f, "{} =>", ListItem(&branch.pattern))?;
            write_block(f, &branch.body)?;
        }
        if let Some(default) = &self.default {
            f.write_str("_ =>")?;
            write_block(f, default)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Variable(decl) => write!(f, "{}", decl),
            Declaration::Function(decl) => write!(f, "{}", decl),
            Declaration::Class(decl) => write!(f, "{}", decl),
            Declaration::Macro(decl) => write!(f, "{}", decl),
            Declaration::Decorator(decl) => write!(f, "{}", decl),
        }
    }
}

impl fmt::Display for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("@")?;
        write_separated(f, &self.callee, ".")?;
        if !self.args.is_empty() {
            f.write_str("(")?;
            write_args(f, &self.args)?;
            f.write_str(")")?;
        }
        write!(f, " {}", self.target)
    }
}

impl fmt::Display for VariableDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", keywords::as_str(self.kind.keyword()))?;
        write_separated(f, &self.bindings, ",")
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ty) = &self.ty {
            // Space keeps a closing `>` from fusing with `=` into `>=`
            write!(f, ":{} ", ty)?;
        }
        write!(f, "={}", ListItem(&self.value))
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = [
            (self.is_unsafe, KeywordId::Unsafe),
            (self.is_static, KeywordId::Static),
            (self.is_pub, KeywordId::Pub),
            (self.is_inline, KeywordId::Inline),
            (self.is_async, KeywordId::Async),
        ];
        for (set, keyword) in words {
            if set {
                write!(f, "{} ", keywords::as_str(keyword))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fn {}", self.qualifiers, self.name)?;
        write_signature(f, &self.generics, &self.params, &self.return_type, &self.body)
    }
}

impl fmt::Display for MethodDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.qualifiers, self.name)?;
        write_signature(f, &self.generics, &self.params, &self.return_type, &self.body)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ty) = &self.ty {
            write!(f, ":{}", ty)?;
        }
        if let Some(default) = &self.default {
            f.write_str(" ")?;
            write!(f, "={}", ListItem(default))?;
        }
        Ok(())
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)?;
        write_generic_names(f, &self.generics)?;
        if let Some(base) = &self.extends {
            write!(f, " extends {}", base)?;
        }
        f.write_str("{")?;
        for method in &self.methods {
            write!(f, "{}", method)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for MacroDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "macro {}={}", self.name, self.code)
    }
}

impl fmt::Display for ImportDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import {")?;
        write_separated(f, &self.members, ",")?;
        write!(f, "}} from {}", self.source)
    }
}

impl fmt::Display for ImportMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{}:{}", self.name, alias),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        write_generic_types(f, &self.generics)
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePath::Name(name) => write!(f, "{}", name),
            TypePath::Access { object, member } => write!(f, "{}.{}", object, member),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { left, op, right } => {
                write!(f, "({}){}({})", left, operators::as_str(op.node), right)
            }
            Expr::Conditional {
                condition,
                value,
                alternate,
            } => write!(f, "({})?({}):({})", condition, value, alternate),
            Expr::Cast { expr, ty } => write!(f, "({}) as {}", expr, ty),
            Expr::Prefix { op, operand } => match op.node {
                PrefixOp::Await => write!(f, "await ({})", operand),
                other => write!(f, "{}({})", other.as_str(), operand),
            },
            Expr::Postfix { operand, op } => write!(f, "({}){}", operand, op.node.as_str()),
            Expr::Member { object, property } => write!(f, "{}.{}", Receiver(object), property),
            Expr::Call(call) => {
                write!(f, "{}", Receiver(&call.callee))?;
                write_generic_types(f, &call.generics)?;
                f.write_str("(")?;
                write_args(f, &call.args.node)?;
                f.write_str(")")
            }
            Expr::Variable(name) | Expr::Literal(name) => write!(f, "{}", name),
            Expr::Noop(_) => Ok(()),
        }
    }
}
